//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a TIFF/PNG/JPEG/etc. into an owned 8-bit RGB buffer.
//! - `save_rgb_image`: write an RGB buffer; format follows the file extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB, dropping any alpha.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    image::open(path)
        .map(|img| img.into_rgb8())
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Save an RGB buffer; the encoder is chosen from the path extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
