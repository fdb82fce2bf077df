use crate::grow::GrowOptions;
use crate::types::Color;
use crate::overlay::BOUNDARY_BLUE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SegmentToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub grow: GrowOptions,
    #[serde(default)]
    pub overlay: OverlayConfig,
    pub output: SegmentOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// RGB color painted on boundary pixels.
    pub marker: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            marker: BOUNDARY_BLUE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SegmentOutputConfig {
    /// Source block with segment boundaries painted in the marker color.
    #[serde(rename = "overlay_image")]
    pub overlay_image: PathBuf,
    /// Optional JSON run report.
    #[serde(default, rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<SegmentToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<SegmentToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
