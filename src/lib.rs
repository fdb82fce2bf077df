#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod grow;
pub mod image;
pub mod overlay;
pub mod types;

// Building blocks of the engine; public for tools and tests.
pub mod config;
pub mod cost;
pub mod curve;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Result, SegmentationError};
pub use crate::grow::{GrowOptions, Segmenter};
pub use crate::segments::{Segment, SegmentId};
pub use crate::types::{Color, Coordinate};

pub use crate::diagnostics::SegmentationReport;
pub use crate::overlay::{overlay_segmentation, BOUNDARY_BLUE};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use region_segmenter::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let side = 32usize;
/// let rgb = vec![128u8; side * side * 3];
/// let img = ImageRgb8::packed(side, side, &rgb);
///
/// let seg = Segmenter::new(&img, GrowOptions::new(5, 800.0))?;
/// println!("segments={}", seg.roots().len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, ImageSink, ImageSource};
    pub use crate::{Coordinate, GrowOptions, SegmentationError, Segmenter};
}
