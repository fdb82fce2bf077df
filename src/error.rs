use crate::types::Coordinate;
use thiserror::Error;

/// Errors reported by the segmentation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentationError {
    /// The image source does not cover the `2^N x 2^N` block being segmented.
    #[error("image {width}x{height} does not cover the required {required}x{required} block")]
    InvalidDimension {
        required: usize,
        width: usize,
        height: usize,
    },
    #[error("invalid segmentation options: {0}")]
    InvalidConfig(String),
    /// The merge forest lost its shape (cycle or re-parented segment).
    /// Indicates a bug in forest construction, never a user error.
    #[error("segmentation forest invariant violated: {0}")]
    InvariantViolation(String),
    /// The best-neighbor chase starting at `start` exceeded the hop cap.
    #[error("best-neighbor chase from ({}, {}) exceeded {hops} hops", .start.x, .start.y)]
    NonTermination { hops: usize, start: Coordinate },
    #[error("coordinate ({x}, {y}) lies outside the {side}x{side} grid")]
    CoordinateOutOfRange { x: usize, y: usize, side: usize },
    #[error("image sink failed: {0}")]
    Sink(String),
}

pub type Result<T, E = SegmentationError> = std::result::Result<T, E>;
