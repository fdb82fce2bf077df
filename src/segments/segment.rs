use crate::types::{Color, Coordinate};
use serde::{Deserialize, Serialize};
use std::slice;

/// Handle identifying one allocated segment in a [`SegmentForest`].
///
/// Segments are compared by handle, never by content: two segments covering
/// the same pixels are distinct unless they share the handle.
///
/// [`SegmentForest`]: super::SegmentForest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

impl SegmentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single pixel or the flattened union of two segments.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Leaf {
        coordinate: Coordinate,
        color: Color,
    },
    /// Pixel lists of both inputs, first operand first. No links back to the
    /// inputs are kept. Only [`Segment::merged`] builds this variant.
    Merged(MergedPixels),
}

/// Non-empty, index-aligned pixel lists of a merged segment.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedPixels {
    first: Coordinate,
    coordinates: Vec<Coordinate>,
    colors: Vec<Color>,
}

impl MergedPixels {
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Segment {
    pub fn leaf(coordinate: Coordinate, color: Color) -> Self {
        Segment::Leaf { coordinate, color }
    }

    pub fn merged(first: &Segment, second: &Segment) -> Self {
        let total = first.pixel_count() + second.pixel_count();
        let mut coordinates = Vec::with_capacity(total);
        coordinates.extend_from_slice(first.coordinates());
        coordinates.extend_from_slice(second.coordinates());
        let mut colors = Vec::with_capacity(total);
        colors.extend_from_slice(first.colors());
        colors.extend_from_slice(second.colors());
        Segment::Merged(MergedPixels {
            first: first.first_coordinate(),
            coordinates,
            colors,
        })
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        match self {
            Segment::Leaf { .. } => 1,
            Segment::Merged(pixels) => pixels.coordinates.len(),
        }
    }

    /// Pixels in merge-concatenation order (not spatial order).
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Segment::Leaf { coordinate, .. } => slice::from_ref(coordinate),
            Segment::Merged(pixels) => pixels.coordinates(),
        }
    }

    /// Colors index-aligned with [`Segment::coordinates`].
    pub fn colors(&self) -> &[Color] {
        match self {
            Segment::Leaf { color, .. } => slice::from_ref(color),
            Segment::Merged(pixels) => pixels.colors(),
        }
    }

    /// First pixel of the segment; used as the deterministic tie-break key.
    #[inline]
    pub fn first_coordinate(&self) -> Coordinate {
        match self {
            Segment::Leaf { coordinate, .. } => *coordinate,
            Segment::Merged(pixels) => pixels.first,
        }
    }
}
