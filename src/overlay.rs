//! Segment boundary visualization.
//!
//! A pixel is a boundary pixel when any of its 4-neighbors inside the
//! segmented block belongs to a different root segment. The overlay copies
//! the source block and paints boundary pixels with a marker color.

use crate::error::{Result, SegmentationError};
use crate::grow::Segmenter;
use crate::image::{ImageSink, ImageSource};
use crate::types::{Color, Coordinate};

/// Default marker color for segment boundaries.
pub const BOUNDARY_BLUE: Color = [0, 0, 255];

/// Row-major boundary flags for the segmented block.
pub fn boundary_mask(segmenter: &Segmenter) -> Result<Vec<bool>> {
    let side = segmenter.side();
    let labels = segmenter.label_map()?;
    let mut mask = vec![false; side * side];
    for y in 0..side {
        for x in 0..side {
            let label = labels[y * side + x];
            mask[y * side + x] = Coordinate::new(x, y)
                .neighbors(side)
                .any(|n| labels[n.y * side + n.x] != label);
        }
    }
    Ok(mask)
}

/// Render the top-left block of `source` into `sink` with boundaries marked.
pub fn overlay_segmentation<S, K>(
    source: &S,
    segmenter: &Segmenter,
    sink: &mut K,
    marker: Color,
) -> Result<()>
where
    S: ImageSource + ?Sized,
    K: ImageSink + ?Sized,
{
    let side = segmenter.side();
    let mask = boundary_mask(segmenter)?;
    let color = |x: usize, y: usize| {
        if mask[y * side + x] {
            marker
        } else {
            source.pixel_color(x, y)
        }
    };
    sink.write(side, side, &color)
        .map_err(SegmentationError::Sink)
}
