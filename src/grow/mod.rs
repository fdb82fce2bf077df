//! Agglomerative region growing over a [`SegmentForest`].
//!
//! A pass visits every coordinate in [`crate::curve`] order. At each stop the
//! root segment `A` owning the coordinate computes its best neighbors (minimum
//! merge cost, at most `threshold`). If one of them also lists `A` among its
//! own best neighbors the pair is merged. Otherwise the attempt follows the
//! preferred neighbor and retries from there, descending the merge-cost
//! landscape until a mutually preferred pair or a dead end is found.
//!
//! Passes repeat until one records no merge. Ties, both among mutual matches
//! and among chase targets, go to the segment whose first pixel is smallest
//! in `(x, y)` order, which makes runs reproducible.
//!
//! [`SegmentForest`]: crate::segments::SegmentForest

mod engine;
mod options;

pub use engine::Segmenter;
pub use options::{GrowOptions, MAX_EXPONENT};
