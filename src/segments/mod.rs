//! Segment model: pixel and merged segments plus the merge forest.
//!
//! Every grid coordinate starts as a `Leaf` segment. Accepting a merge
//! allocates a `Merged` segment holding the flattened pixel lists of both
//! inputs and records it as the parent of each. The forest never compresses
//! paths and never forgets a segment, so the handle of any segment stays
//! valid for the lifetime of the forest and resolving a root costs one hop
//! per merge level above the starting segment.
//!
//! Root lookups, neighbor discovery and best-neighbor scoring live here;
//! the growth policy built on top of them is in `crate::grow`.

mod forest;
mod neighbors;
mod segment;

pub use forest::SegmentForest;
pub use segment::{MergedPixels, Segment, SegmentId};
