//! Serializable diagnostics describing a segmentation run.

mod report;

pub(crate) use report::elapsed_ms;
pub use report::{PassStats, SegmentationReport, StageTiming, TimingBreakdown};
