use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Milliseconds spent in one named stage (`seed`, `grow`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub elapsed_ms: f64,
}

/// Stage timings in execution order plus their running total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Close the stage that began at `start` and return its duration.
    pub fn record(&mut self, stage: &str, start: Instant) -> f64 {
        let elapsed_ms = elapsed_ms(start);
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming {
            stage: stage.to_owned(),
            elapsed_ms,
        });
        elapsed_ms
    }
}

#[inline]
pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Outcome of one full growth pass over the curve order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStats {
    pub pass: usize,
    pub merges: usize,
    /// Forest entries after the pass (two per merge so far).
    pub forest_len: usize,
    pub elapsed_ms: f64,
}

/// Summary of a segmentation run, suitable for JSON export.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    pub n: u32,
    pub side: usize,
    pub threshold: f64,
    pub leaves: usize,
    pub merges: usize,
    pub segments: usize,
    pub passes: Vec<PassStats>,
    /// Pixel count of each final segment, largest first.
    pub segment_sizes: Vec<usize>,
    pub timing: TimingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_stages_in_order() {
        let mut timing = TimingBreakdown::default();
        let seed = timing.record("seed", Instant::now());
        let grow = timing.record("grow", Instant::now());
        let stages: Vec<_> = timing.stages.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(stages, vec!["seed", "grow"]);
        assert!(seed >= 0.0 && grow >= 0.0);
        assert_eq!(timing.total_ms, seed + grow);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = SegmentationReport {
            n: 1,
            side: 2,
            threshold: 0.0,
            leaves: 4,
            merges: 0,
            segments: 4,
            passes: vec![PassStats {
                pass: 1,
                merges: 0,
                forest_len: 0,
                elapsed_ms: 0.5,
            }],
            segment_sizes: vec![1; 4],
            timing: TimingBreakdown::default(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["segmentSizes"], serde_json::json!([1, 1, 1, 1]));
        assert_eq!(json["passes"][0]["forestLen"], 0);
        assert_eq!(json["timing"]["totalMs"], 0.0);
    }
}
