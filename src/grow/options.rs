use crate::error::{Result, SegmentationError};
use serde::{Deserialize, Serialize};

/// Largest grid exponent whose `2 * 4^n` segment handles fit in `u32`.
pub const MAX_EXPONENT: u32 = 15;

/// Parameters of one segmentation run.
///
/// - `n`: the engine segments the top-left `2^n x 2^n` block of the source.
/// - `threshold`: largest merge cost still accepted.
/// - `max_chase_hops`: cap on best-neighbor chase hops from one coordinate.
///   `None` uses the segment capacity of the grid (`2 * 4^n`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowOptions {
    pub n: u32,
    pub threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chase_hops: Option<usize>,
}

impl Default for GrowOptions {
    fn default() -> Self {
        Self {
            n: 5,
            threshold: 800.0,
            max_chase_hops: None,
        }
    }
}

impl GrowOptions {
    pub fn new(n: u32, threshold: f64) -> Self {
        Self {
            n,
            threshold,
            ..Default::default()
        }
    }

    pub fn with_max_chase_hops(mut self, hops: usize) -> Self {
        self.max_chase_hops = Some(hops);
        self
    }

    /// Side length of the segmented block.
    #[inline]
    pub fn side(&self) -> usize {
        1usize << self.n
    }

    pub fn chase_hop_cap(&self) -> usize {
        self.max_chase_hops
            .unwrap_or_else(|| 2 * self.side() * self.side())
    }

    pub fn validate(&self) -> Result<()> {
        if self.n == 0 || self.n > MAX_EXPONENT {
            return Err(SegmentationError::InvalidConfig(format!(
                "grid exponent must be in 1..={MAX_EXPONENT}, got {}",
                self.n
            )));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SegmentationError::InvalidConfig(format!(
                "threshold must be finite and non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let opts = GrowOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.side(), 32);
        assert_eq!(opts.chase_hop_cap(), 2 * 32 * 32);
    }

    #[test]
    fn rejects_bad_exponent_and_threshold() {
        for opts in [
            GrowOptions::new(0, 1.0),
            GrowOptions::new(MAX_EXPONENT + 1, 1.0),
            GrowOptions::new(2, -0.5),
            GrowOptions::new(2, f64::NAN),
            GrowOptions::new(2, f64::INFINITY),
        ] {
            assert!(
                matches!(opts.validate(), Err(SegmentationError::InvalidConfig(_))),
                "expected {opts:?} to be rejected"
            );
        }
        assert!(GrowOptions::new(1, 0.0).validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let opts: GrowOptions = serde_json::from_str(r#"{ "threshold": 12.5 }"#).unwrap();
        assert_eq!(opts.n, 5);
        assert_eq!(opts.threshold, 12.5);
        assert_eq!(opts.max_chase_hops, None);
    }
}
