use crate::types::Color;
use nalgebra::Vector3;

/// Running per-band sums over the colors of a pixel set.
///
/// Sums are kept as integers so the variance numerator is exact and does not
/// depend on the order pixels were pushed.
#[derive(Clone, Debug)]
pub(crate) struct BandAccumulator {
    pub count: u64,
    pub sum: Vector3<u64>,
    pub sum_sq: Vector3<u64>,
}

impl BandAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            sum: Vector3::zeros(),
            sum_sq: Vector3::zeros(),
        }
    }

    pub(crate) fn from_colors(colors: &[Color]) -> Self {
        let mut acc = Self::new();
        for &color in colors {
            acc.push(color);
        }
        acc
    }

    pub(crate) fn push(&mut self, color: Color) {
        let v = Vector3::new(color[0] as u64, color[1] as u64, color[2] as u64);
        self.count += 1;
        self.sum += v;
        self.sum_sq += v.component_mul(&v);
    }

    /// Population standard deviation of each band.
    pub(crate) fn stddev(&self) -> Vector3<f64> {
        Vector3::from_fn(|band, _| population_stddev(self.count, self.sum[band], self.sum_sq[band]))
    }
}

/// `sqrt(n * sum_sq - sum^2) / n`, with the numerator evaluated exactly.
pub(crate) fn population_stddev(count: u64, sum: u64, sum_sq: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let n = count as u128;
    let numerator = (n * sum_sq as u128).saturating_sub((sum as u128) * (sum as u128));
    (numerator as f64).sqrt() / count as f64
}
