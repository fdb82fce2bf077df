//! Merge-cost model.
//!
//! The cost of a segment is the sum over the R, G and B bands of the
//! population standard deviation of that band's values. Merging `a` and `b`
//! costs the size-weighted cost of their union minus the size-weighted costs
//! of the two parts; lower is more favorable and a merge of two identically
//! colored regions costs exactly `0`.
//!
//! Band statistics are integer sums, so `merge_cost(a, b)` and
//! `merge_cost(b, a)` agree bit for bit. The best-neighbor chase in
//! `crate::grow` depends on that symmetry to make progress.

mod band_accumulator;

use crate::segments::Segment;
use band_accumulator::{population_stddev, BandAccumulator};

/// Population standard deviation (divide by count) of one band.
pub fn band_stddev(values: &[u8]) -> f64 {
    let (sum, sum_sq) = values.iter().fold((0u64, 0u64), |(s, q), &v| {
        let v = v as u64;
        (s + v, q + v * v)
    });
    population_stddev(values.len() as u64, sum, sum_sq)
}

/// Sum of the per-band standard deviations of the segment's pixels.
pub fn segment_cost(segment: &Segment) -> f64 {
    match segment {
        Segment::Leaf { .. } => 0.0,
        Segment::Merged(pixels) => BandAccumulator::from_colors(pixels.colors()).stddev().sum(),
    }
}

/// Change in size-weighted cost caused by merging `a` and `b`.
///
/// The union is materialized only for scoring and dropped afterwards.
pub fn merge_cost(a: &Segment, b: &Segment) -> f64 {
    let combined = Segment::merged(a, b);
    weighted_cost(&combined) - (weighted_cost(a) + weighted_cost(b))
}

#[inline]
fn weighted_cost(segment: &Segment) -> f64 {
    segment_cost(segment) * segment.pixel_count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    fn leaf(x: usize, y: usize, color: [u8; 3]) -> Segment {
        Segment::leaf(Coordinate::new(x, y), color)
    }

    fn region(pixels: &[((usize, usize), [u8; 3])]) -> Segment {
        let mut iter = pixels.iter();
        let ((x, y), c) = iter.next().expect("non-empty region");
        iter.fold(leaf(*x, *y, *c), |acc, ((x, y), c)| {
            Segment::merged(&acc, &leaf(*x, *y, *c))
        })
    }

    #[test]
    fn band_stddev_uses_population_formula() {
        assert_eq!(band_stddev(&[]), 0.0);
        assert_eq!(band_stddev(&[42]), 0.0);
        assert_eq!(band_stddev(&[7, 7, 7, 7]), 0.0);
        // mean 5, deviations -3, 3 -> variance 9
        assert!((band_stddev(&[2, 8]) - 3.0).abs() < 1e-12);
        // mean 5, squared deviations 9, 1, 1, 9, 0 -> 20 / 5 = 4
        assert!((band_stddev(&[2, 4, 6, 8, 5]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_pixel_costs_nothing() {
        assert_eq!(segment_cost(&leaf(0, 0, [255, 0, 17])), 0.0);
    }

    #[test]
    fn segment_cost_sums_the_three_bands() {
        let seg = region(&[((0, 0), [0, 10, 100]), ((1, 0), [6, 10, 80])]);
        // band stddevs: 3, 0, 10
        assert!((segment_cost(&seg) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn merging_identical_colors_is_free() {
        let a = region(&[((0, 0), [9, 9, 9]), ((1, 0), [9, 9, 9])]);
        let b = leaf(2, 0, [9, 9, 9]);
        assert_eq!(merge_cost(&a, &b), 0.0);
    }

    #[test]
    fn merge_cost_matches_weighted_variance_change() {
        let a = leaf(0, 0, [10, 10, 10]);
        let b = leaf(1, 0, [130, 130, 130]);
        // two pixels 120 apart: stddev 60 per band, 180 total, times 2 pixels
        assert!((merge_cost(&a, &b) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn merge_cost_is_symmetric() {
        let a = region(&[
            ((0, 0), [12, 200, 33]),
            ((1, 0), [90, 14, 250]),
            ((0, 1), [3, 77, 128]),
        ]);
        let b = region(&[((2, 0), [255, 1, 64]), ((2, 1), [17, 180, 5])]);
        let c = leaf(3, 3, [100, 100, 100]);
        for (x, y) in [(&a, &b), (&a, &c), (&b, &c)] {
            assert_eq!(merge_cost(x, y).to_bits(), merge_cost(y, x).to_bits());
        }
    }

    #[test]
    fn merge_cost_does_not_depend_on_pixel_order() {
        let forward = region(&[((0, 0), [1, 2, 3]), ((1, 0), [200, 150, 7])]);
        let backward = region(&[((1, 0), [200, 150, 7]), ((0, 0), [1, 2, 3])]);
        assert_eq!(
            segment_cost(&forward).to_bits(),
            segment_cost(&backward).to_bits()
        );
    }
}
