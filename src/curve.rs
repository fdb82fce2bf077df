//! Deterministic visiting order for growth passes.
//!
//! The order is derived from the pass index by bit manipulation: the low `2N`
//! bits of the index are reversed, the odd-position bits of the result give
//! `x`, and `y` is `x` XOR the even-position bits. The resulting traversal
//! visits the grid in a self-similar, quadrant-recursive pattern so that early
//! positions are spread across the whole image rather than clustered in one
//! corner.
//!
//! The sequence drives merge order and therefore the final partition; it must
//! stay bit-exact.

use crate::types::Coordinate;

/// Reverse the low `len` bits of `value`; higher bits are discarded.
#[inline]
pub fn reverse_bits(value: usize, len: u32) -> usize {
    (0..len)
        .filter(|&k| value & (1 << k) != 0)
        .fold(0, |acc, k| acc | (1 << (len - 1 - k)))
}

/// Pack bits at positions 1, 3, 5, ... into consecutive low bits.
#[inline]
pub fn pack_odd_bits(value: usize) -> usize {
    pack_bits_from(value >> 1)
}

/// Pack bits at positions 0, 2, 4, ... into consecutive low bits.
#[inline]
pub fn pack_even_bits(value: usize) -> usize {
    pack_bits_from(value)
}

fn pack_bits_from(value: usize) -> usize {
    let mut out = 0;
    let mut k = 0;
    let mut rest = value;
    while rest != 0 {
        out |= (rest & 1) << k;
        rest >>= 2;
        k += 1;
    }
    out
}

/// Coordinate visited at position `index` of the order for exponent `n`.
#[inline]
pub fn coordinate_at(index: usize, n: u32) -> Coordinate {
    let r = reverse_bits(index, 2 * n);
    let x = pack_odd_bits(r);
    let y = x ^ pack_even_bits(r);
    Coordinate::new(x, y)
}

/// Lazy iterator over the visiting order of a `2^n x 2^n` grid.
#[derive(Clone, Debug)]
pub struct CurveOrder {
    n: u32,
    next: usize,
    len: usize,
}

impl CurveOrder {
    /// `n` must be small enough that `4^n` fits in `usize`.
    pub fn new(n: u32) -> Self {
        Self {
            n,
            next: 0,
            len: 1usize << (2 * n),
        }
    }
}

impl Iterator for CurveOrder {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let c = coordinate_at(self.next, self.n);
        self.next += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for CurveOrder {}

/// Full visiting order for a `2^n x 2^n` grid (`4^n` coordinates, each once).
pub fn generate_order(n: u32) -> Vec<Coordinate> {
    CurveOrder::new(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pairs(order: &[Coordinate]) -> Vec<(usize, usize)> {
        order.iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn reverse_bits_flips_low_window() {
        assert_eq!(reverse_bits(0b0001, 4), 0b1000);
        assert_eq!(reverse_bits(0b0110, 4), 0b0110);
        assert_eq!(reverse_bits(0b1011, 4), 0b1101);
        // bits above the window are dropped
        assert_eq!(reverse_bits(0b1_0001, 4), 0b1000);
        assert_eq!(reverse_bits(5, 0), 0);
    }

    #[test]
    fn odd_and_even_bits_pack_densely() {
        assert_eq!(pack_odd_bits(0b1010_1010), 0b1111);
        assert_eq!(pack_even_bits(0b1010_1010), 0);
        assert_eq!(pack_even_bits(0b0101_0101), 0b1111);
        assert_eq!(pack_odd_bits(0b10), 0b1);
        assert_eq!(pack_even_bits(0b100), 0b10);
    }

    #[test]
    fn order_for_two_by_two_is_pinned() {
        assert_eq!(
            pairs(&generate_order(1)),
            vec![(0, 0), (1, 1), (0, 1), (1, 0)]
        );
    }

    #[test]
    fn order_for_four_by_four_is_pinned() {
        assert_eq!(
            pairs(&generate_order(2)),
            vec![
                (0, 0),
                (2, 2),
                (0, 2),
                (2, 0),
                (1, 1),
                (3, 3),
                (1, 3),
                (3, 1),
                (0, 1),
                (2, 3),
                (0, 3),
                (2, 1),
                (1, 0),
                (3, 2),
                (1, 2),
                (3, 0),
            ]
        );
    }

    #[test]
    fn order_covers_every_coordinate_once() {
        for n in 1..=6 {
            let side = 1usize << n;
            let order = generate_order(n);
            assert_eq!(order.len(), side * side);
            assert!(order.iter().all(|c| c.x < side && c.y < side));
            let distinct: HashSet<_> = order.iter().copied().collect();
            assert_eq!(distinct.len(), order.len(), "duplicates for n={n}");
        }
    }

    #[test]
    fn order_is_restartable() {
        assert_eq!(generate_order(4), generate_order(4));
        let mut it = CurveOrder::new(3);
        assert_eq!(it.len(), 64);
        it.next();
        assert_eq!(it.len(), 63);
    }
}
