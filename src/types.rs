use serde::{Deserialize, Serialize};

/// RGB color sample; alpha, when present in the source, is dropped.
pub type Color = [u8; 3];

/// Grid coordinate. Ordered lexicographically on `x`, then `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The 4-connected neighbors that fall inside a `side x side` grid.
    pub fn neighbors(self, side: usize) -> impl Iterator<Item = Coordinate> {
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let x = self.x.checked_add_signed(dx)?;
            let y = self.y.checked_add_signed(dy)?;
            (x < side && y < side).then_some(Coordinate { x, y })
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
