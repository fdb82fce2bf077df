use super::segment::{Segment, SegmentId};
use crate::error::{Result, SegmentationError};
use crate::types::{Color, Coordinate};

/// Arena of segments plus the "merged into" parent links between them.
///
/// Leaves occupy the first `side * side` handles in row-major order. Every
/// merge appends one `Merged` segment and writes it as the parent of both
/// inputs; parent links are never removed or repointed and roots are found
/// without path compression.
#[derive(Clone, Debug)]
pub struct SegmentForest {
    side: usize,
    segments: Vec<Segment>,
    parents: Vec<Option<SegmentId>>,
    leaves: Vec<SegmentId>,
    entries: usize,
}

impl SegmentForest {
    /// Build the leaves of a `side x side` grid, sampling colors via `color_at`.
    pub fn from_leaves<F>(side: usize, mut color_at: F) -> Self
    where
        F: FnMut(Coordinate) -> Color,
    {
        let leaf_count = side * side;
        // one leaf per pixel plus at most one merge per pair
        let capacity = 2 * leaf_count;
        let mut segments = Vec::with_capacity(capacity);
        let mut leaves = Vec::with_capacity(leaf_count);
        for y in 0..side {
            for x in 0..side {
                let coordinate = Coordinate::new(x, y);
                leaves.push(SegmentId(segments.len() as u32));
                segments.push(Segment::leaf(coordinate, color_at(coordinate)));
            }
        }
        let mut parents = Vec::with_capacity(capacity);
        parents.resize(leaf_count, None);
        Self {
            side,
            segments,
            parents,
            leaves,
            entries: 0,
        }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of parent links written so far (two per accepted merge).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of allocated segments, leaves included.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    #[inline]
    pub fn parent(&self, id: SegmentId) -> Option<SegmentId> {
        self.parents[id.index()]
    }

    pub fn leaf_at(&self, coordinate: Coordinate) -> Result<SegmentId> {
        if coordinate.x >= self.side || coordinate.y >= self.side {
            return Err(SegmentationError::CoordinateOutOfRange {
                x: coordinate.x,
                y: coordinate.y,
                side: self.side,
            });
        }
        Ok(self.leaves[coordinate.y * self.side + coordinate.x])
    }

    /// Follow parent links from `id` to the segment that has none.
    ///
    /// A walk longer than the number of allocated segments can only mean a
    /// cycle.
    pub fn find_root(&self, id: SegmentId) -> Result<SegmentId> {
        let mut current = id;
        let mut hops = 0usize;
        while let Some(parent) = self.parent(current) {
            hops += 1;
            if hops > self.segments.len() {
                return Err(SegmentationError::InvariantViolation(format!(
                    "cycle detected while resolving the root of segment {}",
                    id.0
                )));
            }
            current = parent;
        }
        Ok(current)
    }

    pub fn root_at(&self, coordinate: Coordinate) -> Result<SegmentId> {
        self.find_root(self.leaf_at(coordinate)?)
    }

    /// Record that `first` and `second` were merged; returns the new parent.
    ///
    /// Both inputs must be distinct roots.
    pub fn merge(&mut self, first: SegmentId, second: SegmentId) -> Result<SegmentId> {
        if first == second {
            return Err(SegmentationError::InvariantViolation(format!(
                "segment {} cannot be merged with itself",
                first.0
            )));
        }
        for id in [first, second] {
            if let Some(parent) = self.parent(id) {
                return Err(SegmentationError::InvariantViolation(format!(
                    "segment {} already merged into {}",
                    id.0, parent.0
                )));
            }
        }
        let merged = Segment::merged(self.segment(first), self.segment(second));
        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(merged);
        self.parents.push(None);
        self.parents[first.index()] = Some(id);
        self.parents[second.index()] = Some(id);
        self.entries += 2;
        Ok(id)
    }

    /// Distinct current roots, ordered by handle.
    pub fn roots(&self) -> Vec<SegmentId> {
        (0..self.segments.len())
            .map(|i| SegmentId(i as u32))
            .filter(|&id| self.parent(id).is_none())
            .collect()
    }
}
