use super::forest::SegmentForest;
use super::segment::SegmentId;
use crate::cost::merge_cost;
use crate::error::Result;
use std::collections::BTreeSet;

impl SegmentForest {
    /// Current roots 4-adjacent to any pixel of `id`, excluding `id` itself.
    pub fn neighbors_of(&self, id: SegmentId) -> Result<BTreeSet<SegmentId>> {
        let side = self.side();
        let mut out = BTreeSet::new();
        for &coordinate in self.segment(id).coordinates() {
            for neighbor in coordinate.neighbors(side) {
                out.insert(self.root_at(neighbor)?);
            }
        }
        out.remove(&id);
        Ok(out)
    }

    /// Neighbors whose merge cost with `id` equals the minimum, provided that
    /// minimum does not exceed `threshold`.
    pub fn best_neighbors(&self, id: SegmentId, threshold: f64) -> Result<BTreeSet<SegmentId>> {
        let segment = self.segment(id);
        let scored: Vec<(SegmentId, f64)> = self
            .neighbors_of(id)?
            .into_iter()
            .map(|n| (n, merge_cost(segment, self.segment(n))))
            .collect();
        let best = scored
            .iter()
            .map(|&(_, cost)| cost)
            .fold(f64::INFINITY, f64::min);
        if scored.is_empty() || best > threshold {
            return Ok(BTreeSet::new());
        }
        Ok(scored
            .into_iter()
            .filter(|&(_, cost)| cost == best)
            .map(|(n, _)| n)
            .collect())
    }
}
