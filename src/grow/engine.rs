use super::options::GrowOptions;
use crate::curve::generate_order;
use crate::diagnostics::{elapsed_ms, PassStats, SegmentationReport, TimingBreakdown};
use crate::error::{Result, SegmentationError};
use crate::image::ImageSource;
use crate::segments::{Segment, SegmentForest, SegmentId};
use crate::types::Coordinate;
use log::{debug, warn};
use std::collections::HashMap;
use std::time::Instant;

/// Region-growing segmentation of the top-left `2^n x 2^n` block of an image.
#[derive(Clone, Debug)]
pub struct Segmenter {
    options: GrowOptions,
    forest: SegmentForest,
    order: Vec<Coordinate>,
    passes: Vec<PassStats>,
    timing: TimingBreakdown,
}

impl Segmenter {
    /// Build one leaf per pixel and grow until a full pass merges nothing.
    pub fn new<S: ImageSource + ?Sized>(source: &S, options: GrowOptions) -> Result<Self> {
        let mut segmenter = Self::seeded(source, options)?;
        segmenter.run_to_fixpoint()?;
        Ok(segmenter)
    }

    /// Build the leaves without growing; passes are driven by the caller.
    pub fn seeded<S: ImageSource + ?Sized>(source: &S, options: GrowOptions) -> Result<Self> {
        options.validate()?;
        let side = options.side();
        if !source.covers(side) {
            return Err(SegmentationError::InvalidDimension {
                required: side,
                width: source.width(),
                height: source.height(),
            });
        }
        if source.width() > side || source.height() > side {
            warn!(
                "Segmenter: only the top-left {side}x{side} block of the {}x{} image is segmented",
                source.width(),
                source.height()
            );
        }

        let t0 = Instant::now();
        let forest = SegmentForest::from_leaves(side, |c| source.pixel_color(c.x, c.y));
        let order = generate_order(options.n);
        let mut timing = TimingBreakdown::default();
        timing.record("seed", t0);
        debug!(
            "Segmenter: seeded {} leaves (n={}, threshold={})",
            forest.segment_count(),
            options.n,
            options.threshold
        );

        Ok(Self {
            options,
            forest,
            order,
            passes: Vec::new(),
            timing,
        })
    }

    /// Options the run was configured with, after validation.
    pub fn options(&self) -> &GrowOptions {
        &self.options
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.forest.side()
    }

    pub fn forest(&self) -> &SegmentForest {
        &self.forest
    }

    /// Number of forest entries (two per accepted merge).
    pub fn forest_len(&self) -> usize {
        self.forest.len()
    }

    pub fn passes(&self) -> &[PassStats] {
        &self.passes
    }

    /// Attempt one merge starting from the segment that owns `coordinate`.
    ///
    /// When none of the segment's best neighbors prefers it back, the attempt
    /// moves on to the preferred neighbor and retries there. Each hop strictly
    /// lowers the best merge cost seen (costs are symmetric), so the chase
    /// ends; the hop cap only guards against a broken forest.
    ///
    /// Returns whether a merge was recorded.
    pub fn try_grow_one(&mut self, coordinate: Coordinate) -> Result<bool> {
        let threshold = self.options.threshold;
        let cap = self.options.chase_hop_cap();
        let mut current = coordinate;
        let mut hops = 0usize;
        loop {
            let a = self.forest.root_at(current)?;
            let candidates = self.forest.best_neighbors(a, threshold)?;
            if candidates.is_empty() {
                return Ok(false);
            }

            let mut mutual = Vec::with_capacity(candidates.len());
            for &b in &candidates {
                let b_root = self.forest.find_root(b)?;
                if self.forest.best_neighbors(b_root, threshold)?.contains(&a) {
                    mutual.push(b);
                }
            }

            if let Some(b) = self.pick(mutual) {
                self.forest.merge(a, b)?;
                return Ok(true);
            }

            let Some(next) = self.pick(candidates) else {
                return Ok(false);
            };
            hops += 1;
            if hops > cap {
                return Err(SegmentationError::NonTermination {
                    hops,
                    start: coordinate,
                });
            }
            current = self.forest.segment(next).first_coordinate();
        }
    }

    /// One growth pass over every coordinate in curve order. Returns the
    /// number of merges made.
    pub fn try_grow_all(&mut self) -> Result<usize> {
        let mut merges = 0usize;
        for i in 0..self.order.len() {
            if self.try_grow_one(self.order[i])? {
                merges += 1;
            }
        }
        Ok(merges)
    }

    /// Repeat passes until one adds no forest entries. Returns the number of
    /// passes run by this call, the final empty pass included.
    pub fn run_to_fixpoint(&mut self) -> Result<usize> {
        let t0 = Instant::now();
        let mut ran = 0usize;
        loop {
            let before = self.forest.len();
            let t_pass = Instant::now();
            let merges = self.try_grow_all()?;
            ran += 1;
            let stats = PassStats {
                pass: self.passes.len() + 1,
                merges,
                forest_len: self.forest.len(),
                elapsed_ms: elapsed_ms(t_pass),
            };
            debug!(
                "Segmenter: pass {} merged {} pairs (forest={} entries, {:.3} ms)",
                stats.pass, stats.merges, stats.forest_len, stats.elapsed_ms
            );
            self.passes.push(stats);
            if self.forest.len() == before {
                break;
            }
        }
        self.timing.record("grow", t0);
        debug!(
            "Segmenter: converged after {} passes with {} segments",
            self.passes.len(),
            self.forest.roots().len()
        );
        Ok(ran)
    }

    /// Handle of the root segment owning `coordinate`.
    pub fn root_at(&self, coordinate: Coordinate) -> Result<SegmentId> {
        self.forest.root_at(coordinate)
    }

    /// Root segment owning pixel `(x, y)`.
    pub fn segment_at(&self, x: usize, y: usize) -> Result<&Segment> {
        let root = self.root_at(Coordinate::new(x, y))?;
        Ok(self.forest.segment(root))
    }

    /// Current root segments, ordered by handle.
    pub fn roots(&self) -> Vec<SegmentId> {
        self.forest.roots()
    }

    /// True when any 4-neighbor of `(x, y)` belongs to another segment.
    pub fn is_boundary(&self, x: usize, y: usize) -> Result<bool> {
        let here = Coordinate::new(x, y);
        let root = self.root_at(here)?;
        for neighbor in here.neighbors(self.side()) {
            if self.root_at(neighbor)? != root {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Dense row-major label per pixel; labels count up from `0` in order of
    /// first appearance.
    pub fn label_map(&self) -> Result<Vec<u32>> {
        let side = self.side();
        let mut dense: HashMap<SegmentId, u32> = HashMap::new();
        let mut labels = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                let root = self.root_at(Coordinate::new(x, y))?;
                let next = dense.len() as u32;
                labels.push(*dense.entry(root).or_insert(next));
            }
        }
        Ok(labels)
    }

    pub fn report(&self) -> SegmentationReport {
        let roots = self.forest.roots();
        let mut segment_sizes: Vec<usize> = roots
            .iter()
            .map(|&id| self.forest.segment(id).pixel_count())
            .collect();
        segment_sizes.sort_unstable_by(|a, b| b.cmp(a));
        let leaves = self.side() * self.side();
        SegmentationReport {
            n: self.options.n,
            side: self.side(),
            threshold: self.options.threshold,
            leaves,
            merges: self.forest.len() / 2,
            segments: roots.len(),
            passes: self.passes.clone(),
            segment_sizes,
            timing: self.timing.clone(),
        }
    }

    /// Deterministic choice among candidate roots: smallest first pixel.
    fn pick<I>(&self, ids: I) -> Option<SegmentId>
    where
        I: IntoIterator<Item = SegmentId>,
    {
        ids.into_iter()
            .min_by_key(|&id| self.forest.segment(id).first_coordinate())
    }
}
