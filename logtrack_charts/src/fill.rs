// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill compositing.
//!
//! A fill shades the area between a primary curve and a reference (a constant threshold or a
//! second curve) wherever a predicate holds. Compositing walks matched samples in depth order
//! with an "open region" state:
//!
//! - predicate false → true: open a region at the crossing point,
//! - predicate true → true: extend the region with the sample,
//! - predicate true → false: close the region at the crossing point and emit it.
//!
//! A region still open after the last sample is closed there. Crossing points are linearly
//! interpolated between the straddling samples, so adjacent regions of opposite predicates
//! share an edge.
//!
//! Both fill kinds pair samples by depth proximity. For threshold fills the pairing is trivial;
//! for curve-to-curve fills see [`match_by_depth`].

extern crate alloc;

use alloc::vec::Vec;

use kurbo::BezPath;

use crate::sampler::RenderedPoint;

/// Largest depth difference at which two curves' samples are paired, in depth units.
pub const DEFAULT_MATCH_TOLERANCE: f64 = 0.5;

/// Which side of the reference is shaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FillPredicate {
    /// Shade where `primary > reference`.
    Greater,
    /// Shade where `primary < reference`.
    Less,
}

impl FillPredicate {
    /// Returns `true` if the sample is shaded.
    pub fn holds(self, primary: f64, reference: f64) -> bool {
        match self {
            Self::Greater => primary > reference,
            Self::Less => primary < reference,
        }
    }
}

/// A primary value paired with its reference value at one depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillSample {
    /// Depth of the pair.
    pub depth: f64,
    /// Primary curve value.
    pub primary: f64,
    /// Threshold or second-curve value.
    pub reference: f64,
}

impl FillSample {
    fn is_finite(&self) -> bool {
        self.depth.is_finite() && self.primary.is_finite() && self.reference.is_finite()
    }

    /// Interpolates the point between `self` and `next` where primary meets reference.
    fn crossing(&self, next: &Self) -> Self {
        let d0 = self.primary - self.reference;
        let d1 = next.primary - next.reference;
        let t = if d0 == d1 {
            0.5
        } else {
            (d0 / (d0 - d1)).clamp(0.0, 1.0)
        };
        let reference = self.reference + t * (next.reference - self.reference);
        Self {
            depth: self.depth + t * (next.depth - self.depth),
            primary: reference,
            reference,
        }
    }
}

/// One shaded polygon, described in data space.
///
/// The outline runs down the primary values and back up the reference values.
#[derive(Clone, Debug, PartialEq)]
pub struct FillRegion {
    /// The predicate that holds inside the region.
    pub predicate: FillPredicate,
    /// Boundary samples in depth order; at least two distinct depths.
    pub vertices: Vec<FillSample>,
}

impl FillRegion {
    /// Returns the `(top, bottom)` depths of the region.
    pub fn depth_span(&self) -> (f64, f64) {
        let top = self.vertices.first().map_or(0.0, |v| v.depth);
        let bottom = self.vertices.last().map_or(0.0, |v| v.depth);
        (top, bottom)
    }

    /// Builds the closed outline, mapping depths with `y` and values with `x`.
    pub fn to_path(&self, y: impl Fn(f64) -> f64, x: impl Fn(f64) -> f64) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.vertices.first() else {
            return path;
        };
        path.move_to((x(first.reference), y(first.depth)));
        for v in &self.vertices {
            path.line_to((x(v.primary), y(v.depth)));
        }
        for v in self.vertices.iter().rev() {
            path.line_to((x(v.reference), y(v.depth)));
        }
        path.close_path();
        path
    }
}

/// Composites the regions where `predicate` holds over `samples`, which must be in depth order.
///
/// Non-finite samples are ignored. The output depends only on the input, so repeated calls on
/// the same samples produce identical regions.
pub fn composite(samples: &[FillSample], predicate: FillPredicate) -> Vec<FillRegion> {
    let mut regions = Vec::new();
    let mut open: Option<Vec<FillSample>> = None;
    let mut prev: Option<FillSample> = None;

    for s in samples.iter().copied().filter(FillSample::is_finite) {
        let holds = predicate.holds(s.primary, s.reference);
        match (open.as_mut(), holds) {
            (None, true) => {
                let mut vertices = Vec::new();
                if let Some(p) = prev {
                    vertices.push(p.crossing(&s));
                }
                vertices.push(s);
                open = Some(vertices);
            }
            (Some(vertices), true) => vertices.push(s),
            (Some(_), false) => {
                if let (Some(mut vertices), Some(p)) = (open.take(), prev) {
                    vertices.push(p.crossing(&s));
                    flush(&mut regions, predicate, vertices);
                }
            }
            (None, false) => {}
        }
        prev = Some(s);
    }
    if let Some(vertices) = open {
        flush(&mut regions, predicate, vertices);
    }
    regions
}

fn flush(regions: &mut Vec<FillRegion>, predicate: FillPredicate, vertices: Vec<FillSample>) {
    let distinct = match (vertices.first(), vertices.last()) {
        (Some(a), Some(b)) => a.depth < b.depth,
        _ => false,
    };
    if distinct {
        regions.push(FillRegion {
            predicate,
            vertices,
        });
    }
}

/// Pairs every visible point with a constant threshold.
pub fn threshold_samples(
    points: impl IntoIterator<Item = RenderedPoint>,
    threshold: f64,
) -> Vec<FillSample> {
    points
        .into_iter()
        .map(|p| FillSample {
            depth: p.depth,
            primary: p.value,
            reference: threshold,
        })
        .collect()
}

/// Pairs each primary point with the secondary point nearest in depth.
///
/// Both inputs must be in depth order. Primary points with no secondary point within
/// `tolerance` depth units are skipped, so curves sampled at different rates (or with nulls in
/// different places) only shade where both have data. A skipped point splits the output into
/// runs; composite each run separately so no region spans the hole.
pub fn match_by_depth(
    primary: &[RenderedPoint],
    secondary: &[RenderedPoint],
    tolerance: f64,
) -> Vec<Vec<FillSample>> {
    let mut runs: Vec<Vec<FillSample>> = Vec::new();
    if secondary.is_empty() {
        return runs;
    }
    let mut run = Vec::new();
    let mut j = 0;
    for p in primary {
        while j + 1 < secondary.len() && secondary[j + 1].depth <= p.depth {
            j += 1;
        }
        let mut best = &secondary[j];
        if let Some(next) = secondary.get(j + 1)
            && (next.depth - p.depth).abs() < (best.depth - p.depth).abs()
        {
            best = next;
        }
        if (best.depth - p.depth).abs() <= tolerance {
            run.push(FillSample {
                depth: p.depth,
                primary: p.value,
                reference: best.value,
            });
        } else if !run.is_empty() {
            runs.push(core::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}
