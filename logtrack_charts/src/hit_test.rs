// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hit testing against rendered samples.
//!
//! Every render pass records the scene position of each drawn sample. A pointer hit is the
//! nearest recorded position strictly closer than the tolerance. The search is a linear scan:
//! rendered point counts are bounded by the plot's pixel height times the number of curves.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;

/// Default pointer tolerance in pixels.
pub const DEFAULT_HIT_TOLERANCE: f64 = 20.0;

/// A rendered sample that can be clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct HitTarget {
    /// Name of the well the sample belongs to.
    pub well: Arc<str>,
    /// Mnemonic of the curve the sample belongs to.
    pub curve: Arc<str>,
    /// Scene position of the sample.
    pub position: Point,
    /// Sample depth.
    pub depth: f64,
    /// Sample value.
    pub value: f64,
}

/// The result of a successful hit test.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// The closest target.
    pub target: HitTarget,
    /// Distance from the pointer to the target, in pixels.
    pub distance: f64,
}

impl Hit {
    /// Well name of the hit sample.
    pub fn well(&self) -> &str {
        &self.target.well
    }

    /// Curve mnemonic of the hit sample.
    pub fn curve(&self) -> &str {
        &self.target.curve
    }

    /// Depth of the hit sample.
    pub fn depth(&self) -> f64 {
        self.target.depth
    }

    /// Value of the hit sample.
    pub fn value(&self) -> f64 {
        self.target.value
    }
}

/// Nearest-sample lookup over the targets of one render pass.
#[derive(Clone, Debug)]
pub struct HitTester {
    targets: Vec<HitTarget>,
    tolerance: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HitTester {
    /// Creates a tester using [`DEFAULT_HIT_TOLERANCE`].
    pub fn new(targets: Vec<HitTarget>) -> Self {
        Self {
            targets,
            tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }

    /// Sets the pointer tolerance in pixels.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the pointer tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Adds targets.
    pub fn extend(&mut self, targets: impl IntoIterator<Item = HitTarget>) {
        self.targets.extend(targets);
    }

    /// All recorded targets.
    pub fn targets(&self) -> &[HitTarget] {
        &self.targets
    }

    /// Number of recorded targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the target nearest to `pointer`, if it is strictly within the tolerance.
    ///
    /// Ties keep the target recorded first.
    pub fn hit_test(&self, pointer: Point) -> Option<Hit> {
        let limit = self.tolerance * self.tolerance;
        let mut best: Option<(&HitTarget, f64)> = None;
        for t in &self.targets {
            let d2 = (t.position - pointer).hypot2();
            if d2 < limit && best.is_none_or(|(_, b)| d2 < b) {
                best = Some((t, d2));
            }
        }
        best.map(|(t, _)| Hit {
            target: t.clone(),
            distance: t.position.distance(pointer),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn target(well: &str, curve: &str, x: f64, y: f64) -> HitTarget {
        HitTarget {
            well: Arc::from(well),
            curve: Arc::from(curve),
            position: Point::new(x, y),
            depth: y,
            value: x,
        }
    }

    #[test]
    fn exact_position_hits() {
        let t = HitTester::new(vec![target("A-1", "GR", 100.0, 200.0)]);
        let hit = t.hit_test(Point::new(100.0, 200.0)).expect("hit");
        assert_eq!((hit.well(), hit.curve()), ("A-1", "GR"));
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn thirty_pixels_away_misses() {
        let t = HitTester::new(vec![target("A-1", "GR", 100.0, 200.0)]);
        assert!(t.hit_test(Point::new(130.0, 200.0)).is_none());
        assert!(t.hit_test(Point::new(100.0, 170.0)).is_none());
    }

    #[test]
    fn tolerance_is_strict() {
        let t = HitTester::new(vec![target("A-1", "GR", 0.0, 0.0)]);
        assert!(t.hit_test(Point::new(20.0, 0.0)).is_none());
        assert!(t.hit_test(Point::new(19.9, 0.0)).is_some());
    }

    #[test]
    fn nearest_target_wins_across_wells_and_curves() {
        let t = HitTester::new(vec![
            target("A-1", "GR", 0.0, 0.0),
            target("B-2", "RHOB", 10.0, 0.0),
            target("B-2", "NPHI", 4.0, 0.0),
        ]);
        let hit = t.hit_test(Point::new(6.0, 0.0)).expect("hit");
        assert_eq!((hit.well(), hit.curve()), ("B-2", "NPHI"));
    }

    #[test]
    fn empty_tester_never_hits() {
        assert!(HitTester::default().hit_test(Point::ZERO).is_none());
    }

    #[test]
    fn default_tester_uses_the_default_tolerance() {
        let mut t = HitTester::default();
        assert_eq!(t.tolerance(), DEFAULT_HIT_TOLERANCE);
        t.extend([target("A-1", "GR", 50.0, 60.0)]);
        let hit = t.hit_test(Point::new(50.0, 60.0)).expect("exact hit");
        assert_eq!((hit.depth(), hit.value()), (60.0, 50.0));
        assert!(t.hit_test(Point::new(50.0, 75.0)).is_some());
    }
}
