// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve sampling.
//!
//! Curves store bare values. The depth of sample `i` out of `n` is reconstructed by assuming the
//! samples are spaced uniformly across the well section `[start, end]`:
//!
//! ```text
//! depth(i) = start + i * (end - start) / (n - 1)
//! ```
//!
//! This is a precondition on the input data, not something the sampler can check. A curve with
//! a single sample places it at `start`.

use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::well::{Curve, DepthRange, Well};

/// A visible sample: its index in the curve, reconstructed depth and value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedPoint {
    /// Index into [`Curve::data`].
    pub index: usize,
    /// Reconstructed depth.
    pub depth: f64,
    /// Sample value; never the null sentinel and always finite.
    pub value: f64,
}

/// Returns the implied depth of sample `index` out of `count` samples spanning `section`.
pub fn sample_depth(section: DepthRange, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return section.min;
    }
    section.min + index as f64 * section.span() / (count - 1) as f64
}

/// Lazily yields the visible samples of one curve in depth order.
///
/// Samples equal to the null sentinel, non-finite samples and samples outside the window
/// (inclusive) are skipped. The iterator is cheap to clone, so a sequence can be restarted by
/// cloning it before consumption.
#[derive(Clone, Debug)]
pub struct CurveSampler<'a> {
    curve: &'a Curve,
    section: DepthRange,
    window: DepthRange,
    index: usize,
    end: usize,
}

impl<'a> CurveSampler<'a> {
    /// Creates a sampler for `curve`, whose samples span `section`, clipped to `window`.
    ///
    /// An invalid window yields nothing. So does an invalid section, unless the curve has a
    /// single sample and the section start is finite.
    pub fn new(curve: &'a Curve, section: DepthRange, window: DepthRange) -> Self {
        let count = curve.data.len();
        let section_ok = section.is_valid() || (count == 1 && section.min.is_finite());
        let end = if window.is_valid() && section_ok {
            count
        } else {
            0
        };
        let mut sampler = Self {
            curve,
            section,
            window,
            index: 0,
            end,
        };
        sampler.index = sampler.first_candidate();
        sampler
    }

    /// Skips samples that lie wholly above the window.
    fn first_candidate(&self) -> usize {
        if self.end <= 1 {
            return 0;
        }
        let step = self.section.span() / (self.end - 1) as f64;
        let skip = ((self.window.min - self.section.min) / step).floor();
        if skip.is_finite() && skip > 0.0 {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "positive and bounded by the sample count"
            )]
            let skip = skip.min(self.end as f64) as usize;
            // Land one early so rounding never skips the first visible sample.
            skip.saturating_sub(1)
        } else {
            0
        }
    }
}

impl Iterator for CurveSampler<'_> {
    type Item = RenderedPoint;

    fn next(&mut self) -> Option<RenderedPoint> {
        while self.index < self.end {
            let index = self.index;
            let depth = sample_depth(self.section, index, self.end);
            if depth > self.window.max {
                self.index = self.end;
                return None;
            }
            self.index += 1;
            if depth < self.window.min {
                continue;
            }
            let value = self.curve.data[index];
            if !self.curve.is_present(value) {
                continue;
            }
            return Some(RenderedPoint {
                index,
                depth,
                value,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.index))
    }
}

impl FusedIterator for CurveSampler<'_> {}

/// Returns the visible samples of `well`'s curve named `curve` inside `window`.
///
/// Returns `None` if the well has no such curve.
pub fn visible_points<'a>(
    well: &'a Well,
    curve: &str,
    window: DepthRange,
) -> Option<CurveSampler<'a>> {
    well.curve(curve)
        .map(|c| CurveSampler::new(c, well.depth_range, window))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::well::DEFAULT_NULL_VALUE;

    fn depths(s: CurveSampler<'_>) -> Vec<f64> {
        s.map(|p| p.depth).collect()
    }

    #[test]
    fn depths_are_spaced_uniformly() {
        let section = DepthRange::new(100.0, 104.0);
        assert_eq!(sample_depth(section, 0, 5), 100.0);
        assert_eq!(sample_depth(section, 2, 5), 102.0);
        assert_eq!(sample_depth(section, 4, 5), 104.0);
    }

    #[test]
    fn null_samples_never_appear() {
        let curve = Curve::new(
            "GR",
            "API",
            vec![10.0, DEFAULT_NULL_VALUE, 30.0, f64::NAN, DEFAULT_NULL_VALUE, 60.0],
        );
        let section = DepthRange::new(0.0, 5.0);
        for (min, max) in [(0.0, 5.0), (0.5, 4.5), (1.0, 1.0 + 1e-9), (-10.0, 10.0)] {
            let window = DepthRange::new(min, max);
            for p in CurveSampler::new(&curve, section, window) {
                assert_ne!(p.value, DEFAULT_NULL_VALUE, "null leaked at depth {}", p.depth);
                assert!(p.value.is_finite(), "non-finite value leaked");
            }
        }
        let values: Vec<f64> = CurveSampler::new(&curve, section, section)
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![10.0, 30.0, 60.0]);
    }

    #[test]
    fn custom_null_sentinel_is_respected() {
        let curve = Curve::new("RT", "ohm.m", vec![1.0, -1.0, 2.0]).with_null_value(-1.0);
        let section = DepthRange::new(0.0, 2.0);
        assert_eq!(depths(CurveSampler::new(&curve, section, section)), vec![0.0, 2.0]);
    }

    #[test]
    fn window_filtering_is_inclusive_and_complete() {
        let data: Vec<f64> = (0..101).map(f64::from).collect();
        let curve = Curve::new("GR", "API", data);
        let section = DepthRange::new(1000.0, 1100.0);
        for (min, max) in [
            (1000.0, 1100.0),
            (1020.0, 1030.0),
            (1020.5, 1030.5),
            (900.0, 1005.0),
            (1095.0, 1300.0),
        ] {
            let window = DepthRange::new(min, max);
            let got = depths(CurveSampler::new(&curve, section, window));
            let expected: Vec<f64> = (0..101)
                .map(|i| 1000.0 + f64::from(i))
                .filter(|d| window.contains(*d))
                .collect();
            assert_eq!(got, expected, "window [{min}, {max}]");
        }
    }

    #[test]
    fn invalid_inputs_yield_nothing() {
        let curve = Curve::new("GR", "API", vec![1.0, 2.0, 3.0]);
        let section = DepthRange::new(0.0, 2.0);
        assert_eq!(CurveSampler::new(&curve, section, DepthRange::new(2.0, 1.0)).count(), 0);
        assert_eq!(
            CurveSampler::new(&curve, DepthRange::new(5.0, 5.0), DepthRange::new(0.0, 9.0))
                .count(),
            0
        );
        let empty = Curve::new("GR", "API", Vec::new());
        assert_eq!(CurveSampler::new(&empty, section, section).count(), 0);
    }

    #[test]
    fn single_sample_sits_at_the_section_start() {
        let curve = Curve::new("GR", "API", vec![42.0]);
        let points: Vec<RenderedPoint> =
            CurveSampler::new(&curve, DepthRange::new(250.0, 250.0), DepthRange::new(200.0, 300.0))
                .collect();
        assert_eq!(
            points,
            vec![RenderedPoint {
                index: 0,
                depth: 250.0,
                value: 42.0
            }]
        );
    }

    #[test]
    fn sampler_restarts_by_cloning() {
        let curve = Curve::new("GR", "API", vec![1.0, 2.0, 3.0, 4.0]);
        let section = DepthRange::new(0.0, 3.0);
        let sampler = CurveSampler::new(&curve, section, section);
        let first: Vec<RenderedPoint> = sampler.clone().collect();
        let second: Vec<RenderedPoint> = sampler.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn visible_points_looks_up_by_name() {
        let well = Well::new("A-1", DepthRange::new(0.0, 1.0))
            .with_curve(Curve::new("GR", "API", vec![5.0, 6.0]));
        assert_eq!(
            visible_points(&well, "gr", well.depth_range).map(Iterator::count),
            Some(2)
        );
        assert!(visible_points(&well, "RHOB", well.depth_range).is_none());
    }
}
