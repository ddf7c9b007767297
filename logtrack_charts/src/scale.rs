// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate mapping.
//!
//! Depth maps to the vertical axis and curve values map to the horizontal axis of a track.
//! The free functions [`depth_to_pixel`] and [`value_to_pixel`] are the offset-from-origin form;
//! [`DepthScale`] and [`ValueScale`] are the same maps instantiated for a plot rectangle.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::well::DepthRange;

/// Maps `depth` to a vertical offset in `[0, height]` for the window `range`.
///
/// Depths outside the window map outside `[0, height]`; callers filter first. A degenerate
/// window returns `0`.
pub fn depth_to_pixel(depth: f64, range: DepthRange, height: f64) -> f64 {
    if !range.is_valid() {
        return 0.0;
    }
    (depth - range.min) / range.span() * height
}

/// Maps `value` to a horizontal offset in `[0, width]`, clamping into the scale bounds first.
pub fn value_to_pixel(value: f64, scale: &ScaleConfig, width: f64) -> f64 {
    scale.normalize(value) * width
}

/// How values are spaced along a horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScaleKind {
    /// Evenly spaced values.
    #[default]
    Linear,
    /// Evenly spaced decades (`log10`).
    Log,
}

/// Horizontal bounds of one curve, e.g. `0..150` API for gamma ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    /// Value drawn at the left edge (right edge when inverted).
    pub min: f64,
    /// Value drawn at the right edge (left edge when inverted).
    pub max: f64,
    /// Whether `min` maps to the right edge.
    pub inverted: bool,
    /// Linear or logarithmic spacing.
    pub kind: ScaleKind,
}

impl ScaleConfig {
    /// A linear scale over `[min, max]`.
    pub const fn linear(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inverted: false,
            kind: ScaleKind::Linear,
        }
    }

    /// A base-10 logarithmic scale over `[min, max]`; both bounds must be positive.
    pub const fn log(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            inverted: false,
            kind: ScaleKind::Log,
        }
    }

    /// Sets whether the scale runs right to left.
    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Returns `true` if the bounds can be mapped.
    pub fn is_valid(&self) -> bool {
        let finite = self.min.is_finite() && self.max.is_finite() && self.min < self.max;
        match self.kind {
            ScaleKind::Linear => finite,
            ScaleKind::Log => finite && self.min > 0.0,
        }
    }

    /// Clamps `value` into `[min, max]`. NaN clamps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns the fraction of the track width at which `value` is drawn, in `[0, 1]`.
    ///
    /// Invalid scales map everything to `0`.
    pub fn normalize(&self, value: f64) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        let v = self.clamp(value);
        let t = match self.kind {
            ScaleKind::Linear => (v - self.min) / (self.max - self.min),
            ScaleKind::Log => {
                let lo = self.min.log10();
                (v.log10() - lo) / (self.max.log10() - lo)
            }
        };
        if self.inverted { 1.0 - t } else { t }
    }

    /// Values at which vertical gridlines are drawn, excluding the track edges.
    ///
    /// Linear scales split the width into `divisions` equal parts; log scales use each
    /// interior decade.
    pub fn grid_values(&self, divisions: usize) -> Vec<f64> {
        if !self.is_valid() {
            return Vec::new();
        }
        match self.kind {
            ScaleKind::Linear => {
                if divisions < 2 {
                    return Vec::new();
                }
                let step = (self.max - self.min) / divisions as f64;
                (1..divisions)
                    .map(|i| self.min + step * i as f64)
                    .collect()
            }
            ScaleKind::Log => decades(self.min, self.max)
                .into_iter()
                .filter(|v| *v > self.min && *v < self.max)
                .collect(),
        }
    }
}

/// Depth axis of a plot rectangle.
#[derive(Clone, Copy, Debug)]
pub struct DepthScale {
    window: DepthRange,
    inner: ScaleLinear,
}

impl DepthScale {
    /// Maps `window` onto the pixel interval `range` (top, bottom).
    pub fn new(window: DepthRange, range: (f64, f64)) -> Self {
        Self {
            window,
            inner: ScaleLinear::new((window.min, window.max), range),
        }
    }

    /// Returns the visible depth window.
    pub fn window(&self) -> DepthRange {
        self.window
    }

    /// Maps a depth to a y coordinate. A degenerate window maps everything to the top.
    pub fn map(&self, depth: f64) -> f64 {
        if !self.window.is_valid() {
            return self.inner.range.0;
        }
        self.inner.map(depth)
    }

    /// Maps a y coordinate back to a depth.
    pub fn invert(&self, y: f64) -> f64 {
        self.inner.invert(y)
    }

    /// Returns nice depth ticks inside the window.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if !self.window.is_valid() {
            return Vec::new();
        }
        self.inner
            .ticks(count)
            .into_iter()
            .filter(|d| self.window.contains(*d))
            .collect()
    }

    /// Returns every multiple of `interval` inside the window.
    pub fn ticks_every(&self, interval: f64) -> Vec<f64> {
        if !self.window.is_valid() || !interval.is_finite() || interval <= 0.0 {
            return Vec::new();
        }
        let first = (self.window.min / interval).ceil();
        let last = (self.window.max / interval).floor();
        let count = (last - first).clamp(-1.0, 10_000.0);
        if count < 0.0 {
            return Vec::new();
        }
        #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=10k")]
        let count = count as u32;
        (0..=count)
            .map(|i| (first + f64::from(i)) * interval)
            .collect()
    }
}

/// Value axis of a plot rectangle.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    config: ScaleConfig,
    range: (f64, f64),
}

impl ValueScale {
    /// Maps `config` onto the pixel interval `range` (left, right).
    pub fn new(config: ScaleConfig, range: (f64, f64)) -> Self {
        Self { config, range }
    }

    /// Returns the scale bounds.
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Maps a value to an x coordinate, clamping out-of-scale values to the edges.
    pub fn map(&self, value: f64) -> f64 {
        self.map_unit(self.config.normalize(value))
    }

    /// Maps a fraction of the track width to an x coordinate.
    pub fn map_unit(&self, t: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + t * (r1 - r0)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        d0 + (y - r0) / denom * (d1 - d0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns “nice-ish” tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Returns the tick step `nice_ticks` would use for `count` ticks over `[min, max]`.
pub(crate) fn tick_step(min: f64, max: f64, count: usize) -> f64 {
    nice_step((max - min).abs() / count.max(1) as f64)
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = tick_step(min, max, count);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor().clamp(-300.0, 300.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to +/-300")]
    let base = 10_f64.powi(power as i32);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Powers of ten covering `[min, max]` (both positive).
pub(crate) fn decades(min: f64, max: f64) -> Vec<f64> {
    if !min.is_finite() || min <= 0.0 || !max.is_finite() || min > max {
        return Vec::new();
    }
    let lo = min.log10().ceil().clamp(-300.0, 300.0);
    let hi = max.log10().floor().clamp(-300.0, 300.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to +/-300")]
    let (lo, hi) = (lo as i32, hi as i32);
    (lo..=hi).map(|e| 10_f64.powi(e)).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn depth_mapping_hits_both_ends_and_is_monotonic() {
        let range = DepthRange::new(1000.0, 1500.0);
        assert!(close(depth_to_pixel(1000.0, range, 600.0), 0.0));
        assert!(close(depth_to_pixel(1500.0, range, 600.0), 600.0));
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=50 {
            let y = depth_to_pixel(1000.0 + 10.0 * f64::from(i), range, 600.0);
            assert!(y > prev, "depth mapping must increase with depth");
            prev = y;
        }
    }

    #[test]
    fn degenerate_depth_window_maps_to_zero() {
        assert!(close(depth_to_pixel(5.0, DepthRange::new(5.0, 5.0), 100.0), 0.0));
        assert!(close(depth_to_pixel(5.0, DepthRange::new(9.0, 1.0), 100.0), 0.0));
        let s = DepthScale::new(DepthRange::new(9.0, 1.0), (10.0, 110.0));
        assert!(close(s.map(5.0), 10.0));
        assert!(s.ticks(5).is_empty());
    }

    #[test]
    fn out_of_scale_values_clamp_to_the_edges() {
        let gr = ScaleConfig::linear(0.0, 150.0);
        assert!(close(value_to_pixel(-40.0, &gr, 200.0), value_to_pixel(0.0, &gr, 200.0)));
        assert!(close(value_to_pixel(400.0, &gr, 200.0), value_to_pixel(150.0, &gr, 200.0)));
        assert!(close(value_to_pixel(75.0, &gr, 200.0), 100.0));
    }

    #[test]
    fn inverted_scales_run_right_to_left() {
        let nphi = ScaleConfig::linear(-0.15, 0.45).with_inverted(true);
        assert!(close(value_to_pixel(0.45, &nphi, 100.0), 0.0));
        assert!(close(value_to_pixel(-0.15, &nphi, 100.0), 100.0));
    }

    #[test]
    fn log_scales_space_decades_evenly() {
        let rt = ScaleConfig::log(0.2, 2000.0);
        assert!(close(value_to_pixel(0.2, &rt, 400.0), 0.0));
        assert!(close(value_to_pixel(2000.0, &rt, 400.0), 400.0));
        let a = value_to_pixel(2.0, &rt, 400.0);
        let b = value_to_pixel(20.0, &rt, 400.0);
        assert!(close(a, 100.0));
        assert!(close(b - a, 100.0));
        // Non-positive values clamp to the minimum.
        assert!(close(value_to_pixel(-3.0, &rt, 400.0), 0.0));
        assert_eq!(rt.grid_values(4), vec![1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn invalid_scales_map_to_the_origin() {
        assert!(close(ScaleConfig::linear(3.0, 3.0).normalize(3.0), 0.0));
        assert!(close(ScaleConfig::log(0.0, 10.0).normalize(5.0), 0.0));
    }

    #[test]
    fn linear_grid_splits_the_width() {
        let gr = ScaleConfig::linear(0.0, 150.0);
        assert_eq!(gr.grid_values(3), vec![50.0, 100.0]);
        assert!(gr.grid_values(1).is_empty());
    }

    #[test]
    fn depth_scale_round_trips_and_ticks_inside_the_window() {
        let s = DepthScale::new(DepthRange::new(1012.0, 1388.0), (20.0, 620.0));
        assert!(close(s.invert(s.map(1200.0)), 1200.0));
        let ticks = s.ticks(8);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|d| (1012.0..=1388.0).contains(d)));
        assert_eq!(s.ticks_every(100.0), vec![1100.0, 1200.0, 1300.0]);
        assert!(s.ticks_every(0.0).is_empty());
    }

    #[test]
    fn nice_steps_follow_one_two_five() {
        assert!(close(tick_step(0.0, 100.0, 5), 20.0));
        assert!(close(tick_step(0.0, 1.0, 4), 0.2));
        assert!(close(tick_step(0.0, 350.0, 10), 50.0));
    }
}
