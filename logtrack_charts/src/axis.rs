// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth axis mark generation.
//!
//! The depth axis is a column to the left of the tracks. Like the other guides it is measured
//! first (to reserve its width) and then arranged against the plot it annotates.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use logtrack_core::{Mark, MarkId, TextAnchor, TextBaseline};
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::format_tick_with_step;
use crate::measure::TextMeasurer;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::DepthScale;
use crate::text_mark::TextMarkSpec;
use crate::well::DepthRange;
use crate::z_order;

/// A paint + width pair for stroked paths (rules, gridlines, curves).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A vertical depth axis drawn along the right edge of its column.
#[derive(Clone)]
pub struct DepthAxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Visible depth window.
    pub window: DepthRange,
    /// Approximate number of ticks when no interval is set.
    pub tick_count: usize,
    /// Fixed tick interval in depth units; overrides `tick_count`.
    pub tick_interval: Option<f64>,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Style of the axis line and ticks.
    pub rule: StrokeStyle,
    /// Tick label paint.
    pub label_fill: Brush,
    /// Tick label font size.
    pub label_font_size: f64,
    /// Optional rotated title, e.g. `MD (ft)`.
    pub title: Option<String>,
    /// Title font size.
    pub title_font_size: f64,
    /// Gap between the widest label and the title.
    pub title_offset: f64,
    /// Optional tick label formatter, called with `(depth, step)`.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl core::fmt::Debug for DepthAxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DepthAxisSpec")
            .field("id_base", &self.id_base)
            .field("window", &self.window)
            .field("tick_count", &self.tick_count)
            .field("tick_interval", &self.tick_interval)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("rule", &self.rule)
            .field("label_fill", &self.label_fill)
            .field("label_font_size", &self.label_font_size)
            .field("title", &self.title)
            .field("title_font_size", &self.title_font_size)
            .field("title_offset", &self.title_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl DepthAxisSpec {
    /// Creates a depth axis with ten nice ticks and no title.
    pub fn new(id_base: u64, window: DepthRange) -> Self {
        Self {
            id_base,
            window,
            tick_count: 10,
            tick_interval: None,
            tick_size: 5.0,
            tick_padding: 4.0,
            rule: StrokeStyle::default(),
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
            title: None,
            title_font_size: 11.0,
            title_offset: 6.0,
            tick_formatter: None,
        }
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Uses a fixed tick interval; non-positive values fall back to nice ticks.
    pub fn with_tick_interval(mut self, interval: Option<f64>) -> Self {
        self.tick_interval = interval.filter(|i| i.is_finite() && *i > 0.0);
        self
    }

    /// Sets the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns the tick depths and the step used to format them.
    pub fn tick_values(&self) -> (Vec<f64>, f64) {
        let scale = DepthScale::new(self.window, (0.0, 1.0));
        if let Some(interval) = self.tick_interval {
            return (scale.ticks_every(interval), interval);
        }
        let ticks = scale.ticks(self.tick_count);
        let step = ticks
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .fold(f64::INFINITY, f64::min);
        (ticks, if step.is_finite() { step } else { 0.0 })
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Measures the column width this axis needs.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (ticks, step) = self.tick_values();
        let widest = ticks
            .into_iter()
            .map(|v| {
                measurer
                    .measure(&self.format_tick(v, step), self.label_font_size)
                    .0
            })
            .fold(0.0_f64, f64::max);
        let mut out = self.tick_size.abs() + self.tick_padding.max(0.0) + widest;
        if self.title.is_some() {
            // A rotated title's height becomes width.
            out += self.title_offset.max(0.0) + self.title_font_size;
        }
        out
    }

    /// Generates the axis marks.
    ///
    /// `axis_rect` is the reserved column; the axis line runs along its right edge over the
    /// vertical extent of `plot`.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let x = axis_rect.x1;
        let scale = DepthScale::new(self.window, (plot.y0, plot.y1));
        let mut out = Vec::new();
        if !self.window.is_valid() {
            return out;
        }

        out.push(
            RuleMarkSpec::vertical(MarkId::for_series(self.id_base, 0, 0), x, plot.y0, plot.y1)
                .with_style(&self.rule)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        let (ticks, step) = self.tick_values();
        let tick_size = self.tick_size.abs();
        for (i, depth) in ticks.into_iter().enumerate() {
            let y = scale.map(depth);
            out.push(
                RuleMarkSpec::horizontal(
                    MarkId::for_series(self.id_base, 1, i as u64),
                    y,
                    x - tick_size,
                    x,
                )
                .with_style(&self.rule)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::for_series(self.id_base, 2, i as u64),
                    (x - tick_size - self.tick_padding.max(0.0), y).into(),
                    self.format_tick(depth, step),
                )
                .with_font_size(self.label_font_size)
                .with_fill(self.label_fill.clone())
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }

        if let Some(title) = &self.title {
            out.push(
                TextMarkSpec::new(
                    MarkId::for_series(self.id_base, 0, 1),
                    (
                        axis_rect.x0 + 0.5 * self.title_font_size,
                        0.5 * (plot.y0 + plot.y1),
                    )
                        .into(),
                    title.clone(),
                )
                .with_font_size(self.title_font_size)
                .with_fill(self.label_fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_angle(-90.0)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use logtrack_core::MarkKind;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    #[test]
    fn fixed_interval_overrides_nice_ticks() {
        let axis = DepthAxisSpec::new(0, DepthRange::new(1012.0, 1388.0))
            .with_tick_interval(Some(100.0));
        assert_eq!(axis.tick_values(), (vec![1100.0, 1200.0, 1300.0], 100.0));
        let nice = DepthAxisSpec::new(0, DepthRange::new(1012.0, 1388.0)).with_tick_interval(Some(-5.0));
        assert!(nice.tick_interval.is_none());
    }

    #[test]
    fn measure_covers_the_widest_label_and_title() {
        let axis = DepthAxisSpec::new(0, DepthRange::new(0.0, 10000.0)).with_tick_count(2);
        let m = HeuristicTextMeasurer;
        let base = axis.measure(&m);
        // "10000" at 10px is 30px wide; plus tick 5 and padding 4.
        assert!((base - 39.0).abs() < 1e-9, "{base}");
        let titled = axis.with_title("MD (ft)").measure(&m);
        assert!((titled - base - 17.0).abs() < 1e-9, "{titled}");
    }

    #[test]
    fn marks_place_labels_left_of_the_axis_line() {
        let axis = DepthAxisSpec::new(0, DepthRange::new(100.0, 200.0)).with_tick_interval(Some(50.0));
        let plot = Rect::new(60.0, 10.0, 160.0, 110.0);
        let axis_rect = Rect::new(0.0, 10.0, 50.0, 110.0);
        let marks = axis.marks(plot, axis_rect);
        // Axis line + 3 ticks + 3 labels.
        assert_eq!(marks.len(), 7);
        let labels: std::vec::Vec<&str> = marks.iter().filter_map(Mark::text).collect();
        assert_eq!(labels, vec!["100", "150", "200"]);
        for m in marks.iter().filter(|m| m.kind() == MarkKind::Path) {
            let b = m.payload.bounds().expect("paths have bounds");
            assert!(b.x1 <= 50.0 + 1e-9);
        }
    }

    #[test]
    fn degenerate_window_draws_nothing() {
        let axis = DepthAxisSpec::new(0, DepthRange::new(5.0, 5.0));
        assert!(axis.marks(Rect::new(0.0, 0.0, 1.0, 1.0), Rect::ZERO).is_empty());
    }
}
