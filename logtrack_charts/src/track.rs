// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track rendering.
//!
//! A [`TrackSpec`] describes one vertical strip: the curves it draws, the fills between them and
//! the grid behind them. Rendering is a pure function of the spec, the well data and the arranged
//! rectangles; it returns the complete mark list plus the hit targets of every drawn sample.
//!
//! Mark ids are derived from the track's `id_base`:
//!
//! | series    | marks                        |
//! |-----------|------------------------------|
//! | `0`       | background, border, header frame |
//! | `1`       | gridlines                    |
//! | `2`       | zone bands and names         |
//! | `3`, `4`  | formation top lines, names   |
//! | `5`       | header labels and swatches   |
//! | `8 + f`   | regions of fill `f`          |
//! | `32 + c`  | polyline of curve `c`        |

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use logtrack_core::{Mark, MarkId, TextAnchor, TextBaseline};
use peniko::Brush;
use peniko::color::palette::css;

use crate::axis::StrokeStyle;
use crate::curve_mark::CurveMarkSpec;
use crate::fill::{
    DEFAULT_MATCH_TOLERANCE, FillPredicate, FillRegion, composite, match_by_depth,
    threshold_samples,
};
use crate::format::format_tick_with_step;
use crate::hit_test::HitTarget;
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::sampler::{CurveSampler, RenderedPoint};
use crate::scale::{DepthScale, ScaleConfig, ValueScale};
use crate::symbol::Symbol;
use crate::text_mark::TextMarkSpec;
use crate::visibility::SeriesVisibility;
use crate::well::{DepthRange, Well};
use crate::z_order;

const SERIES_FRAME: u64 = 0;
const SERIES_GRID: u64 = 1;
const SERIES_ZONES: u64 = 2;
const SERIES_TOPS: u64 = 3;
const SERIES_TOP_LABELS: u64 = 4;
const SERIES_HEADER: u64 = 5;
const SERIES_FILLS: u64 = 8;
const SERIES_CURVES: u64 = 32;

/// One curve drawn in a track.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSeries {
    /// Curve mnemonic, looked up case-insensitively in the well.
    pub curve: String,
    /// Horizontal scale.
    pub scale: ScaleConfig,
    /// Stroke style; its paint also colors the header row.
    pub stroke: StrokeStyle,
    /// Marker used when only one sample is visible.
    pub symbol: Symbol,
}

impl CurveSeries {
    /// Creates a series with a black 1px stroke.
    pub fn new(curve: impl Into<String>, scale: ScaleConfig) -> Self {
        Self {
            curve: curve.into(),
            scale,
            stroke: StrokeStyle::default(),
            symbol: Symbol::Circle,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, brush: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = StrokeStyle::solid(brush, stroke_width);
        self
    }

    /// Sets the single-sample marker shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }
}

/// What a fill shades against.
#[derive(Clone, Debug, PartialEq)]
pub enum FillReference {
    /// A constant value on the primary curve's scale.
    Threshold(f64),
    /// Another curve in the same track, compared by horizontal position.
    Curve(String),
}

/// A shaded region between a curve and its reference.
#[derive(Clone, Debug, PartialEq)]
pub struct FillSpec {
    /// Primary curve mnemonic; must be one of the track's series.
    pub curve: String,
    /// Threshold or second curve.
    pub reference: FillReference,
    /// Which side is shaded.
    pub predicate: FillPredicate,
    /// Fill paint.
    pub fill: Brush,
    /// Largest depth gap at which two curves' samples are paired.
    pub match_tolerance: f64,
}

impl FillSpec {
    /// Shades where `curve` is above/below a constant.
    pub fn threshold(
        curve: impl Into<String>,
        threshold: f64,
        predicate: FillPredicate,
        fill: impl Into<Brush>,
    ) -> Self {
        Self {
            curve: curve.into(),
            reference: FillReference::Threshold(threshold),
            predicate,
            fill: fill.into(),
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
        }
    }

    /// Shades where `curve` plots left (`Less`) or right (`Greater`) of `other`.
    ///
    /// The comparison uses each curve's position across the track, so the curves may use
    /// different scales; this is how neutron-density crossover is shaded.
    pub fn between(
        curve: impl Into<String>,
        other: impl Into<String>,
        predicate: FillPredicate,
        fill: impl Into<Brush>,
    ) -> Self {
        Self {
            curve: curve.into(),
            reference: FillReference::Curve(other.into()),
            predicate,
            fill: fill.into(),
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
        }
    }

    /// Sets the depth matching tolerance for curve-to-curve fills.
    pub fn with_match_tolerance(mut self, tolerance: f64) -> Self {
        self.match_tolerance = tolerance;
        self
    }
}

/// Gridline settings.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Fixed depth interval between horizontal lines; `None` uses nice ticks.
    pub depth_interval: Option<f64>,
    /// Approximate number of horizontal lines when no interval is set.
    pub depth_tick_count: usize,
    /// Number of equal value divisions on linear tracks (log tracks use decades).
    pub value_divisions: usize,
    /// Gridline stroke.
    pub stroke: StrokeStyle,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            depth_interval: None,
            depth_tick_count: 10,
            value_divisions: 4,
            stroke: StrokeStyle::solid(css::BLACK.with_alpha(0.15), 0.5),
        }
    }
}

/// Track paint and header metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackStyle {
    /// Plot background paint.
    pub background: Brush,
    /// Border drawn around the plot and header.
    pub border: StrokeStyle,
    /// Formation top line style.
    pub top_stroke: StrokeStyle,
    /// Zone band paint.
    pub zone_fill: Brush,
    /// Font size of curve names in the header.
    pub header_font_size: f64,
    /// Font size of scale bounds in the header and of top/zone names.
    pub small_font_size: f64,
    /// Height of one header row.
    pub header_row_height: f64,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            background: Brush::Solid(css::WHITE),
            border: StrokeStyle::solid(css::BLACK, 1.0),
            top_stroke: StrokeStyle::solid(css::DARK_SLATE_BLUE, 1.0),
            zone_fill: Brush::Solid(css::LIGHT_GREEN.with_alpha(0.25)),
            header_font_size: 11.0,
            small_font_size: 9.0,
            header_row_height: 28.0,
        }
    }
}

/// One vertical strip of a log display.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSpec {
    /// Title shown in the header's first row; empty for none.
    pub title: String,
    /// Relative width when tracks share a panel.
    pub width_weight: f64,
    /// Curves, in draw order.
    pub curves: Vec<CurveSeries>,
    /// Fills, drawn below every curve.
    pub fills: Vec<FillSpec>,
    /// Optional gridlines.
    pub grid: Option<GridSpec>,
    /// Whether formation tops are drawn.
    pub show_tops: bool,
    /// Whether zones are drawn.
    pub show_zones: bool,
    /// Paint and header metrics.
    pub style: TrackStyle,
}

/// Everything a track needs to render besides its spec.
#[derive(Clone, Copy, Debug)]
pub struct TrackContext<'a> {
    /// Stable-id base for this track's marks.
    pub id_base: u64,
    /// The well being drawn.
    pub well: &'a Well,
    /// Visible depth window.
    pub window: DepthRange,
    /// Arranged header strip.
    pub header: Rect,
    /// Arranged plot area.
    pub plot: Rect,
    /// Curve toggles.
    pub visibility: &'a SeriesVisibility,
}

/// Output of one track render.
#[derive(Clone, Debug, Default)]
pub struct RenderedTrack {
    /// All marks, unsorted.
    pub marks: Vec<Mark>,
    /// Scene positions of every drawn sample.
    pub hits: Vec<HitTarget>,
    /// Fill regions per fill spec, in data space.
    pub regions: Vec<Vec<FillRegion>>,
}

impl TrackSpec {
    /// Creates an empty track with a default grid.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width_weight: 1.0,
            curves: Vec::new(),
            fills: Vec::new(),
            grid: Some(GridSpec::default()),
            show_tops: true,
            show_zones: true,
            style: TrackStyle::default(),
        }
    }

    /// Adds a curve.
    pub fn with_curve(mut self, series: CurveSeries) -> Self {
        self.curves.push(series);
        self
    }

    /// Adds a fill.
    pub fn with_fill(mut self, fill: FillSpec) -> Self {
        self.fills.push(fill);
        self
    }

    /// Sets or clears the grid.
    pub fn with_grid(mut self, grid: Option<GridSpec>) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the relative width.
    pub fn with_width_weight(mut self, weight: f64) -> Self {
        self.width_weight = weight;
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: TrackStyle) -> Self {
        self.style = style;
        self
    }

    fn series(&self, curve: &str) -> Option<&CurveSeries> {
        self.curves
            .iter()
            .find(|s| s.curve.eq_ignore_ascii_case(curve))
    }

    fn header_rows(&self, visibility: &SeriesVisibility) -> usize {
        let title = usize::from(!self.title.is_empty());
        title
            + self
                .curves
                .iter()
                .filter(|s| visibility.is_curve_visible(&s.curve))
                .count()
    }

    /// Measures the header height this track needs.
    pub fn header_height(&self, visibility: &SeriesVisibility) -> f64 {
        self.header_rows(visibility).max(1) as f64 * self.style.header_row_height
    }

    /// Renders the track.
    ///
    /// Missing curves, empty curves and an invalid window are not errors: the affected layers
    /// are simply left out. The background, header and border are always drawn.
    pub fn render(&self, ctx: &TrackContext<'_>) -> RenderedTrack {
        let mut out = RenderedTrack::default();
        let base = ctx.id_base;

        out.marks.push(
            RectMarkSpec::new(MarkId::for_series(base, SERIES_FRAME, 0), ctx.plot)
                .with_fill(self.style.background.clone())
                .with_z_index(z_order::PLOT_BACKGROUND)
                .mark(),
        );
        self.header_marks(ctx, &mut out.marks);

        if !ctx.window.is_valid() {
            tracing::debug!(
                track = %self.title,
                well = %ctx.well.well_name,
                "invalid depth window; drawing an empty track"
            );
        } else {
            let depth = DepthScale::new(ctx.window, (ctx.plot.y0, ctx.plot.y1));
            if let Some(grid) = &self.grid {
                self.grid_marks(ctx, grid, &depth, &mut out.marks);
            }
            if self.show_zones {
                self.zone_marks(ctx, &depth, &mut out.marks);
            }
            if self.show_tops {
                self.top_marks(ctx, &depth, &mut out.marks);
            }
            self.fill_marks(ctx, &depth, &mut out);
            self.curve_marks(ctx, &depth, &mut out);
        }

        for (i, rect) in [ctx.plot, ctx.header].into_iter().enumerate() {
            out.marks.push(
                RectMarkSpec::new(MarkId::for_series(base, SERIES_FRAME, 1 + i as u64), rect)
                    .with_stroke(
                        self.style.border.brush.clone(),
                        self.style.border.stroke_width,
                    )
                    .with_z_index(z_order::TRACK_BORDER)
                    .mark(),
            );
        }
        out
    }

    fn visible_points(&self, ctx: &TrackContext<'_>, curve: &str) -> Option<Vec<RenderedPoint>> {
        if !ctx.visibility.is_curve_visible(curve) {
            return None;
        }
        let Some(c) = ctx.well.curve(curve) else {
            tracing::debug!(
                curve,
                well = %ctx.well.well_name,
                "curve not present in well"
            );
            return None;
        };
        Some(CurveSampler::new(c, ctx.well.depth_range, ctx.window).collect())
    }

    fn value_scale(ctx: &TrackContext<'_>, config: ScaleConfig) -> ValueScale {
        ValueScale::new(config, (ctx.plot.x0, ctx.plot.x1))
    }

    fn grid_marks(
        &self,
        ctx: &TrackContext<'_>,
        grid: &GridSpec,
        depth: &DepthScale,
        out: &mut Vec<Mark>,
    ) {
        let plot = ctx.plot;
        let depths = match grid.depth_interval {
            Some(interval) => depth.ticks_every(interval),
            None => depth.ticks(grid.depth_tick_count),
        };
        let fractions: Vec<f64> = match self.curves.first() {
            Some(s) => s
                .scale
                .grid_values(grid.value_divisions)
                .into_iter()
                .map(|v| s.scale.normalize(v))
                .collect(),
            None => (1..grid.value_divisions.max(1))
                .map(|i| i as f64 / grid.value_divisions as f64)
                .collect(),
        };

        let mut i = 0_u64;
        for d in depths {
            let y = depth.map(d);
            out.push(
                RuleMarkSpec::horizontal(MarkId::for_series(ctx.id_base, SERIES_GRID, i), y, plot.x0, plot.x1)
                    .with_style(&grid.stroke)
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
            i += 1;
        }
        for t in fractions {
            let x = plot.x0 + t * plot.width();
            out.push(
                RuleMarkSpec::vertical(MarkId::for_series(ctx.id_base, SERIES_GRID, i), x, plot.y0, plot.y1)
                    .with_style(&grid.stroke)
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
            );
            i += 1;
        }
    }

    fn zone_marks(&self, ctx: &TrackContext<'_>, depth: &DepthScale, out: &mut Vec<Mark>) {
        for (i, zone) in ctx.well.zones.iter().enumerate() {
            let Some(visible) = DepthRange::new(zone.top, zone.base).intersect(ctx.window) else {
                continue;
            };
            let band = Rect::new(
                ctx.plot.x0,
                depth.map(visible.min),
                ctx.plot.x1,
                depth.map(visible.max),
            );
            let i = i as u64;
            out.push(
                RectMarkSpec::new(MarkId::for_series(ctx.id_base, SERIES_ZONES, 2 * i), band)
                    .with_fill(self.style.zone_fill.clone())
                    .with_z_index(z_order::ZONES)
                    .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::for_series(ctx.id_base, SERIES_ZONES, 2 * i + 1),
                    Point::new(band.x0 + 3.0, band.y0 + 2.0),
                    zone.name.clone(),
                )
                .with_font_size(self.style.small_font_size)
                .with_baseline(TextBaseline::Hanging)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }
    }

    fn top_marks(&self, ctx: &TrackContext<'_>, depth: &DepthScale, out: &mut Vec<Mark>) {
        for (i, top) in ctx.well.tops.iter().enumerate() {
            if !ctx.window.contains(top.depth) {
                continue;
            }
            let y = depth.map(top.depth);
            out.push(
                RuleMarkSpec::horizontal(MarkId::for_series(ctx.id_base, SERIES_TOPS, i as u64), y, ctx.plot.x0, ctx.plot.x1)
                    .with_style(&self.style.top_stroke)
                    .with_z_index(z_order::FORMATION_TOPS)
                    .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::for_series(ctx.id_base, SERIES_TOP_LABELS, i as u64),
                    Point::new(ctx.plot.x1 - 3.0, y - 2.0),
                    top.name.clone(),
                )
                .with_font_size(self.style.small_font_size)
                .with_fill(self.style.top_stroke.brush.clone())
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Alphabetic)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }
    }

    fn fill_marks(&self, ctx: &TrackContext<'_>, depth: &DepthScale, out: &mut RenderedTrack) {
        for (f, fill) in self.fills.iter().enumerate() {
            let regions = self.fill_regions(ctx, fill);
            let Some(primary) = self.series(&fill.curve) else {
                out.regions.push(regions);
                continue;
            };
            let value = Self::value_scale(ctx, primary.scale);
            let series = SERIES_FILLS + f as u64;
            for (r, region) in regions.iter().enumerate() {
                let path = match fill.reference {
                    FillReference::Threshold(_) => {
                        region.to_path(|d| depth.map(d), |v| value.map(v))
                    }
                    FillReference::Curve(_) => {
                        region.to_path(|d| depth.map(d), |t| value.map_unit(t))
                    }
                };
                out.marks.push(
                    Mark::builder(MarkId::for_series(ctx.id_base, series, r as u64))
                        .z_index(z_order::SERIES_FILL)
                        .path(path)
                        .fill(fill.fill.clone())
                        .build(),
                );
            }
            tracing::trace!(
                curve = %fill.curve,
                regions = regions.len(),
                "composited fill"
            );
            out.regions.push(regions);
        }
    }

    /// Composites one fill. Curve-to-curve regions are in normalized track-width units.
    fn fill_regions(&self, ctx: &TrackContext<'_>, fill: &FillSpec) -> Vec<FillRegion> {
        let Some(primary) = self.series(&fill.curve) else {
            tracing::debug!(curve = %fill.curve, track = %self.title, "fill curve is not in the track");
            return Vec::new();
        };
        let Some(points) = self.visible_points(ctx, &primary.curve) else {
            return Vec::new();
        };
        match &fill.reference {
            FillReference::Threshold(t) => {
                composite(&threshold_samples(points, *t), fill.predicate)
            }
            FillReference::Curve(other) => {
                let Some(secondary) = self.series(other) else {
                    tracing::debug!(curve = %other, track = %self.title, "fill reference is not in the track");
                    return Vec::new();
                };
                let Some(other_points) = self.visible_points(ctx, &secondary.curve) else {
                    return Vec::new();
                };
                let mut runs = match_by_depth(&points, &other_points, fill.match_tolerance);
                for s in runs.iter_mut().flatten() {
                    s.primary = primary.scale.normalize(s.primary);
                    s.reference = secondary.scale.normalize(s.reference);
                }
                runs.iter()
                    .flat_map(|run| composite(run, fill.predicate))
                    .collect()
            }
        }
    }

    fn curve_marks(&self, ctx: &TrackContext<'_>, depth: &DepthScale, out: &mut RenderedTrack) {
        let well_name: Arc<str> = Arc::from(ctx.well.well_name.as_str());
        for (c, series) in self.curves.iter().enumerate() {
            let Some(points) = self.visible_points(ctx, &series.curve) else {
                continue;
            };
            let spec = CurveMarkSpec::new(
                MarkId::for_series(ctx.id_base, SERIES_CURVES + c as u64, 0),
                *depth,
                Self::value_scale(ctx, series.scale),
            )
            .with_stroke(series.stroke.clone())
            .with_symbol(series.symbol);
            out.marks.extend(spec.marks(&points));

            let curve_name: Arc<str> = Arc::from(series.curve.as_str());
            out.hits.extend(points.iter().map(|p| HitTarget {
                well: well_name.clone(),
                curve: curve_name.clone(),
                position: spec.position(p),
                depth: p.depth,
                value: p.value,
            }));
            tracing::trace!(curve = %series.curve, points = points.len(), "rendered curve");
        }
    }

    fn header_marks(&self, ctx: &TrackContext<'_>, out: &mut Vec<Mark>) {
        let h = self.style.header_row_height;
        let header = ctx.header;
        let mut row = 0_usize;
        let mut index = 0_u64;
        let mut push = |out: &mut Vec<Mark>, spec: TextMarkSpec| {
            let mut spec = spec;
            spec.id = MarkId::for_series(ctx.id_base, SERIES_HEADER, index);
            spec.z_index = z_order::HEADER_LABELS;
            out.push(spec.mark());
            index += 1;
        };

        if !self.title.is_empty() {
            push(
                out,
                TextMarkSpec::new(
                    MarkId(0),
                    Point::new(header.center().x, header.y0 + 0.5 * h),
                    self.title.clone(),
                )
                .with_font_size(self.style.header_font_size)
                .with_anchor(TextAnchor::Middle),
            );
            row += 1;
        }

        for series in &self.curves {
            if !ctx.visibility.is_curve_visible(&series.curve) {
                continue;
            }
            let top = header.y0 + row as f64 * h;
            let name_y = top + 0.35 * h;
            let rule_y = top + 0.75 * h;
            let unit = ctx
                .well
                .curve(&series.curve)
                .map(|c| c.unit.as_str())
                .unwrap_or_default();
            let name = if unit.is_empty() {
                series.curve.clone()
            } else {
                format!("{} ({unit})", series.curve)
            };
            let (left, right) = if series.scale.inverted {
                (series.scale.max, series.scale.min)
            } else {
                (series.scale.min, series.scale.max)
            };
            let color = series.stroke.brush.clone();
            push(
                out,
                TextMarkSpec::new(MarkId(0), Point::new(header.center().x, name_y), name)
                    .with_font_size(self.style.header_font_size)
                    .with_fill(color.clone())
                    .with_anchor(TextAnchor::Middle),
            );
            push(
                out,
                TextMarkSpec::new(
                    MarkId(0),
                    Point::new(header.x0 + 2.0, name_y),
                    format_tick_with_step(left, 0.0),
                )
                .with_font_size(self.style.small_font_size)
                .with_fill(color.clone()),
            );
            push(
                out,
                TextMarkSpec::new(
                    MarkId(0),
                    Point::new(header.x1 - 2.0, name_y),
                    format_tick_with_step(right, 0.0),
                )
                .with_font_size(self.style.small_font_size)
                .with_fill(color)
                .with_anchor(TextAnchor::End),
            );
            out.push(
                RuleMarkSpec::horizontal(
                    MarkId::for_series(ctx.id_base, SERIES_HEADER, 1024 + row as u64),
                    rule_y,
                    header.x0 + 2.0,
                    header.x1 - 2.0,
                )
                .with_style(&series.stroke)
                .with_z_index(z_order::HEADER_LABELS)
                .mark(),
            );
            row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use logtrack_core::MarkKind;

    use super::*;
    use crate::well::Curve;

    fn well() -> Well {
        Well::new("A-1", DepthRange::new(100.0, 104.0))
            .with_curve(Curve::new("GR", "API", vec![20.0, 40.0, 90.0, 110.0, 30.0]))
            .with_top("Sand A", 102.5)
            .with_zone("Perf", 101.0, 102.0)
    }

    fn ctx<'a>(well: &'a Well, visibility: &'a SeriesVisibility) -> TrackContext<'a> {
        TrackContext {
            id_base: 0,
            well,
            window: well.depth_range,
            header: Rect::new(0.0, 0.0, 150.0, 56.0),
            plot: Rect::new(0.0, 56.0, 150.0, 456.0),
            visibility,
        }
    }

    fn gr_track() -> TrackSpec {
        TrackSpec::new("Gamma Ray")
            .with_curve(CurveSeries::new("GR", ScaleConfig::linear(0.0, 150.0)))
            .with_fill(FillSpec::threshold("GR", 75.0, FillPredicate::Less, css::GOLD))
            .with_fill(FillSpec::threshold("GR", 75.0, FillPredicate::Greater, css::GRAY))
    }

    #[test]
    fn header_lists_unit_and_scale_bounds() {
        let w = well();
        let v = SeriesVisibility::new();
        let out = gr_track().render(&ctx(&w, &v));
        let texts: Vec<&str> = out.marks.iter().filter_map(Mark::text).collect();
        for expected in ["Gamma Ray", "GR (API)", "0", "150", "Sand A", "Perf"] {
            assert!(texts.contains(&expected), "missing {expected:?} in {texts:?}");
        }
        assert_eq!(gr_track().header_height(&v), 56.0);
    }

    #[test]
    fn fills_and_curves_land_in_their_layers() {
        let w = well();
        let v = SeriesVisibility::new();
        let out = gr_track().render(&ctx(&w, &v));
        let fills = out
            .marks
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_FILL)
            .count();
        assert_eq!(fills, 3);
        assert_eq!(out.regions.len(), 2);
        let curves = out
            .marks
            .iter()
            .filter(|m| m.z_index == z_order::SERIES_STROKE && m.kind() == MarkKind::Path)
            .count();
        assert_eq!(curves, 1);
        assert_eq!(out.hits.len(), 5);
    }

    #[test]
    fn hidden_curves_drop_their_fills_and_hits() {
        let w = well();
        let mut v = SeriesVisibility::new();
        v.set_curve_visible("GR", false);
        let out = gr_track().render(&ctx(&w, &v));
        assert!(out.hits.is_empty());
        assert!(out.marks.iter().all(|m| m.z_index != z_order::SERIES_FILL));
        assert!(out.regions.iter().all(Vec::is_empty));
    }

    #[test]
    fn missing_curves_are_skipped() {
        let w = well();
        let v = SeriesVisibility::new();
        let track = TrackSpec::new("")
            .with_curve(CurveSeries::new("RHOB", ScaleConfig::linear(1.95, 2.95)))
            .with_fill(FillSpec::between("RHOB", "NPHI", FillPredicate::Less, css::YELLOW));
        let out = track.render(&ctx(&w, &v));
        assert!(out.hits.is_empty());
        assert_eq!(out.regions, vec![Vec::new()]);
    }

    #[test]
    fn invalid_window_keeps_only_the_frame_and_header() {
        let w = well();
        let v = SeriesVisibility::new();
        let mut c = ctx(&w, &v);
        c.window = DepthRange::new(200.0, 100.0);
        let out = gr_track().render(&c);
        assert!(out.hits.is_empty());
        assert!(out.marks.iter().all(|m| matches!(
            m.z_index,
            z_order::PLOT_BACKGROUND | z_order::HEADER_LABELS | z_order::TRACK_BORDER
        )));
    }

    #[test]
    fn mark_ids_are_unique() {
        let w = well();
        let v = SeriesVisibility::new();
        let out = gr_track().render(&ctx(&w, &v));
        let mut ids: Vec<u64> = out.marks.iter().map(|m| m.id.0).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
