// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel composition.
//!
//! A panel owns the layout and the depth axis of one or more wells and assembles the track
//! marks into a single [`Frame`]:
//! - [`LogPanelSpec`] draws one well: title strip, depth axis column, tracks.
//! - [`CorrelationSpec`] draws several wells side by side over a shared depth window and joins
//!   same-named formation tops of neighbouring wells with tie lines.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use logtrack_core::{Frame, Mark, MarkId, TextAnchor};
use peniko::color::palette::css;

use crate::axis::{DepthAxisSpec, StrokeStyle};
use crate::hit_test::{DEFAULT_HIT_TOLERANCE, Hit, HitTarget, HitTester};
use crate::layout::{PanelLayout, PanelLayoutSpec, Size};
use crate::measure::TextMeasurer;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::DepthScale;
use crate::text_mark::TextMarkSpec;
use crate::track::{TrackContext, TrackSpec};
use crate::visibility::SeriesVisibility;
use crate::well::{DepthRange, Well};
use crate::z_order;

/// Bit offset separating the mark ids of consecutive wells.
const WELL_SHIFT: u32 = 34;
/// Bit offset separating the mark ids of consecutive tracks within a well.
const TRACK_SHIFT: u32 = 26;
/// Id offset of correlation tie lines.
const TIE_OFFSET: u64 = 1 << 62;

/// One well drawn as a depth axis plus tracks.
#[derive(Clone, Debug)]
pub struct LogPanelSpec {
    /// Stable-id base for every mark of the panel.
    pub id_base: u64,
    /// Tracks, left to right.
    pub tracks: Vec<TrackSpec>,
    /// Layout inputs.
    pub layout: PanelLayoutSpec,
    /// Rotated depth axis title.
    pub axis_title: Option<String>,
    /// Fixed depth tick interval; `None` uses nice ticks.
    pub depth_tick_interval: Option<f64>,
    /// Approximate number of depth ticks when no interval is set.
    pub depth_tick_count: usize,
    /// Whether the well name is drawn in the title strip.
    pub show_well_name: bool,
    /// Font size of the well name.
    pub title_font_size: f64,
    /// Pointer tolerance of the produced hit tester.
    pub hit_tolerance: f64,
}

/// Output of a panel render: what was laid out, what to paint and what can be clicked.
#[derive(Clone, Debug)]
pub struct RenderedPanel {
    /// The depth window every well was drawn with.
    pub window: DepthRange,
    /// One layout per well, left to right.
    pub layouts: Vec<PanelLayout>,
    /// The z-ordered marks.
    pub frame: Frame,
    /// Every drawn sample.
    pub hits: HitTester,
}

impl RenderedPanel {
    /// Returns the nearest drawn sample to `pointer`, within the hit tolerance.
    pub fn hit_test(&self, pointer: Point) -> Option<Hit> {
        self.hits.hit_test(pointer)
    }
}

impl LogPanelSpec {
    /// Creates a panel with default layout and a nice-tick depth axis.
    pub fn new(tracks: Vec<TrackSpec>) -> Self {
        Self {
            id_base: 0,
            tracks,
            layout: PanelLayoutSpec::default(),
            axis_title: None,
            depth_tick_interval: None,
            depth_tick_count: 10,
            show_well_name: true,
            title_font_size: 12.0,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }

    /// Sets the layout inputs.
    pub fn with_layout(mut self, layout: PanelLayoutSpec) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the depth axis title.
    pub fn with_axis_title(mut self, title: impl Into<String>) -> Self {
        self.axis_title = Some(title.into());
        self
    }

    /// Uses a fixed depth tick interval for the axis.
    pub fn with_depth_tick_interval(mut self, interval: Option<f64>) -> Self {
        self.depth_tick_interval = interval;
        self
    }

    /// Sets the hit-test tolerance in pixels.
    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    fn visible_tracks<'a>(&'a self, visibility: &SeriesVisibility) -> Vec<&'a TrackSpec> {
        self.tracks
            .iter()
            .filter(|t| visibility.is_track_visible(&t.title))
            .collect()
    }

    fn depth_axis(&self, id_base: u64, window: DepthRange) -> DepthAxisSpec {
        let mut axis = DepthAxisSpec::new(id_base, window)
            .with_tick_count(self.depth_tick_count)
            .with_tick_interval(self.depth_tick_interval);
        axis.title.clone_from(&self.axis_title);
        axis
    }

    /// Measures and arranges one well's panel.
    pub fn layout(
        &self,
        window: DepthRange,
        view: Option<Size>,
        visibility: &SeriesVisibility,
        measurer: &dyn TextMeasurer,
    ) -> PanelLayout {
        let tracks = self.visible_tracks(visibility);
        let axis_width = self.depth_axis(self.id_base, window).measure(measurer);
        let header_height = tracks
            .iter()
            .map(|t| t.header_height(visibility))
            .fold(0.0_f64, f64::max);
        let weights: Vec<f64> = tracks.iter().map(|t| t.width_weight).collect();
        let mut spec = self.layout;
        if !self.show_well_name {
            spec.title_height = 0.0;
        }
        spec.arrange(axis_width, header_height, &weights, view)
    }

    /// Renders one well.
    ///
    /// Without an explicit `window` the well's own section is shown.
    pub fn render(
        &self,
        well: &Well,
        window: Option<DepthRange>,
        view: Option<Size>,
        visibility: &SeriesVisibility,
        measurer: &dyn TextMeasurer,
    ) -> RenderedPanel {
        let window = window.unwrap_or(well.depth_range);
        let layout = self.layout(window, view, visibility, measurer);
        let mut marks = Vec::new();
        let mut hits = Vec::new();
        self.render_well(self.id_base, well, window, &layout, visibility, &mut marks, &mut hits);
        tracing::debug!(
            well = %well.well_name,
            marks = marks.len(),
            points = hits.len(),
            "rendered log panel"
        );
        RenderedPanel {
            window,
            frame: Frame::new(layout.view, marks),
            layouts: alloc::vec![layout],
            hits: HitTester::new(hits).with_tolerance(self.hit_tolerance),
        }
    }

    fn render_well(
        &self,
        id_base: u64,
        well: &Well,
        window: DepthRange,
        layout: &PanelLayout,
        visibility: &SeriesVisibility,
        marks: &mut Vec<Mark>,
        hits: &mut Vec<HitTarget>,
    ) {
        for problem in well.validate() {
            tracing::debug!(%problem, "well data problem; affected layers are omitted");
        }

        marks.extend(self.depth_axis(id_base, window).marks(layout.axis, layout.axis));

        if self.show_well_name && layout.title.height() > 0.0 {
            marks.push(
                TextMarkSpec::new(
                    MarkId::for_series(id_base, 3, 0),
                    layout.title.center(),
                    well.well_name.clone(),
                )
                .with_font_size(self.title_font_size)
                .with_anchor(TextAnchor::Middle)
                .with_z_index(z_order::HEADER_LABELS)
                .mark(),
            );
        }

        let tracks = self.visible_tracks(visibility);
        for (t, (track, slot)) in tracks.iter().zip(&layout.tracks).enumerate() {
            let ctx = TrackContext {
                id_base: id_base + ((t as u64 + 1) << TRACK_SHIFT),
                well,
                window,
                header: slot.header,
                plot: slot.plot,
                visibility,
            };
            let rendered = track.render(&ctx);
            marks.extend(rendered.marks);
            hits.extend(rendered.hits);
        }
    }
}

/// Several wells side by side over one depth window.
#[derive(Clone, Debug)]
pub struct CorrelationSpec {
    /// Per-well panel settings; every well uses the same tracks.
    pub panel: LogPanelSpec,
    /// Horizontal gap between wells.
    pub well_gap: f64,
    /// Whether same-named tops of neighbouring wells are joined.
    pub tie_tops: bool,
    /// Tie line style.
    pub tie_stroke: StrokeStyle,
}

impl CorrelationSpec {
    /// Creates a correlation of `panel`s with tie lines enabled.
    pub fn new(panel: LogPanelSpec) -> Self {
        Self {
            panel,
            well_gap: 24.0,
            tie_tops: true,
            tie_stroke: StrokeStyle::solid(css::DARK_SLATE_BLUE, 1.0),
        }
    }

    /// Sets the gap between wells.
    pub fn with_well_gap(mut self, gap: f64) -> Self {
        self.well_gap = gap;
        self
    }

    /// Enables or disables tie lines.
    pub fn with_tie_tops(mut self, tie_tops: bool) -> Self {
        self.tie_tops = tie_tops;
        self
    }

    /// The window shown when none is given: the union of every well's section.
    pub fn shared_window(wells: &[Well]) -> DepthRange {
        wells
            .iter()
            .map(|w| w.depth_range)
            .filter(DepthRange::is_valid)
            .reduce(|a, b| a.union(b))
            .or_else(|| wells.first().map(|w| w.depth_range))
            .unwrap_or(DepthRange::new(0.0, 0.0))
    }

    /// Renders every well and the tie lines between them.
    ///
    /// With a `view` size the wells share its width equally.
    pub fn render(
        &self,
        wells: &[Well],
        window: Option<DepthRange>,
        view: Option<Size>,
        visibility: &SeriesVisibility,
        measurer: &dyn TextMeasurer,
    ) -> RenderedPanel {
        let window = window.unwrap_or_else(|| Self::shared_window(wells));
        let gap = self.well_gap.max(0.0);
        let count = wells.len();
        let per_well = view.map(|v| {
            let gaps = gap * count.saturating_sub(1) as f64;
            Size::new(((v.width - gaps) / count.max(1) as f64).max(0.0), v.height)
        });

        let mut layouts = Vec::with_capacity(count);
        let mut marks = Vec::new();
        let mut hits = Vec::new();
        let mut x = 0.0;
        for (w, well) in wells.iter().enumerate() {
            let layout = self
                .panel
                .layout(window, per_well, visibility, measurer)
                .translate(x);
            x = layout.view.x1 + gap;
            let id_base = self.panel.id_base + ((w as u64) << WELL_SHIFT);
            self.panel
                .render_well(id_base, well, window, &layout, visibility, &mut marks, &mut hits);
            layouts.push(layout);
        }

        if self.tie_tops && window.is_valid() {
            self.tie_marks(wells, window, &layouts, &mut marks);
        }

        let view_rect = match view {
            Some(v) => Rect::new(0.0, 0.0, v.width, v.height),
            None => layouts
                .iter()
                .map(|l| l.view)
                .reduce(|a, b| a.union(b))
                .unwrap_or(Rect::ZERO),
        };
        tracing::debug!(
            wells = count,
            marks = marks.len(),
            points = hits.len(),
            "rendered correlation panel"
        );
        RenderedPanel {
            window,
            layouts,
            frame: Frame::new(view_rect, marks),
            hits: HitTester::new(hits).with_tolerance(self.panel.hit_tolerance),
        }
    }

    fn tie_marks(
        &self,
        wells: &[Well],
        window: DepthRange,
        layouts: &[PanelLayout],
        marks: &mut Vec<Mark>,
    ) {
        let base = self.panel.id_base + TIE_OFFSET;
        for (pair, (left, right)) in wells.iter().zip(wells.iter().skip(1)).enumerate() {
            let (Some(from), Some(to)) = (
                layouts[pair].plots_span(),
                layouts[pair + 1].plots_span(),
            ) else {
                continue;
            };
            let (y0, y1) = layouts[pair].plot_span();
            let depth = DepthScale::new(window, (y0, y1));
            let mut k = 0_u64;
            for top in left.tops.iter().filter(|t| window.contains(t.depth)) {
                let Some(other) = right
                    .tops
                    .iter()
                    .find(|o| o.name.eq_ignore_ascii_case(&top.name) && window.contains(o.depth))
                else {
                    continue;
                };
                marks.push(
                    RuleMarkSpec::new(
                        MarkId::for_series(base, pair as u64, k),
                        from.1,
                        depth.map(top.depth),
                        to.0,
                        depth.map(other.depth),
                    )
                    .with_style(&self.tie_stroke)
                    .with_z_index(z_order::FORMATION_TOPS)
                    .mark(),
                );
                k += 1;
            }
        }
    }
}
