// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for log panels.
//!
//! - **Measure**: the depth axis and the track headers report the extents they need.
//! - **Arrange**: the panel places a title strip, a header row, the depth axis column and the
//!   track columns, either at their desired sizes or stretched to fill a fixed view.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

/// A width/height pair used by panel layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Layout inputs for one well's panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayoutSpec {
    /// Width of a track with weight `1` when no view size is given.
    pub track_width: f64,
    /// Plot height when no view size is given.
    pub plot_height: f64,
    /// Horizontal gap between columns.
    pub track_gap: f64,
    /// Outer padding on every side.
    pub padding: f64,
    /// Height of the title strip above the headers; `0` disables it.
    pub title_height: f64,
}

impl Default for PanelLayoutSpec {
    fn default() -> Self {
        Self {
            track_width: 180.0,
            plot_height: 600.0,
            track_gap: 4.0,
            padding: 8.0,
            title_height: 18.0,
        }
    }
}

/// The rectangles of one track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackSlot {
    /// Header strip above the plot.
    pub header: Rect,
    /// Plot area.
    pub plot: Rect,
}

/// Arranged panel rectangles.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    /// Outer bounds of the panel.
    pub view: Rect,
    /// Title strip spanning the axis and all tracks.
    pub title: Rect,
    /// Depth axis column, vertically aligned with the plots.
    pub axis: Rect,
    /// One slot per track, left to right.
    pub tracks: Vec<TrackSlot>,
}

impl PanelLayoutSpec {
    /// Arranges a panel.
    ///
    /// `axis_width` and `header_height` come from the measure pass. `weights` holds one relative
    /// width per track; with a `view` size the tracks share the leftover width by weight,
    /// otherwise each gets `track_width * weight`.
    pub fn arrange(
        &self,
        axis_width: f64,
        header_height: f64,
        weights: &[f64],
        view: Option<Size>,
    ) -> PanelLayout {
        let pad = self.padding.max(0.0);
        let gap = self.track_gap.max(0.0);
        let axis_width = axis_width.max(0.0);
        let header_height = header_height.max(0.0);
        let title_height = self.title_height.max(0.0);

        let weights: Vec<f64> = weights
            .iter()
            .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
            .collect();
        let total_weight: f64 = weights.iter().sum();
        let count = weights.len() as f64;
        let share = |w: f64| {
            if total_weight > 0.0 {
                w / total_weight
            } else if count > 0.0 {
                1.0 / count
            } else {
                0.0
            }
        };

        let header_y0 = pad + title_height;
        let plot_y0 = header_y0 + header_height;
        let (plot_y1, track_widths): (f64, Vec<f64>) = match view {
            Some(size) => {
                let available = (size.width - 2.0 * pad - axis_width - gap * count).max(0.0);
                (
                    (size.height - pad).max(plot_y0),
                    weights.iter().map(|w| available * share(*w)).collect(),
                )
            }
            None => (
                plot_y0 + self.plot_height.max(0.0),
                weights
                    .iter()
                    .map(|w| self.track_width.max(0.0) * count * share(*w))
                    .collect(),
            ),
        };

        let axis = Rect::new(pad, plot_y0, pad + axis_width, plot_y1);
        let mut x = axis.x1;
        let mut tracks = Vec::with_capacity(track_widths.len());
        for w in track_widths {
            x += gap;
            tracks.push(TrackSlot {
                header: Rect::new(x, header_y0, x + w, plot_y0),
                plot: Rect::new(x, plot_y0, x + w, plot_y1),
            });
            x += w;
        }

        let view = match view {
            Some(size) => Rect::new(0.0, 0.0, size.width.max(0.0), size.height.max(0.0)),
            None => Rect::new(0.0, 0.0, x + pad, plot_y1 + pad),
        };
        PanelLayout {
            view,
            title: Rect::new(pad, pad, x, header_y0),
            axis,
            tracks,
        }
    }
}

impl PanelLayout {
    /// Returns this layout shifted horizontally by `dx`.
    pub fn translate(&self, dx: f64) -> Self {
        let d = Vec2::new(dx, 0.0);
        Self {
            view: self.view + d,
            title: self.title + d,
            axis: self.axis + d,
            tracks: self
                .tracks
                .iter()
                .map(|t| TrackSlot {
                    header: t.header + d,
                    plot: t.plot + d,
                })
                .collect(),
        }
    }

    /// The vertical extent shared by the axis and every plot.
    pub fn plot_span(&self) -> (f64, f64) {
        (self.axis.y0, self.axis.y1)
    }

    /// The left edge of the first plot and the right edge of the last one.
    pub fn plots_span(&self) -> Option<(f64, f64)> {
        let first = self.tracks.first()?;
        let last = self.tracks.last()?;
        Some((first.plot.x0, last.plot.x1))
    }
}
