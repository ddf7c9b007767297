// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well-log track building blocks for `logtrack_core`.
//!
//! This crate turns depth-indexed curve data into z-ordered `logtrack_core::Mark`s:
//! - **Scales** map depth to vertical pixels and curve values to horizontal pixels.
//! - **Sampling** reconstructs the depth of each sample and filters the visible window.
//! - **Fills** composite threshold and crossover shading between curves.
//! - **Tracks** draw background, grid, fills, curves, labels and border in a fixed order.
//! - **Panels** arrange a depth axis and several tracks, for one well or a correlation of wells.
//! - **Interaction** hit-tests pointer positions against rendered samples and debounces
//!   resize-driven repaints.
//!
//! Rendering never fails: malformed input (empty curves, degenerate depth ranges, out-of-scale
//! values) is handled by omission or clamping.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod curve_mark;
mod fill;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hit_test;
mod layout;
mod measure;
mod panel;
mod presets;
mod rect_mark;
mod redraw;
mod rule_mark;
mod sampler;
mod scale;
mod symbol;
mod text_mark;
mod track;
#[cfg(test)]
mod track_tests;
mod view;
mod visibility;
mod well;
mod z_order;

pub use axis::{DepthAxisSpec, StrokeStyle};
pub use curve_mark::CurveMarkSpec;
pub use fill::{
    DEFAULT_MATCH_TOLERANCE, FillPredicate, FillRegion, FillSample, composite, match_by_depth,
    threshold_samples,
};
pub use format::format_tick_with_step;
pub use hit_test::{DEFAULT_HIT_TOLERANCE, Hit, HitTarget, HitTester};
pub use layout::{PanelLayout, PanelLayoutSpec, Size, TrackSlot};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use panel::{CorrelationSpec, LogPanelSpec, RenderedPanel};
pub use presets::{default_tracks, gamma_ray_track, porosity_track, resistivity_track};
pub use rect_mark::RectMarkSpec;
pub use redraw::{DEFAULT_DEBOUNCE, Debouncer, ResizeEvent, ResizeEvents, ResizeSubscription};
pub use rule_mark::RuleMarkSpec;
pub use sampler::{CurveSampler, RenderedPoint, sample_depth, visible_points};
pub use scale::{
    DepthScale, ScaleConfig, ScaleKind, ScaleLinear, ValueScale, depth_to_pixel, value_to_pixel,
};
pub use symbol::Symbol;
pub use text_mark::TextMarkSpec;
pub use track::{
    CurveSeries, FillReference, FillSpec, GridSpec, RenderedTrack, TrackContext, TrackSpec,
    TrackStyle,
};
pub use view::{ClickHandler, TrackView};
pub use visibility::SeriesVisibility;
pub use well::{Curve, DEFAULT_NULL_VALUE, DataError, DepthRange, FormationTop, Well, Zone};
pub use z_order::*;
