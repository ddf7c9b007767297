// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for track-generated marks.
//!
//! Every layer of a track has a fixed paint order: background, grid, zones, fills, curves,
//! formation tops, labels, border. Later layers occlude earlier ones, so these constants are
//! part of the rendering contract rather than a tuning knob.
//!
//! Frames sort by `(z_index, MarkId)` for a deterministic tie-break.

/// Track background fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Depth and value gridlines.
pub const GRID_LINES: i32 = -50;
/// Shaded zone bands (completion targets).
pub const ZONES: i32 = -30;

/// Filled regions between a curve and its reference.
pub const SERIES_FILL: i32 = 0;
/// Curve polylines.
pub const SERIES_STROKE: i32 = 10;
/// Single-sample curve markers.
pub const SERIES_POINTS: i32 = 20;
/// Formation top lines and correlation tie lines.
pub const FORMATION_TOPS: i32 = 25;

/// Depth axis rules and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Depth axis tick labels and formation top names.
pub const AXIS_LABELS: i32 = 40;
/// Track header labels (curve name, unit, scale bounds).
pub const HEADER_LABELS: i32 = 50;
/// Track border, drawn last.
pub const TRACK_BORDER: i32 = 90;
