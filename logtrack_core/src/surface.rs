// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The backend adapter seam.

use kurbo::{BezPath, Rect};
use peniko::Brush;

use crate::TextPayload;

/// A 2D drawing surface that can replay a [`crate::Frame`].
///
/// Implementations translate the handful of primitive commands below into whatever the
/// platform offers (an HTML canvas, an SVG document, a GPU scene, a test recorder).
/// Calls arrive in paint order; later calls occlude earlier ones.
pub trait Surface {
    /// Clears the whole surface; `view` is the frame's outer bounds.
    fn clear(&mut self, view: Rect);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, fill: &Brush);

    /// Fills a closed path.
    fn fill_path(&mut self, path: &BezPath, fill: &Brush);

    /// Strokes a path.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Brush, stroke_width: f64);

    /// Draws a single line of text.
    fn draw_text(&mut self, text: &TextPayload);
}

/// Returns `true` if painting with `brush` has no visible effect.
pub fn is_transparent(brush: &Brush) -> bool {
    matches!(brush, Brush::Solid(c) if c.components[3] <= 0.0)
}
