// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for panel layout.
//!
//! Shaping stays downstream of this crate, so layout accepts a measurer for rough bounds: the
//! depth axis width, header strip height and label placement all depend on it.

/// A minimal text measurement interface used by axes, headers and panel layout.
///
/// Callers can plug in a real text measurement backend (e.g. based on shaping), or use
/// [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
