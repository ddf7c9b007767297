// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use kurbo::Rect;
use logtrack_core::{Mark, MarkId};
use peniko::{Brush, Color};

/// A rectangle mark spec: track backgrounds, zone bands and borders.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width; `0` disables the outline.
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a new rectangle mark spec with no paint.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .z_index(self.z_index)
            .rect(self.rect)
            .fill(self.fill.clone())
            .stroke(self.stroke.clone(), self.stroke_width)
            .build()
    }
}
