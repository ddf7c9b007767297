// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: single draw commands with stable identity.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Stable identity for a mark.
///
/// Ids only need to be unique within one frame; they are used as the tie-break when two marks
/// share a `z_index`, which keeps paint order deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Number of ids reserved for each series under a common base.
    pub const SERIES_STRIDE: u64 = 1 << 20;

    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives the id of the `index`-th mark of series `series` under `base`.
    pub const fn for_series(base: u64, series: u64, index: u64) -> Self {
        Self(
            base.wrapping_add(series.wrapping_mul(Self::SERIES_STRIDE))
                .wrapping_add(index),
        )
    }
}

/// The geometric kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// An arbitrary path (filled and/or stroked).
    Path,
    /// A single line of unshaped text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor position.
    Start,
    /// Text is centered on the anchor position.
    Middle,
    /// Text ends at the anchor position.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor is on the vertical middle of the line.
    Middle,
    /// The anchor is on the alphabetic baseline.
    Alphabetic,
    /// The anchor is on the hanging baseline (top of the line).
    Hanging,
    /// The anchor is on the ideographic baseline.
    Ideographic,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle geometry in surface coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width; `0` disables the outline.
    pub stroke_width: f64,
}

/// Path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in surface coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in surface coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in surface coordinates.
    pub font_size: f64,
    /// Rotation around `pos`, in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The draw command carried by a [`Mark`].
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A path.
    Path(PathPayload),
    /// A text label.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, or `None` for text (which needs a text measurer).
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
            Self::Text(_) => None,
        }
    }
}

/// A single draw command.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity (paint-order tie-break).
    pub id: MarkId,
    /// Paint order; lower values are painted first.
    pub z_index: i32,
    /// What to draw.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder { id, z_index: 0 }
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the text content if this is a text mark.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            MarkPayload::Text(t) => Some(&t.text),
            _ => None,
        }
    }

    /// Returns the path if this is a path mark.
    pub fn path(&self) -> Option<&BezPath> {
        match &self.payload {
            MarkPayload::Path(p) => Some(&p.path),
            _ => None,
        }
    }
}

/// Builder returned by [`Mark::builder`]; picks the payload kind.
#[derive(Clone, Copy, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
}

impl MarkBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builds a rectangle mark (transparent fill, no outline).
    pub fn rect(self, rect: Rect) -> PayloadBuilder {
        self.with_payload(MarkPayload::Rect(RectPayload {
            rect,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }))
    }

    /// Builds a path mark (transparent fill, no stroke).
    pub fn path(self, path: BezPath) -> PayloadBuilder {
        self.with_payload(MarkPayload::Path(PathPayload {
            path,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
        }))
    }

    /// Builds a text mark (black, 12px, start-anchored, middle baseline).
    pub fn text(self, pos: Point, text: impl Into<String>) -> PayloadBuilder {
        self.with_payload(MarkPayload::Text(TextPayload {
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::Solid(css::BLACK),
        }))
    }

    fn with_payload(self, payload: MarkPayload) -> PayloadBuilder {
        PayloadBuilder {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}

/// Builder stage that configures paint and text attributes.
///
/// Setters that do not apply to the chosen payload kind are ignored.
#[derive(Clone, Debug)]
pub struct PayloadBuilder {
    id: MarkId,
    z_index: i32,
    payload: MarkPayload,
}

impl PayloadBuilder {
    /// Sets the z-index.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        match &mut self.payload {
            MarkPayload::Rect(r) => r.fill = fill,
            MarkPayload::Path(p) => p.fill = fill,
            MarkPayload::Text(t) => t.fill = fill,
        }
        self
    }

    /// Sets the stroke paint and width (rects and paths).
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        let stroke = stroke.into();
        match &mut self.payload {
            MarkPayload::Rect(r) => {
                r.stroke = stroke;
                r.stroke_width = stroke_width.max(0.0);
            }
            MarkPayload::Path(p) => {
                p.stroke = stroke;
                p.stroke_width = stroke_width.max(0.0);
            }
            MarkPayload::Text(_) => {}
        }
        self
    }

    /// Sets the font size (text only).
    pub fn font_size(mut self, font_size: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.font_size = font_size;
        }
        self
    }

    /// Sets the text anchor (text only).
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.anchor = anchor;
        }
        self
    }

    /// Sets the text baseline (text only).
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.baseline = baseline;
        }
        self
    }

    /// Sets the rotation angle in degrees (text only).
    pub fn angle(mut self, angle: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.angle = angle;
        }
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: self.payload,
        }
    }
}
