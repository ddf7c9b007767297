// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames: the complete, ordered draw-command list for one repaint.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Rect, Shape};

use crate::surface::is_transparent;
use crate::{Mark, MarkPayload, Surface};

/// A z-ordered list of marks covering `view`.
///
/// Marks are sorted by `(z_index, MarkId)` on construction, so replaying a frame is a plain
/// front-to-back walk.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    view: Rect,
    marks: Vec<Mark>,
}

impl Frame {
    /// Creates a frame, sorting `marks` into paint order.
    pub fn new(view: Rect, mut marks: Vec<Mark>) -> Self {
        marks.sort_by_key(|m| (m.z_index, m.id));
        Self { view, marks }
    }

    /// The outer bounds of the frame.
    pub fn view(&self) -> Rect {
        self.view
    }

    /// Marks in paint order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if there is nothing to paint.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Union of the geometric bounds of all non-text marks.
    pub fn content_bounds(&self) -> Option<Rect> {
        self.marks
            .iter()
            .filter_map(|m| m.payload.bounds())
            .reduce(|a, b| a.union(b))
    }

    /// Clears `surface` and replays every mark in paint order.
    pub fn paint(&self, surface: &mut impl Surface) {
        surface.clear(self.view);
        for mark in &self.marks {
            match &mark.payload {
                MarkPayload::Rect(r) => {
                    if !is_transparent(&r.fill) {
                        surface.fill_rect(r.rect, &r.fill);
                    }
                    if r.stroke_width > 0.0 && !is_transparent(&r.stroke) {
                        surface.stroke_path(&r.rect.to_path(0.1), &r.stroke, r.stroke_width);
                    }
                }
                MarkPayload::Path(p) => {
                    if !is_transparent(&p.fill) {
                        surface.fill_path(&p.path, &p.fill);
                    }
                    if p.stroke_width > 0.0 && !is_transparent(&p.stroke) {
                        surface.stroke_path(&p.path, &p.stroke, p.stroke_width);
                    }
                }
                MarkPayload::Text(t) => surface.draw_text(t),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{BezPath, Point};
    use peniko::Brush;
    use peniko::color::palette::css;

    use super::*;
    use crate::{MarkId, TextPayload};

    #[derive(Default)]
    struct Recorder {
        ops: Vec<String>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _view: Rect) {
            self.ops.push(String::from("clear"));
        }

        fn fill_rect(&mut self, _rect: Rect, _fill: &Brush) {
            self.ops.push(String::from("fill_rect"));
        }

        fn fill_path(&mut self, _path: &BezPath, _fill: &Brush) {
            self.ops.push(String::from("fill_path"));
        }

        fn stroke_path(&mut self, _path: &BezPath, _stroke: &Brush, _stroke_width: f64) {
            self.ops.push(String::from("stroke_path"));
        }

        fn draw_text(&mut self, text: &TextPayload) {
            self.ops.push(text.text.clone());
        }
    }

    #[test]
    fn marks_are_sorted_by_z_then_id() {
        let view = Rect::new(0.0, 0.0, 10.0, 10.0);
        let marks = vec![
            Mark::builder(MarkId(2)).z_index(5).text(Point::ZERO, "b").build(),
            Mark::builder(MarkId(9)).z_index(-1).text(Point::ZERO, "a").build(),
            Mark::builder(MarkId(1)).z_index(5).text(Point::ZERO, "c").build(),
        ];
        let frame = Frame::new(view, marks);
        let order: Vec<u64> = frame.marks().iter().map(|m| m.id.0).collect();
        assert_eq!(order, vec![9, 1, 2]);
    }

    #[test]
    fn paint_clears_first_and_skips_invisible_paint() {
        let view = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut line = BezPath::new();
        line.move_to((0.0, 0.0));
        line.line_to((5.0, 5.0));
        let marks = vec![
            Mark::builder(MarkId(1))
                .z_index(0)
                .rect(view)
                .fill(css::WHITE)
                .build(),
            Mark::builder(MarkId(2))
                .z_index(1)
                .path(line)
                .stroke(css::BLACK, 1.0)
                .build(),
            Mark::builder(MarkId(3))
                .z_index(2)
                .text(Point::new(1.0, 1.0), "GR")
                .build(),
        ];
        let mut rec = Recorder::default();
        Frame::new(view, marks).paint(&mut rec);
        assert_eq!(rec.ops, vec!["clear", "fill_rect", "stroke_path", "GR"]);
    }

    #[test]
    fn repainting_is_idempotent() {
        let view = Rect::new(0.0, 0.0, 10.0, 10.0);
        let frame = Frame::new(
            view,
            vec![Mark::builder(MarkId(1)).rect(view).fill(css::WHITE).build()],
        );
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        frame.paint(&mut a);
        frame.paint(&mut b);
        frame.paint(&mut b);
        assert_eq!(a.ops.len() * 2, b.ops.len());
    }
}
