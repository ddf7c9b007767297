// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An SVG document [`Surface`].

use std::fmt::Write as _;

use kurbo::{BezPath, Rect};
use logtrack_core::{Surface, TextAnchor, TextBaseline, TextPayload};
use peniko::Brush;

/// Accumulates replayed draw commands as SVG elements.
///
/// Each `clear` starts a new document, so the surface always holds the latest repaint.
#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    view: Rect,
    body: String,
}

impl SvgSurface {
    /// Returns the complete SVG document.
    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view;
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="sans-serif">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height()
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, view: Rect) {
        self.view = view;
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Brush) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    fn fill_path(&mut self, path: &BezPath, fill: &Brush) {
        let _ = write!(self.body, r#"<path d="{}""#, path.to_svg());
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Brush, stroke_width: f64) {
        let _ = write!(self.body, r#"<path d="{}" fill="none""#, path.to_svg());
        write_paint_attr(&mut self.body, "stroke", stroke);
        let _ = write!(self.body, r#" stroke-width="{stroke_width}""#);
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, t: &TextPayload) {
        let baseline = match t.baseline {
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Ideographic => "ideographic",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
            t.pos.x, t.pos.y, t.font_size, baseline
        );
        if t.angle != 0.0 {
            let _ = write!(
                self.body,
                r#" transform="rotate({} {} {})""#,
                t.angle, t.pos.x, t.pos.y
            );
        }
        self.body.push_str(match t.anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        write_paint_attr(&mut self.body, "fill", &t.fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(&t.text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
