// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use logtrack_core::{Mark, MarkId};

use crate::axis::StrokeStyle;
use crate::sampler::RenderedPoint;
use crate::scale::{DepthScale, ValueScale};
use crate::symbol::Symbol;
use crate::z_order;

/// One curve drawn in a plot rectangle.
///
/// Visible samples are joined by a straight `move_to`/`line_to` chain in depth order, with no
/// smoothing. A curve with a single visible sample has nothing to join and is drawn as a marker
/// instead.
#[derive(Clone, Debug)]
pub struct CurveMarkSpec {
    /// Stable id of the polyline (or marker).
    pub id: MarkId,
    /// Depth to y.
    pub depth: DepthScale,
    /// Value to x.
    pub value: ValueScale,
    /// Stroke style for the polyline; also the marker fill.
    pub stroke: StrokeStyle,
    /// Marker shape for single-sample curves.
    pub symbol: Symbol,
    /// Marker diameter.
    pub marker_size: f64,
    /// Rendering order hint for the polyline.
    pub z_index: i32,
}

impl CurveMarkSpec {
    /// Creates a curve mark with a black stroke at width 1.
    pub fn new(id: MarkId, depth: DepthScale, value: ValueScale) -> Self {
        Self {
            id,
            depth,
            value,
            stroke: StrokeStyle::default(),
            symbol: Symbol::Circle,
            marker_size: 6.0,
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the single-sample marker shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the scene position of a sample.
    pub fn position(&self, p: &RenderedPoint) -> Point {
        Point::new(self.value.map(p.value), self.depth.map(p.depth))
    }

    /// Generates the polyline, the single-sample marker, or nothing for an empty curve.
    pub fn marks(&self, points: &[RenderedPoint]) -> Vec<Mark> {
        match points {
            [] => Vec::new(),
            [only] => {
                let at = self.position(only);
                let marker = Mark::builder(self.id)
                    .z_index(z_order::SERIES_POINTS)
                    .path(self.symbol.path(at.x, at.y, self.marker_size))
                    .fill(self.stroke.brush.clone())
                    .build();
                alloc::vec![marker]
            }
            _ => {
                let mut p = BezPath::new();
                for (i, pt) in points.iter().enumerate() {
                    let at = self.position(pt);
                    if i == 0 {
                        p.move_to(at);
                    } else {
                        p.line_to(at);
                    }
                }
                let line = Mark::builder(self.id)
                    .z_index(self.z_index)
                    .path(p)
                    .stroke(self.stroke.brush.clone(), self.stroke.stroke_width)
                    .build();
                alloc::vec![line]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::PathEl;
    use logtrack_core::MarkKind;

    use super::*;
    use crate::scale::ScaleConfig;
    use crate::well::DepthRange;

    fn spec() -> CurveMarkSpec {
        CurveMarkSpec::new(
            MarkId(7),
            DepthScale::new(DepthRange::new(0.0, 10.0), (0.0, 100.0)),
            ValueScale::new(ScaleConfig::linear(0.0, 150.0), (0.0, 150.0)),
        )
    }

    fn pt(depth: f64, value: f64) -> RenderedPoint {
        RenderedPoint {
            index: 0,
            depth,
            value,
        }
    }

    #[test]
    fn polyline_visits_points_in_order_without_smoothing() {
        let marks = spec().marks(&[pt(0.0, 10.0), pt(5.0, 200.0), pt(10.0, 20.0)]);
        assert_eq!(marks.len(), 1);
        let path = marks[0].path().expect("curve is a path");
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(10.0, 0.0)),
                // Out-of-scale values clamp to the track edge.
                PathEl::LineTo(Point::new(150.0, 50.0)),
                PathEl::LineTo(Point::new(20.0, 100.0)),
            ]
        );
        assert_eq!(marks[0].z_index, z_order::SERIES_STROKE);
    }

    #[test]
    fn single_point_becomes_a_marker() {
        let marks = spec().marks(&[pt(5.0, 75.0)]);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].kind(), MarkKind::Path);
        assert_eq!(marks[0].z_index, z_order::SERIES_POINTS);
        let b = marks[0].payload.bounds().expect("marker has bounds");
        assert!((b.center().x - 75.0).abs() < 1e-6);
        assert!((b.center().y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn empty_curve_draws_nothing() {
        assert!(spec().marks(&[]).is_empty());
    }
}
