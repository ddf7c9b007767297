// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker shapes for curves that collapse to a single visible sample.

use kurbo::{BezPath, Circle, Shape};

/// A small set of marker shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// An axis-aligned square.
    Square,
    /// A circle.
    #[default]
    Circle,
    /// A diamond (square rotated 45 degrees).
    Diamond,
}

impl Symbol {
    /// Returns a path for this symbol centered at `cx, cy`, using `size` as the diameter/side.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let half = size * 0.5;
        match self {
            Self::Square => polygon(&[
                (cx - half, cy - half),
                (cx + half, cy - half),
                (cx + half, cy + half),
                (cx - half, cy + half),
            ]),
            Self::Diamond => polygon(&[
                (cx, cy - half),
                (cx + half, cy),
                (cx, cy + half),
                (cx - half, cy),
            ]),
            Self::Circle => Circle::new((cx, cy), half).path_elements(0.1).collect(),
        }
    }
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    for (i, pt) in points.iter().enumerate() {
        if i == 0 {
            p.move_to(*pt);
        } else {
            p.line_to(*pt);
        }
    }
    p.close_path();
    p
}
