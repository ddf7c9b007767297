// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conventional track layouts.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;

use crate::fill::FillPredicate;
use crate::scale::ScaleConfig;
use crate::track::{CurveSeries, FillSpec, TrackSpec};

/// Gamma ray cutoff between clean sand and shale, in API units.
const SAND_SHALE_CUTOFF: f64 = 75.0;

/// Gamma ray on a 0–150 API scale, sand shaded below the cutoff and shale above it.
pub fn gamma_ray_track() -> TrackSpec {
    TrackSpec::new("Gamma Ray")
        .with_curve(
            CurveSeries::new("GR", ScaleConfig::linear(0.0, 150.0)).with_stroke(css::GREEN, 1.5),
        )
        .with_fill(FillSpec::threshold(
            "GR",
            SAND_SHALE_CUTOFF,
            FillPredicate::Less,
            css::GOLD.with_alpha(0.6),
        ))
        .with_fill(FillSpec::threshold(
            "GR",
            SAND_SHALE_CUTOFF,
            FillPredicate::Greater,
            css::GRAY.with_alpha(0.5),
        ))
}

/// Deep and medium induction resistivity on a 0.2–2000 ohm·m log scale.
pub fn resistivity_track() -> TrackSpec {
    let scale = ScaleConfig::log(0.2, 2000.0);
    TrackSpec::new("Resistivity")
        .with_curve(CurveSeries::new("ILD", scale).with_stroke(css::RED, 1.5))
        .with_curve(CurveSeries::new("ILM", scale).with_stroke(css::BLUE, 1.0))
}

/// Neutron-density porosity with the gas crossover shaded.
///
/// Neutron porosity runs 0.45 to -0.15 left to right, bulk density 1.95 to 2.95 g/cc.
pub fn porosity_track() -> TrackSpec {
    TrackSpec::new("Porosity")
        .with_curve(
            CurveSeries::new("NPHI", ScaleConfig::linear(-0.15, 0.45).with_inverted(true))
                .with_stroke(css::BLUE, 1.5),
        )
        .with_curve(
            CurveSeries::new("RHOB", ScaleConfig::linear(1.95, 2.95)).with_stroke(css::RED, 1.5),
        )
        .with_fill(FillSpec::between(
            "RHOB",
            "NPHI",
            FillPredicate::Less,
            css::YELLOW.with_alpha(0.6),
        ))
}

/// Gamma ray, resistivity and porosity, left to right.
pub fn default_tracks() -> Vec<TrackSpec> {
    vec![gamma_ray_track(), resistivity_track(), porosity_track()]
}
