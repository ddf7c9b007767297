// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well data loading and the built-in synthetic well.

use std::fs;
use std::path::{Path, PathBuf};

use logtrack_charts::{Curve, DepthRange, Well};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading well data.
#[derive(Debug, Error)]
pub(crate) enum WellFileError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} contains no wells")]
    Empty { path: PathBuf },
}

/// A file holds one well, an array of wells, or `{ "wells": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WellFile {
    Many(Vec<Well>),
    Wrapped { wells: Vec<Well> },
    One(Box<Well>),
}

/// Parses well JSON text.
pub(crate) fn parse_wells(text: &str) -> Result<Vec<Well>, serde_json::Error> {
    Ok(match serde_json::from_str(text)? {
        WellFile::Many(wells) | WellFile::Wrapped { wells } => wells,
        WellFile::One(well) => vec![*well],
    })
}

/// Reads a well file.
pub(crate) fn load_wells(path: &Path) -> Result<Vec<Well>, WellFileError> {
    let text = fs::read_to_string(path).map_err(|source| WellFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let wells = parse_wells(&text).map_err(|source| WellFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if wells.is_empty() {
        return Err(WellFileError::Empty {
            path: path.to_path_buf(),
        });
    }
    for well in &wells {
        for problem in well.validate() {
            tracing::warn!(%problem, "well data problem");
        }
    }
    Ok(wells)
}

/// A deterministic well with gamma ray, resistivity and porosity logs over 500 ft.
///
/// `shift` moves the formations down, so several synthetic wells correlate.
pub(crate) fn synthetic_well(name: &str, shift: f64) -> Well {
    const COUNT: usize = 501;
    let start = 1000.0;
    let end = 1500.0;
    let sand_top = 1120.0 + shift;
    let sand_base = 1210.0 + shift;
    let gas_base = 1150.0 + shift;

    let mut gr = Vec::with_capacity(COUNT);
    let mut ild = Vec::with_capacity(COUNT);
    let mut ilm = Vec::with_capacity(COUNT);
    let mut nphi = Vec::with_capacity(COUNT);
    let mut rhob = Vec::with_capacity(COUNT);
    for i in 0..COUNT {
        let depth = start + (end - start) * i as f64 / (COUNT - 1) as f64;
        let wiggle = (depth * 0.37).sin() * 6.0 + (depth * 0.11).cos() * 4.0;
        let in_sand = depth >= sand_top && depth <= sand_base;
        let in_gas = in_sand && depth <= gas_base;
        gr.push(if in_sand { 35.0 } else { 105.0 } + wiggle);
        let deep = if in_gas {
            80.0
        } else if in_sand {
            12.0
        } else {
            2.5
        };
        ild.push(deep * (1.0 + 0.02 * wiggle));
        ilm.push(0.7 * deep * (1.0 + 0.02 * wiggle));
        nphi.push(if in_gas {
            0.12
        } else if in_sand {
            0.22
        } else {
            0.33
        } + 0.002 * wiggle);
        rhob.push(if in_gas {
            2.12
        } else if in_sand {
            2.30
        } else {
            2.52
        } + 0.004 * wiggle);
    }
    // A logging gap.
    for v in &mut gr[300..305] {
        *v = logtrack_charts::DEFAULT_NULL_VALUE;
    }

    Well::new(name, DepthRange::new(start, end))
        .with_curve(Curve::new("GR", "API", gr))
        .with_curve(Curve::new("ILD", "ohm.m", ild))
        .with_curve(Curve::new("ILM", "ohm.m", ilm))
        .with_curve(Curve::new("NPHI", "v/v", nphi))
        .with_curve(Curve::new("RHOB", "g/cc", rhob))
        .with_top("Upper Shale", 1040.0 + shift)
        .with_top("Main Sand", sand_top)
        .with_top("Lower Shale", sand_base)
        .with_zone("Perforations", sand_top + 5.0, gas_base - 5.0)
}
