// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders well logs to SVG.
//!
//! ```text
//! logtrack_demo --wells wells.json --config tracks.toml --out panel.svg --correlate
//! ```
//!
//! Without `--wells` a synthetic well is drawn. `RUST_LOG` overrides `--log-level`.

mod config;
mod data;
mod svg;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::Point;
use logtrack_charts::{CorrelationSpec, DepthRange, Size, TrackView, Well, default_tracks};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::TrackFile;

#[derive(Parser, Debug)]
#[command(name = "logtrack_demo")]
#[command(about = "Render well-log tracks to SVG")]
struct Args {
    /// Well data (JSON): one well, an array, or `{ "wells": [...] }`
    #[arg(long)]
    wells: Option<PathBuf>,

    /// Track configuration (TOML); defaults to gamma ray, resistivity and porosity
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path
    #[arg(long, default_value = "logtrack.svg")]
    out: PathBuf,

    /// Top of the depth window
    #[arg(long)]
    top: Option<f64>,

    /// Base of the depth window
    #[arg(long)]
    base: Option<f64>,

    /// Output width in pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Output height in pixels
    #[arg(long, default_value_t = 700.0)]
    height: f64,

    /// Draw every well side by side; otherwise only the first well is drawn
    #[arg(long)]
    correlate: bool,

    /// Report the sample nearest to `X,Y`
    #[arg(long)]
    click: Option<ClickPoint>,

    /// Log level used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug)]
struct ClickPoint(Point);

impl FromStr for ClickPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("{v:?}: {e}"))
        };
        Ok(Self(Point::new(parse(x)?, parse(y)?)))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mut wells: Vec<Well> = match &args.wells {
        Some(path) => data::load_wells(path)
            .with_context(|| format!("loading wells from {}", path.display()))?,
        None if args.correlate => vec![
            data::synthetic_well("SYN-1", 0.0),
            data::synthetic_well("SYN-2", 30.0),
            data::synthetic_well("SYN-3", 55.0),
        ],
        None => vec![data::synthetic_well("SYN-1", 0.0)],
    };
    if !args.correlate {
        wells.truncate(1);
    }

    let file = match &args.config {
        Some(path) => TrackFile::load(path)
            .with_context(|| format!("loading track config from {}", path.display()))?,
        None => TrackFile::default(),
    };
    let tracks = file
        .tracks()
        .context("building tracks")?
        .unwrap_or_else(default_tracks);
    let spec = file.correlation(tracks);

    let window = match (args.top, args.base) {
        (None, None) => None,
        (top, base) => {
            let shared = CorrelationSpec::shared_window(&wells);
            let window = DepthRange::new(top.unwrap_or(shared.min), base.unwrap_or(shared.max));
            if !window.is_valid() {
                bail!("invalid depth window {}..{}", window.min, window.max);
            }
            Some(window)
        }
    };

    let started = Instant::now();
    let mut view = TrackView::new(
        svg::SvgSurface::default(),
        spec,
        Size::new(args.width, args.height),
    );
    view.set_wells(wells);
    view.set_window(window);
    view.on_click(|curve, well| info!(curve, well, "clicked"));
    view.tick(started.elapsed());

    if let Some(ClickPoint(p)) = args.click {
        match view.click(p) {
            Some(hit) => info!(
                well = hit.well(),
                curve = hit.curve(),
                depth = hit.depth(),
                value = hit.value(),
                distance = hit.distance,
                "nearest sample"
            ),
            None => info!(x = p.x, y = p.y, "no sample within tolerance"),
        }
    }

    let svg = view.surface().to_svg_string();
    fs::write(&args.out, svg).with_context(|| format!("writing {}", args.out.display()))?;
    info!(
        path = %args.out.display(),
        redraws = view.redraw_count(),
        marks = view.frame().map_or(0, |f| f.len()),
        "wrote SVG"
    );
    Ok(())
}
