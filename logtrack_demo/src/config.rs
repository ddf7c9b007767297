// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track configuration files.
//!
//! A TOML document lists the tracks left to right, each with its curves and fills:
//!
//! ```toml
//! [panel]
//! axis_title = "MD (ft)"
//!
//! [[tracks]]
//! title = "Gamma Ray"
//!
//! [[tracks.curves]]
//! name = "GR"
//! min = 0.0
//! max = 150.0
//! color = "green"
//!
//! [[tracks.fills]]
//! curve = "GR"
//! threshold = 75.0
//! when = "less"
//! color = "#ffd70099"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use logtrack_charts::{
    CorrelationSpec, CurveSeries, FillPredicate, FillSpec, GridSpec, LogPanelSpec,
    PanelLayoutSpec, ScaleConfig, ScaleKind, Symbol, TrackSpec,
};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a track configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color {value:?}: {reason}")]
    Color { value: String, reason: String },
    #[error("track {track:?}: curve {curve:?} has an invalid {kind:?} scale {min}..{max}")]
    Scale {
        track: String,
        curve: String,
        kind: ScaleKind,
        min: f64,
        max: f64,
    },
    #[error("track {track:?}: fill on {curve:?} needs exactly one of `threshold` or `against`")]
    FillReference { track: String, curve: String },
    #[error("track {track:?}: fill references unknown curve {curve:?}")]
    UnknownCurve { track: String, curve: String },
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TrackFile {
    #[serde(default)]
    pub(crate) panel: PanelConfig,
    #[serde(default)]
    pub(crate) tracks: Vec<TrackConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct PanelConfig {
    pub(crate) axis_title: Option<String>,
    pub(crate) depth_tick_interval: Option<f64>,
    pub(crate) show_well_name: bool,
    pub(crate) track_width: f64,
    pub(crate) plot_height: f64,
    pub(crate) well_gap: f64,
    pub(crate) tie_tops: bool,
    pub(crate) hit_tolerance: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let layout = PanelLayoutSpec::default();
        Self {
            axis_title: Some("Depth".to_string()),
            depth_tick_interval: None,
            show_well_name: true,
            track_width: layout.track_width,
            plot_height: layout.plot_height,
            well_gap: 24.0,
            tie_tops: true,
            hit_tolerance: logtrack_charts::DEFAULT_HIT_TOLERANCE,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TrackConfig {
    pub(crate) title: String,
    #[serde(default = "default_weight")]
    pub(crate) width: f64,
    #[serde(default = "default_true")]
    pub(crate) grid: bool,
    pub(crate) grid_interval: Option<f64>,
    #[serde(default = "default_true")]
    pub(crate) tops: bool,
    #[serde(default = "default_true")]
    pub(crate) zones: bool,
    #[serde(default)]
    pub(crate) curves: Vec<CurveConfig>,
    #[serde(default)]
    pub(crate) fills: Vec<FillConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CurveConfig {
    pub(crate) name: String,
    pub(crate) min: f64,
    pub(crate) max: f64,
    #[serde(default)]
    pub(crate) scale: ScaleKind,
    #[serde(default)]
    pub(crate) inverted: bool,
    #[serde(default = "default_curve_color")]
    pub(crate) color: String,
    #[serde(default = "default_weight")]
    pub(crate) width: f64,
    #[serde(default)]
    pub(crate) symbol: SymbolConfig,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SymbolConfig {
    #[default]
    Circle,
    Square,
    Diamond,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FillConfig {
    pub(crate) curve: String,
    pub(crate) threshold: Option<f64>,
    pub(crate) against: Option<String>,
    pub(crate) when: FillPredicate,
    pub(crate) color: String,
    pub(crate) match_tolerance: Option<f64>,
}

fn default_weight() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_curve_color() -> String {
    "black".to_string()
}

/// Parses a CSS color string (`"green"`, `"#ffd70099"`, `"rgb(0 0 255 / 0.5)"`).
pub(crate) fn parse_paint(value: &str) -> Result<Color, ConfigError> {
    parse_color(value)
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|e| ConfigError::Color {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

impl TrackFile {
    /// Reads and parses a configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the track specs; an empty track list yields `None` so callers can fall back.
    pub(crate) fn tracks(&self) -> Result<Option<Vec<TrackSpec>>, ConfigError> {
        if self.tracks.is_empty() {
            return Ok(None);
        }
        self.tracks
            .iter()
            .map(TrackConfig::to_spec)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Builds the panel settings around `tracks`.
    pub(crate) fn correlation(&self, tracks: Vec<TrackSpec>) -> CorrelationSpec {
        let p = &self.panel;
        let layout = PanelLayoutSpec {
            track_width: p.track_width,
            plot_height: p.plot_height,
            ..PanelLayoutSpec::default()
        };
        let mut panel = LogPanelSpec::new(tracks)
            .with_layout(layout)
            .with_depth_tick_interval(p.depth_tick_interval)
            .with_hit_tolerance(p.hit_tolerance);
        panel.axis_title.clone_from(&p.axis_title);
        panel.show_well_name = p.show_well_name;
        CorrelationSpec::new(panel)
            .with_well_gap(p.well_gap)
            .with_tie_tops(p.tie_tops)
    }
}

impl TrackConfig {
    fn to_spec(&self) -> Result<TrackSpec, ConfigError> {
        let mut track = TrackSpec::new(self.title.clone()).with_width_weight(self.width);
        track.show_tops = self.tops;
        track.show_zones = self.zones;
        track.grid = self.grid.then(|| GridSpec {
            depth_interval: self.grid_interval,
            ..GridSpec::default()
        });

        for c in &self.curves {
            let scale = match c.scale {
                ScaleKind::Linear => ScaleConfig::linear(c.min, c.max),
                ScaleKind::Log => ScaleConfig::log(c.min, c.max),
            }
            .with_inverted(c.inverted);
            if !scale.is_valid() {
                return Err(ConfigError::Scale {
                    track: self.title.clone(),
                    curve: c.name.clone(),
                    kind: c.scale,
                    min: c.min,
                    max: c.max,
                });
            }
            let symbol = match c.symbol {
                SymbolConfig::Circle => Symbol::Circle,
                SymbolConfig::Square => Symbol::Square,
                SymbolConfig::Diamond => Symbol::Diamond,
            };
            track = track.with_curve(
                CurveSeries::new(c.name.clone(), scale)
                    .with_stroke(parse_paint(&c.color)?, c.width)
                    .with_symbol(symbol),
            );
        }

        for f in &self.fills {
            let known = |name: &str| self.curves.iter().any(|c| c.name.eq_ignore_ascii_case(name));
            let paint = parse_paint(&f.color)?;
            let mut fill = match (f.threshold, &f.against) {
                (Some(t), None) => FillSpec::threshold(f.curve.clone(), t, f.when, paint),
                (None, Some(other)) => {
                    if !known(other) {
                        return Err(ConfigError::UnknownCurve {
                            track: self.title.clone(),
                            curve: other.clone(),
                        });
                    }
                    FillSpec::between(f.curve.clone(), other.clone(), f.when, paint)
                }
                _ => {
                    return Err(ConfigError::FillReference {
                        track: self.title.clone(),
                        curve: f.curve.clone(),
                    });
                }
            };
            if !known(&f.curve) {
                return Err(ConfigError::UnknownCurve {
                    track: self.title.clone(),
                    curve: f.curve.clone(),
                });
            }
            if let Some(tol) = f.match_tolerance {
                fill = fill.with_match_tolerance(tol);
            }
            track = track.with_fill(fill);
        }
        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use logtrack_charts::FillReference;

    use super::*;

    const SAMPLE: &str = r##"
[panel]
axis_title = "MD (ft)"
depth_tick_interval = 50.0
well_gap = 32.0

[[tracks]]
title = "Gamma Ray"

[[tracks.curves]]
name = "GR"
min = 0.0
max = 150.0
color = "green"

[[tracks.fills]]
curve = "GR"
threshold = 75.0
when = "less"
color = "#ffd70099"

[[tracks]]
title = "Porosity"
width = 1.5
grid = false

[[tracks.curves]]
name = "NPHI"
min = -0.15
max = 0.45
inverted = true
color = "blue"

[[tracks.curves]]
name = "RHOB"
min = 1.95
max = 2.95
color = "red"

[[tracks.fills]]
curve = "RHOB"
against = "NPHI"
when = "less"
color = "yellow"
"##;

    #[test]
    fn parses_tracks_and_panel_settings() {
        let file: TrackFile = toml::from_str(SAMPLE).expect("valid config");
        let tracks = file.tracks().expect("valid tracks").expect("non-empty");
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].fills[0].reference, FillReference::Threshold(75.0));
        assert!(tracks[1].grid.is_none());
        assert!(tracks[1].curves[0].scale.inverted);
        assert_eq!(tracks[1].width_weight, 1.5);

        let spec = file.correlation(tracks);
        assert_eq!(spec.well_gap, 32.0);
        assert_eq!(spec.panel.axis_title.as_deref(), Some("MD (ft)"));
        assert_eq!(spec.panel.depth_tick_interval, Some(50.0));
    }

    #[test]
    fn fill_needs_exactly_one_reference() {
        let file: TrackFile = toml::from_str(
            r#"
[[tracks]]
title = "GR"
[[tracks.curves]]
name = "GR"
min = 0.0
max = 150.0
[[tracks.fills]]
curve = "GR"
when = "greater"
color = "gray"
"#,
        )
        .expect("valid toml");
        assert!(matches!(
            file.tracks(),
            Err(ConfigError::FillReference { .. })
        ));
    }

    #[test]
    fn log_scales_reject_non_positive_bounds() {
        let file: TrackFile = toml::from_str(
            r#"
[[tracks]]
title = "Resistivity"
[[tracks.curves]]
name = "ILD"
min = 0.0
max = 2000.0
scale = "log"
"#,
        )
        .expect("valid toml");
        assert!(matches!(file.tracks(), Err(ConfigError::Scale { .. })));
    }

    #[test]
    fn bad_colors_are_reported() {
        assert!(matches!(
            parse_paint("not-a-color"),
            Err(ConfigError::Color { .. })
        ));
        assert!(parse_paint("#00ff0080").is_ok());
    }

    #[test]
    fn empty_file_falls_back() {
        let file: TrackFile = toml::from_str("").expect("empty config");
        assert!(file.tracks().expect("no tracks").is_none());
    }
}
