// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Well data model.
//!
//! A [`Well`] owns named [`Curve`]s sampled over one depth section. Samples carry no depth of
//! their own: they are assumed to be uniformly spaced across [`Well::depth_range`] (see
//! [`crate::sample_depth`]).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Conventional "no measurement" sentinel used by LAS files.
pub const DEFAULT_NULL_VALUE: f64 = -999.25;

/// An inclusive depth interval.
///
/// A range is *valid* when both ends are finite and `min < max`. Invalid ranges are a
/// no-render condition, never a panic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct DepthRange {
    /// Shallow end.
    pub min: f64,
    /// Deep end.
    pub max: f64,
}

impl DepthRange {
    /// Creates a range; no validation is performed.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if both ends are finite and `min < max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `depth` lies within the inclusive interval.
    pub fn contains(&self, depth: f64) -> bool {
        depth >= self.min && depth <= self.max
    }

    /// Returns the overlap of two ranges, if it is itself a valid range.
    pub fn intersect(&self, other: Self) -> Option<Self> {
        let r = Self::new(self.min.max(other.min), self.max.min(other.max));
        r.is_valid().then_some(r)
    }

    /// Returns the smallest range covering both ranges.
    pub fn union(&self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }
}

impl From<[f64; 2]> for DepthRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<DepthRange> for [f64; 2] {
    fn from(r: DepthRange) -> Self {
        [r.min, r.max]
    }
}

/// A named, unit-tagged series of samples.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Curve {
    /// Mnemonic, e.g. `GR`.
    pub name: String,
    /// Unit label, e.g. `API`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: String,
    /// Samples in depth order. JSON `null` entries load as NaN.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_samples"))]
    pub data: Vec<f64>,
    /// Sentinel meaning "no measurement".
    #[cfg_attr(feature = "serde", serde(default = "default_null_value"))]
    pub null_value: f64,
}

impl Curve {
    /// Creates a curve using [`DEFAULT_NULL_VALUE`].
    pub fn new(name: impl Into<String>, unit: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            data,
            null_value: DEFAULT_NULL_VALUE,
        }
    }

    /// Sets the null sentinel.
    pub fn with_null_value(mut self, null_value: f64) -> Self {
        self.null_value = null_value;
        self
    }

    /// Returns `true` if `value` is a real measurement.
    pub fn is_present(&self, value: f64) -> bool {
        value.is_finite() && value != self.null_value
    }

    /// Returns the `(min, max)` of the present samples, if any.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| self.is_present(*v))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// A named marker depth (formation top, marker bed).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormationTop {
    /// Marker name; tops with equal names are correlated across wells.
    pub name: String,
    /// Marker depth.
    pub depth: f64,
}

/// A named depth interval, such as a completion target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    /// Zone name.
    pub name: String,
    /// Shallow boundary.
    pub top: f64,
    /// Deep boundary.
    pub base: f64,
}

/// One well: curves sampled over a common depth section, plus optional markers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Well {
    /// Well identifier reported by hit tests.
    pub well_name: String,
    /// Curves sampled over `depth_range`.
    pub curves: Vec<Curve>,
    /// The section the samples span, `[start, end]`.
    pub depth_range: DepthRange,
    /// Formation tops.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tops: Vec<FormationTop>,
    /// Shaded intervals (completion targets).
    #[cfg_attr(feature = "serde", serde(default))]
    pub zones: Vec<Zone>,
}

impl Well {
    /// Creates a well with no curves.
    pub fn new(well_name: impl Into<String>, depth_range: DepthRange) -> Self {
        Self {
            well_name: well_name.into(),
            curves: Vec::new(),
            depth_range,
            tops: Vec::new(),
            zones: Vec::new(),
        }
    }

    /// Adds a curve.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }

    /// Adds a formation top.
    pub fn with_top(mut self, name: impl Into<String>, depth: f64) -> Self {
        self.tops.push(FormationTop {
            name: name.into(),
            depth,
        });
        self
    }

    /// Adds a zone.
    pub fn with_zone(mut self, name: impl Into<String>, top: f64, base: f64) -> Self {
        self.zones.push(Zone {
            name: name.into(),
            top,
            base,
        });
        self
    }

    /// Looks up a curve by mnemonic (ASCII case-insensitive).
    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Reports data problems. Rendering tolerates all of them by omission.
    pub fn validate(&self) -> Vec<DataError> {
        let mut out = Vec::new();
        // A point section is fine while no curve needs spacing between samples.
        let point_section = self.depth_range.min.is_finite()
            && self.curves.iter().all(|c| c.data.len() <= 1);
        if !self.depth_range.is_valid() && !point_section {
            out.push(DataError::DegenerateRange {
                well: self.well_name.clone(),
                min: self.depth_range.min,
                max: self.depth_range.max,
            });
        }
        for (i, c) in self.curves.iter().enumerate() {
            if c.data.is_empty() {
                out.push(DataError::EmptyCurve {
                    well: self.well_name.clone(),
                    curve: c.name.clone(),
                });
            }
            if self.curves[..i]
                .iter()
                .any(|prev| prev.name.eq_ignore_ascii_case(&c.name))
            {
                out.push(DataError::DuplicateCurve {
                    well: self.well_name.clone(),
                    curve: c.name.clone(),
                });
            }
        }
        for z in &self.zones {
            if z.top > z.base {
                out.push(DataError::InvertedZone {
                    well: self.well_name.clone(),
                    zone: z.name.clone(),
                });
            }
        }
        out
    }
}

/// Problems found by [`Well::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DataError {
    /// The well section is not a valid range.
    #[error("well `{well}` has a degenerate depth range [{min}, {max}]")]
    DegenerateRange {
        /// Well name.
        well: String,
        /// Section start.
        min: f64,
        /// Section end.
        max: f64,
    },
    /// A curve has no samples.
    #[error("curve `{curve}` in well `{well}` has no samples")]
    EmptyCurve {
        /// Well name.
        well: String,
        /// Curve name.
        curve: String,
    },
    /// Two curves share a mnemonic; lookups return the first.
    #[error("curve `{curve}` appears more than once in well `{well}`")]
    DuplicateCurve {
        /// Well name.
        well: String,
        /// Curve name.
        curve: String,
    },
    /// A zone's top lies below its base.
    #[error("zone `{zone}` in well `{well}` has its top below its base")]
    InvertedZone {
        /// Well name.
        well: String,
        /// Zone name.
        zone: String,
    },
}

#[cfg(feature = "serde")]
fn default_null_value() -> f64 {
    DEFAULT_NULL_VALUE
}

#[cfg(feature = "serde")]
fn deserialize_samples<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<Option<f64>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}
