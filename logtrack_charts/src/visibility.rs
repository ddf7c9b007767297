// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series and track visibility toggles.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashSet;

/// Which curves and tracks the user has toggled off.
///
/// Everything is visible by default. Curve names compare ASCII case-insensitively, matching
/// [`crate::Well::curve`]; track titles compare exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesVisibility {
    hidden_curves: HashSet<String>,
    hidden_tracks: HashSet<String>,
}

impl SeriesVisibility {
    /// Creates a visibility set with everything shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` unless `curve` was hidden.
    pub fn is_curve_visible(&self, curve: &str) -> bool {
        !self.hidden_curves.contains(&curve.to_ascii_uppercase())
    }

    /// Shows or hides a curve in every track and well.
    pub fn set_curve_visible(&mut self, curve: &str, visible: bool) {
        let key = curve.to_ascii_uppercase();
        if visible {
            self.hidden_curves.remove(&key);
        } else {
            self.hidden_curves.insert(key);
        }
    }

    /// Flips a curve's visibility and returns the new state.
    pub fn toggle_curve(&mut self, curve: &str) -> bool {
        let visible = !self.is_curve_visible(curve);
        self.set_curve_visible(curve, visible);
        visible
    }

    /// Returns `true` unless the track titled `title` was hidden.
    pub fn is_track_visible(&self, title: &str) -> bool {
        !self.hidden_tracks.contains(title)
    }

    /// Shows or hides a whole track.
    pub fn set_track_visible(&mut self, title: &str, visible: bool) {
        if visible {
            self.hidden_tracks.remove(title);
        } else {
            self.hidden_tracks.insert(String::from(title));
        }
    }

    /// Flips a track's visibility and returns the new state.
    pub fn toggle_track(&mut self, title: &str) -> bool {
        let visible = !self.is_track_visible(title);
        self.set_track_visible(title, visible);
        visible
    }

    /// Shows everything again.
    pub fn show_all(&mut self) {
        self.hidden_curves.clear();
        self.hidden_tracks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_toggle_case_insensitively() {
        let mut v = SeriesVisibility::new();
        assert!(v.is_curve_visible("GR"));
        assert!(!v.toggle_curve("gr"));
        assert!(!v.is_curve_visible("GR"));
        assert!(v.toggle_curve("Gr"));
        assert!(v.is_curve_visible("gr"));
    }

    #[test]
    fn tracks_toggle_by_title() {
        let mut v = SeriesVisibility::new();
        v.set_track_visible("Resistivity", false);
        assert!(!v.is_track_visible("Resistivity"));
        assert!(v.is_track_visible("Gamma Ray"));
        v.show_all();
        assert!(v.is_track_visible("Resistivity"));
    }
}
