// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using just enough decimals to distinguish ticks `step` apart.
///
/// A `step` of `0` (unknown) formats with up to three decimals and trims trailing zeros.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    let decimals = if step > 0.0 && step.is_finite() {
        decimals_for_step(step)
    } else {
        3
    };
    let mut s = format!("{v:.decimals$}");
    if step <= 0.0 && s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s.remove(0);
    }
    s
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 {
        return 0;
    }
    let d = (-step.log10()).ceil().clamp(0.0, 6.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=6")]
    {
        d as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_steps_drop_decimals() {
        assert_eq!(format_tick_with_step(1500.0, 50.0), "1500");
        assert_eq!(format_tick_with_step(75.0, 25.0), "75");
    }

    #[test]
    fn fractional_steps_keep_enough_decimals() {
        assert_eq!(format_tick_with_step(0.15, 0.05), "0.15");
        assert_eq!(format_tick_with_step(2.5, 0.5), "2.5");
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_tick_with_step(-0.0001, 0.1), "0.0");
        assert_eq!(format_tick_with_step(-0.0, 0.0), "0");
    }

    #[test]
    fn unknown_step_trims_trailing_zeros() {
        assert_eq!(format_tick_with_step(0.2, 0.0), "0.2");
        assert_eq!(format_tick_with_step(2000.0, 0.0), "2000");
    }
}
