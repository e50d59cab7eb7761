// ABOUTME: Division-guarded arithmetic helpers for nutrition ratios
// ABOUTME: Every divide against a possibly-zero denominator goes through here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Divide `numerator` by `denominator`, returning 0 when the denominator is
/// zero or when either operand (or the quotient) is not finite.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Percentage of `part` in `whole` (0 when `whole` is zero)
#[must_use]
pub fn safe_percent(part: f64, whole: f64) -> f64 {
    safe_ratio(part, whole) * 100.0
}

/// Arithmetic mean, 0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    safe_ratio(values.iter().sum(), values.len() as f64)
}
