// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bounds for user-entered quantities.
//!
//! The calculator accepts any number; the ranges here are where the CLI
//! stops the user, matching the sliders of the web form.

use footprint_engine::UsageInput;

/// Daily commute distance, km
pub const DISTANCE_RANGE: (f64, f64) = (0.0, 100.0);
/// Monthly electricity use, kWh
pub const ELECTRICITY_RANGE: (f64, f64) = (0.0, 1000.0);
/// Weekly household waste, kg
pub const WASTE_RANGE: (f64, f64) = (0.0, 100.0);

fn parse_in_range(s: &str, (min, max): (f64, f64)) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if !value.is_finite() || value < min || value > max {
        return Err(format!("{value} is outside {min}..={max}"));
    }
    Ok(value)
}

pub fn parse_distance(s: &str) -> Result<f64, String> {
    parse_in_range(s, DISTANCE_RANGE)
}

pub fn parse_electricity(s: &str) -> Result<f64, String> {
    parse_in_range(s, ELECTRICITY_RANGE)
}

pub fn parse_waste(s: &str) -> Result<f64, String> {
    parse_in_range(s, WASTE_RANGE)
}

/// Assemble a calculation request from already-bounded CLI values.
pub fn collect(
    region: &str,
    distance: f64,
    electricity: f64,
    waste: f64,
    meals: u32,
) -> UsageInput {
    UsageInput {
        region: region.to_string(),
        daily_distance_km: distance,
        monthly_electricity_kwh: electricity,
        weekly_waste_kg: waste,
        meals_per_day: f64::from(meals),
    }
}
