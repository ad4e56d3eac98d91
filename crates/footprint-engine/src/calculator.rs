// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! Annual emission calculation.
//!
//! Raw quantities are annualized (365 days, 12 months, 52 weeks), multiplied
//! by the region's factor, converted to tonnes and rounded to two decimals
//! per category. The total is the rounded sum of the rounded categories.
//!
//! Inputs are not validated here. Negative quantities propagate through the
//! arithmetic; bounding them is the caller's job.

use crate::error::UnknownRegionError;
use crate::factors::{FactorTable, DEFAULT_REGION};
use footprint_metrics::{Carbon, Category, EmissionResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw usage quantities for one calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageInput {
    pub region: String,
    pub daily_distance_km: f64,
    pub monthly_electricity_kwh: f64,
    pub weekly_waste_kg: f64,
    pub meals_per_day: f64,
}

impl Default for UsageInput {
    fn default() -> Self {
        UsageInput {
            region: DEFAULT_REGION.to_string(),
            daily_distance_km: 0.0,
            monthly_electricity_kwh: 0.0,
            weekly_waste_kg: 0.0,
            meals_per_day: 0.0,
        }
    }
}

impl UsageInput {
    /// Raw quantity as entered, in the category's input period
    pub fn raw_quantity(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.daily_distance_km,
            Category::Electricity => self.monthly_electricity_kwh,
            Category::Diet => self.meals_per_day,
            Category::Waste => self.weekly_waste_kg,
        }
    }

    /// Yearly equivalent of the raw quantity
    pub fn annual_quantity(&self, category: Category) -> f64 {
        category
            .input_period()
            .annualize(self.raw_quantity(category))
    }
}

/// Unrounded annual emissions per category, in presentation order.
pub fn annual_emissions(
    input: &UsageInput,
    table: &FactorTable,
) -> Result<[(Category, Carbon); 4], UnknownRegionError> {
    let factors = table.get(&input.region)?;
    Ok(Category::ALL.map(|category| {
        let kg = factors.factor(category) * input.annual_quantity(category);
        (category, Carbon::kilograms(kg))
    }))
}

/// Compute the rounded per-category and total emissions for `input`.
pub fn calculate(
    input: &UsageInput,
    table: &FactorTable,
) -> Result<EmissionResult, UnknownRegionError> {
    let [(_, transportation), (_, electricity), (_, diet), (_, waste)] =
        annual_emissions(input, table)?;

    let result = EmissionResult::from_emissions(transportation, electricity, diet, waste);
    debug!(
        region = %input.region,
        total_tonnes = result.total_tonnes,
        "Calculated annual footprint"
    );
    Ok(result)
}

/// Positional form of [`calculate`].
pub fn calculate_for(
    region: &str,
    daily_distance_km: f64,
    monthly_electricity_kwh: f64,
    weekly_waste_kg: f64,
    meals_per_day: f64,
    table: &FactorTable,
) -> Result<EmissionResult, UnknownRegionError> {
    let input = UsageInput {
        region: region.to_string(),
        daily_distance_km,
        monthly_electricity_kwh,
        weekly_waste_kg,
        meals_per_day,
    };
    calculate(&input, table)
}
