// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # Footprint Metrics
//!
//! Core data types for personal carbon footprint estimates: the emission
//! categories, the reporting periods user quantities arrive in, carbon mass,
//! and the per-category result handed to presenters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Kilograms per tonne
pub const KG_PER_TONNE: f64 = 1000.0;

/// Emission source category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Daily commute, factor per km
    Transportation,
    /// Grid electricity, factor per kWh
    Electricity,
    /// Meals eaten, factor per meal
    Diet,
    /// Household waste, factor per kg
    Waste,
}

impl Category {
    /// All categories in presentation order
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Transportation => "🚗",
            Category::Electricity => "💡",
            Category::Diet => "🍽️",
            Category::Waste => "🗑️",
        }
    }

    /// Unit the emission factor is expressed against (kgCO2 per unit)
    pub fn unit(self) -> &'static str {
        match self {
            Category::Transportation => "km",
            Category::Electricity => "kWh",
            Category::Diet => "meal",
            Category::Waste => "kg",
        }
    }

    /// Period the raw user quantity for this category is reported in
    pub fn input_period(self) -> Period {
        match self {
            Category::Transportation => Period::Daily,
            Category::Electricity => Period::Monthly,
            Category::Diet => Period::Daily,
            Category::Waste => Period::Weekly,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reporting period of a raw usage quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Number of periods in one year
    pub fn per_year(self) -> f64 {
        match self {
            Period::Daily => 365.0,
            Period::Weekly => 52.0,
            Period::Monthly => 12.0,
        }
    }

    /// Convert a per-period quantity into its yearly equivalent.
    ///
    /// Plain multiplication: zero stays zero and negative values pass through.
    pub fn annualize(self, quantity: f64) -> f64 {
        quantity * self.per_year()
    }
}

/// Carbon emissions in kilograms of CO2
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Carbon(pub f64);

impl Carbon {
    pub const ZERO: Self = Carbon(0.0);

    pub fn kilograms(kg: f64) -> Self {
        Carbon(kg)
    }

    /// Unrounded mass in tonnes
    pub fn as_tonnes(self) -> f64 {
        self.0 / KG_PER_TONNE
    }
}

impl Add for Carbon {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Carbon(self.0 + rhs.0)
    }
}

impl Mul<f64> for Carbon {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Carbon(self.0 * rhs)
    }
}

/// Round to two decimal places, ties away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Annual emissions by category, in tonnes CO2 per year.
///
/// Every category value is rounded to two decimals on its own, and
/// `total_tonnes` is the rounded sum of those already-rounded values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub transportation_tonnes: f64,
    pub electricity_tonnes: f64,
    pub diet_tonnes: f64,
    pub waste_tonnes: f64,
    pub total_tonnes: f64,
}

impl EmissionResult {
    /// Build a result from raw per-category emissions.
    pub fn from_emissions(
        transportation: Carbon,
        electricity: Carbon,
        diet: Carbon,
        waste: Carbon,
    ) -> Self {
        let transportation_tonnes = round_to_cents(transportation.as_tonnes());
        let electricity_tonnes = round_to_cents(electricity.as_tonnes());
        let diet_tonnes = round_to_cents(diet.as_tonnes());
        let waste_tonnes = round_to_cents(waste.as_tonnes());

        let total_tonnes = round_to_cents(
            transportation_tonnes + electricity_tonnes + diet_tonnes + waste_tonnes,
        );

        EmissionResult {
            transportation_tonnes,
            electricity_tonnes,
            diet_tonnes,
            waste_tonnes,
            total_tonnes,
        }
    }

    pub fn zero() -> Self {
        Self::from_emissions(Carbon::ZERO, Carbon::ZERO, Carbon::ZERO, Carbon::ZERO)
    }

    pub fn tonnes(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation_tonnes,
            Category::Electricity => self.electricity_tonnes,
            Category::Diet => self.diet_tonnes,
            Category::Waste => self.waste_tonnes,
        }
    }

    /// Category values in presentation order
    pub fn breakdown(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|c| (c, self.tonnes(c)))
    }

    /// Category with the largest emissions; the first one wins ties.
    pub fn largest(&self) -> (Category, f64) {
        self.breakdown()
            .into_iter()
            .fold((Category::Transportation, f64::MIN), |best, cur| {
                if cur.1 > best.1 {
                    cur
                } else {
                    best
                }
            })
    }
}
