// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # Footprint Engine
//!
//! Converts daily, weekly and monthly lifestyle quantities into annual
//! CO2 emissions per category, using a region-keyed factor table.

pub mod calculator;
pub mod error;
pub mod factors;

pub use calculator::{annual_emissions, calculate, calculate_for, UsageInput};
pub use error::{FootprintError, Result, UnknownRegionError};
pub use factors::{FactorTable, RegionFactors, DEFAULT_REGION};
pub use footprint_metrics::{Category, EmissionResult};
