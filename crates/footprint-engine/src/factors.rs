// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Region-keyed emission factor tables.
//!
//! A table is immutable configuration: it is built once (from the shipped
//! defaults or a TOML file) and then only read by the calculator.
//!
//! ```toml
//! [regions.Pakistan]
//! transportation = 0.14
//! electricity = 0.82
//! diet = 1.25
//! waste = 0.1
//! ```

use crate::error::{FootprintError, Result, UnknownRegionError};
use footprint_metrics::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Region shipped with the built-in table
pub const DEFAULT_REGION: &str = "Pakistan";

/// Emission factors for one region, in kgCO2 per category unit.
///
/// All four fields are required, so a region entry that leaves out a
/// category is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionFactors {
    /// kgCO2 per km
    pub transportation: f64,
    /// kgCO2 per kWh
    pub electricity: f64,
    /// kgCO2 per meal
    pub diet: f64,
    /// kgCO2 per kg of waste
    pub waste: f64,
}

impl RegionFactors {
    pub fn factor(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    fn pakistan() -> Self {
        RegionFactors {
            transportation: 0.14,
            electricity: 0.82,
            diet: 1.25,
            waste: 0.1,
        }
    }
}

/// Mapping from region name to its emission factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    regions: BTreeMap<String, RegionFactors>,
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FactorTable {
    /// An empty table; every lookup fails until regions are inserted.
    pub fn empty() -> Self {
        FactorTable {
            regions: BTreeMap::new(),
        }
    }

    /// The shipped table with a single Pakistan entry.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(DEFAULT_REGION, RegionFactors::pakistan());
        table
    }

    /// Add or replace a region.
    pub fn insert(&mut self, region: impl Into<String>, factors: RegionFactors) {
        self.regions.insert(region.into(), factors);
    }

    pub fn with_region(mut self, region: impl Into<String>, factors: RegionFactors) -> Self {
        self.insert(region, factors);
        self
    }

    /// Look up a region. Names are matched exactly.
    pub fn get(&self, region: &str) -> std::result::Result<&RegionFactors, UnknownRegionError> {
        self.regions.get(region).ok_or_else(|| UnknownRegionError {
            region: region.to_string(),
        })
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Region names in sorted order
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionFactors)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Check that every factor is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(FootprintError::Config("factor table defines no regions".to_string()));
        }
        for (region, factors) in &self.regions {
            for category in Category::ALL {
                let value = factors.factor(category);
                if !value.is_finite() || value < 0.0 {
                    return Err(FootprintError::InvalidFactor(format!(
                        "{region}/{category}: {value}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: FactorTable = toml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), regions = table.len(), "Loaded factor table");
        Ok(table)
    }

    /// Load from `path` when given, otherwise use the built-in table.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                debug!("No factor file given, using built-in table");
                Ok(Self::builtin())
            }
        }
    }
}

/// Default location for a user factor table
pub fn default_factors_path() -> PathBuf {
    PathBuf::from("footprint-factors.toml")
}

/// Write the built-in table to a file as TOML.
pub fn write_default_factors(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = FactorTable::builtin().to_toml_string()?;
    std::fs::write(path, content)?;
    Ok(())
}
