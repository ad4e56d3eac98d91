// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for footprint-engine

use thiserror::Error;

/// The requested region has no entry in the factor table.
///
/// This is the only way a calculation can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region: {region}")]
pub struct UnknownRegionError {
    pub region: String,
}

/// Main error type for footprint-engine
#[derive(Error, Debug)]
pub enum FootprintError {
    #[error(transparent)]
    UnknownRegion(#[from] UnknownRegionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid emission factor: {0}")]
    InvalidFactor(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FootprintError>;
