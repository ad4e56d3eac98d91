// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

//! # Footprint CLI
//!
//! Input collection and result presentation for the `footprint` binary.

pub mod input;
pub mod report;
