// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for rigcalc
//!
//! Handles loading and saving settings from ~/.rigcalc/settings.json

use serde::{Deserialize, Serialize};

use crate::estimate::{ExtraLoad, Purpose, RamSize, Resolution};

mod io;
mod migration;
mod validation;

pub use validation::SETTING_KEYS;

/// Main settings structure, stored in ~/.rigcalc/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Context used when a command leaves it unspecified
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default build context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_resolution")]
    pub resolution: Resolution,

    #[serde(default = "default_purpose")]
    pub purpose: Purpose,

    #[serde(default = "default_ram")]
    pub ram: RamSize,

    #[serde(default = "default_extra_load")]
    pub extra_load: ExtraLoad,
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize text output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Include catalog prices in listings
    #[serde(default = "default_true")]
    pub show_prices: bool,
}

fn default_resolution() -> Resolution {
    Resolution::Fhd
}

fn default_purpose() -> Purpose {
    Purpose::Gaming
}

fn default_ram() -> RamSize {
    RamSize::Gb16
}

fn default_extra_load() -> ExtraLoad {
    ExtraLoad::Standard
}

fn default_true() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            purpose: default_purpose(),
            ram: default_ram(),
            extra_load: default_extra_load(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            show_prices: default_true(),
        }
    }
}
