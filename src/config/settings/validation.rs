// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{Result, RigError};

use super::Settings;

/// Keys accepted by `settings get` / `settings set`
pub const SETTING_KEYS: [&str; 6] = [
    "resolution",
    "purpose",
    "ram",
    "extra_load",
    "color",
    "show_prices",
];

impl Settings {
    /// Read a single setting as display text.
    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match key {
            "resolution" => self.defaults.resolution.to_string(),
            "purpose" => self.defaults.purpose.to_string(),
            "ram" => self.defaults.ram.to_string(),
            "extra_load" => self.defaults.extra_load.label().to_string(),
            "color" => self.display.color.to_string(),
            "show_prices" => self.display.show_prices.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Parse and store a single setting. The settings are left untouched
    /// when the value does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "resolution" => self.defaults.resolution = value.parse()?,
            "purpose" => self.defaults.purpose = value.parse()?,
            "ram" => self.defaults.ram = value.parse()?,
            "extra_load" => self.defaults.extra_load = value.parse()?,
            "color" => self.display.color = parse_bool(value)?,
            "show_prices" => self.display.show_prices = parse_bool(value)?,
            _ => return Err(unknown_key(key)),
        }
        tracing::debug!(key, value, "setting updated");
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(RigError::InvalidInput(format!(
            "Invalid boolean value '{}'",
            value
        ))),
    }
}

fn unknown_key(key: &str) -> RigError {
    RigError::Config(format!(
        "Unknown setting '{}'. Valid settings: {}",
        key,
        SETTING_KEYS.join(", ")
    ))
}
