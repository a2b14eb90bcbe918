// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings subcommands

use std::path::Path;

use crate::cli::args::{SettingsArgs, SettingsCommands};
use crate::config::Settings;
use crate::error::Result;

/// Execute the settings command against the file at `path`
pub fn execute(args: &SettingsArgs, path: &Path, settings: Settings) -> Result<()> {
    println!("{}", run(args, path, settings)?);
    Ok(())
}

/// Apply a settings subcommand and return the message to print
pub fn run(args: &SettingsArgs, path: &Path, mut settings: Settings) -> Result<String> {
    match &args.command {
        None | Some(SettingsCommands::Show) => Ok(serde_json::to_string_pretty(&settings)?),
        Some(SettingsCommands::Get { key }) => settings.get_value(key),
        Some(SettingsCommands::Set { key, value }) => {
            settings.set_value(key, value)?;
            settings.save_to(path)?;
            Ok(format!(
                "Setting '{}' updated to {}.",
                key,
                settings.get_value(key)?
            ))
        }
        Some(SettingsCommands::Reset) => {
            Settings::default().save_to_clean(path)?;
            tracing::info!(path = %path.display(), "settings reset");
            Ok("Settings reset to defaults.".to_string())
        }
    }
}
