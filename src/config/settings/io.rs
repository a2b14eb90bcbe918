// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::migration;
use super::Settings;

impl Settings {
    /// `settings.json` under [`Settings::home_dir`].
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("settings.json")
    }

    /// `$RIGCALC_HOME`, else `~/.rigcalc`.
    pub fn home_dir() -> PathBuf {
        match std::env::var_os("RIGCALC_HOME") {
            Some(home) => PathBuf::from(home),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rigcalc"),
        }
    }

    /// A missing file yields defaults; an unreadable one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let settings = serde_json::from_value(migration::migrate_on_load(raw))?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Write over the existing file, keeping keys rigcalc does not know.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let ours = serde_json::to_value(self)?;
        let merged = match read_existing(path)? {
            Some(existing) => migration::deep_merge(existing, ours),
            None => ours,
        };
        write_json(path, &merged)
    }

    /// Write the file from scratch.
    pub fn save_to_clean(&self, path: &Path) -> Result<()> {
        write_json(path, &serde_json::to_value(self)?)
    }
}

fn read_existing(path: &Path) -> Result<Option<serde_json::Value>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "overwriting unparseable settings file");
            Ok(None)
        }
    }
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{Purpose, Resolution};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.defaults.resolution = Resolution::Uhd;
        settings.defaults.purpose = Purpose::Streaming;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"custom": {"keep": true}, "display": {"color": false}}"#)
            .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.display.color);
        settings.save_to(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["custom"]["keep"], true);
        assert_eq!(raw["display"]["color"], false);
    }

    #[test]
    fn test_save_clean_drops_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"custom": 1}"#).unwrap();

        Settings::default().save_to_clean(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get("custom").is_none());
    }

    #[test]
    fn test_save_overwrites_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{corrupt").unwrap();

        Settings::default().save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{corrupt").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(Settings::default_path().ends_with("settings.json"));
    }
}
