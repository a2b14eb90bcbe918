// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Shared rendering helpers for command output

use crossterm::style::{style, Color, Stylize};
use serde::Serialize;

use crate::cli::args::{ComponentArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::selection::BuildSelection;

/// Color `text` when coloring is enabled
pub(crate) fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

/// Pretty JSON for the `--format json` path
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Whether text output should be colored for this invocation
pub(crate) fn color_enabled(format: &OutputFormat, settings: &Settings) -> bool {
    matches!(format, OutputFormat::Text) && settings.display.color
}

/// Start a selection from saved defaults plus the CPU/GPU flags
pub(crate) fn selection_from(components: &ComponentArgs, settings: &Settings) -> BuildSelection {
    BuildSelection {
        cpu_id: components.cpu.clone(),
        gpu_id: components.gpu.clone(),
        ..BuildSelection::from_defaults(&settings.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint("ok", Color::Green, false), "ok");
    }

    #[test]
    fn test_paint_enabled_adds_escape_codes() {
        let painted = paint("ok", Color::Green, true);
        assert!(painted.contains("ok"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn test_color_only_for_text() {
        let settings = Settings::default();
        assert!(color_enabled(&OutputFormat::Text, &settings));
        assert!(!color_enabled(&OutputFormat::Json, &settings));
        assert!(!color_enabled(&OutputFormat::Markdown, &settings));

        let mut plain = Settings::default();
        plain.display.color = false;
        assert!(!color_enabled(&OutputFormat::Text, &plain));
    }

    #[test]
    fn test_selection_from_uses_defaults() {
        let mut settings = Settings::default();
        settings.set_value("resolution", "1440p").unwrap();
        let args = ComponentArgs {
            cpu: Some("i5-13600k".to_string()),
            gpu: None,
        };
        let sel = selection_from(&args, &settings);
        assert_eq!(sel.cpu_id.as_deref(), Some("i5-13600k"));
        assert!(sel.gpu_id.is_none());
        assert_eq!(sel.resolution, settings.defaults.resolution);
    }
}
