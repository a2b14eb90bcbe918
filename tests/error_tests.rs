// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;

use rigcalc::error::RigError;
use rigcalc::hardware::ComponentKind;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let rig_error: RigError = io_error.into();

    match rig_error {
        RigError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let rig_error: RigError = json_error.into();
    assert!(matches!(rig_error, RigError::Json(_)));
    assert!(rig_error.to_string().starts_with("JSON error:"));
}

#[test]
fn test_unknown_component_display() {
    let error = RigError::UnknownComponent {
        kind: ComponentKind::Gpu,
        id: "voodoo-5".to_string(),
    };
    assert_eq!(error.to_string(), "Unknown GPU: voodoo-5");
}

#[test]
fn test_unknown_game_display() {
    let error = RigError::UnknownGame("half-life-3".to_string());
    assert_eq!(error.to_string(), "Unknown game: half-life-3");
}

#[test]
fn test_incomplete_selection_display() {
    let error = RigError::IncompleteSelection("cpu".to_string());
    assert_eq!(error.to_string(), "Incomplete selection: no cpu selected");
}

#[test]
fn test_config_error_display() {
    let error = RigError::Config("Unknown setting 'theme'".to_string());
    assert_eq!(error.to_string(), "Configuration error: Unknown setting 'theme'");
}

#[test]
fn test_invalid_input_from_parse() {
    let error = "720p".parse::<rigcalc::estimate::Resolution>().unwrap_err();
    assert!(matches!(error, RigError::InvalidInput(_)));
}
