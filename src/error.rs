// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for rigcalc
//!
//! The estimators themselves never fail: an unresolved id simply yields no
//! result. These errors exist for the layers around them (selection checks,
//! settings I/O, CLI input parsing).

use thiserror::Error;

use crate::hardware::ComponentKind;

/// Main error type for rigcalc operations
#[derive(Error, Debug)]
pub enum RigError {
    /// A CPU/GPU id has no entry in the catalog
    #[error("Unknown {kind}: {id}")]
    UnknownComponent { kind: ComponentKind, id: String },

    /// A game id has no entry in the game table
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// A required field of the build selection was never chosen
    #[error("Incomplete selection: no {0} selected")]
    IncompleteSelection(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for rigcalc operations
pub type Result<T> = std::result::Result<T, RigError>;
