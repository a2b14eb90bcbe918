// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for rigcalc
//!
//! Handles loading, saving, and editing user settings.

pub mod settings;

pub use settings::*;
