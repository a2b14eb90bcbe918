// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigcalc - PC build calculators for the terminal.
//!
//! Three estimators run over a static hardware catalog:
//! - `bottleneck`: which of the CPU or GPU limits a build, and by how much
//! - `fps`: expected frame rate for a game at a given resolution
//! - `psu`: power supply sizing with headroom tiers
//!
//! Architecture highlights:
//! - `hardware`: CPU/GPU/game tables and lookups
//! - `estimate`: the calculators and their modifiers
//! - `selection`: the user's current build and id resolution
//! - `config`: persisted defaults in `~/.rigcalc/settings.json`
//! - `cli`, `commands`: argument parsing and output rendering

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod estimate;
pub mod hardware;
pub mod selection;

pub use error::{Result, RigError};
pub use estimate::{estimate_bottleneck, estimate_fps, estimate_psu};
pub use hardware::lookup_component;
pub use selection::BuildSelection;
