// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each calculator command builds a [`BuildSelection`](crate::selection::BuildSelection)
//! from the saved defaults and its flags, then renders the result as text,
//! JSON or markdown.

pub mod bottleneck;
pub mod fps;
pub mod list;
pub(crate) mod output;
pub mod psu;
pub mod settings;
