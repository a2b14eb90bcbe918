// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Estimators
//!
//! Pure functions over the hardware tables. Each comes in three layers: raw
//! scores, resolved catalog entries, and catalog ids. Only the id layer can
//! fail, and it does so by returning `None`.

pub mod bottleneck;
pub mod fps;
pub mod modifiers;
pub mod psu;

pub use bottleneck::*;
pub use fps::*;
pub use modifiers::*;
pub use psu::*;
