// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware and game lookup tables
//!
//! Everything here is compiled into the binary and never mutated.

pub mod catalog;
pub mod component;
pub mod games;
pub mod tier;

pub use catalog::*;
pub use component::*;
pub use games::*;
pub use tier::*;
