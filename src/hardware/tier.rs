// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Market tier classification for CPUs and GPUs

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Market tier of a component.
///
/// Tiers are assigned by hand alongside the benchmark score and are not
/// derived from it, so a high-end part can score below a mid-range one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Budget parts for office and light gaming builds
    EntryLevel,
    /// Mainstream gaming parts
    MidRange,
    /// Upper-mainstream gaming parts
    HighEnd,
    /// Flagship parts
    Enthusiast,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 4] = [
        Tier::EntryLevel,
        Tier::MidRange,
        Tier::HighEnd,
        Tier::Enthusiast,
    ];

    /// Stable label used in output and on the command line
    pub fn label(&self) -> &'static str {
        match self {
            Tier::EntryLevel => "entry-level",
            Tier::MidRange => "mid-range",
            Tier::HighEnd => "high-end",
            Tier::Enthusiast => "enthusiast",
        }
    }

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            Tier::EntryLevel => "Entry-level (office, esports at low settings)",
            Tier::MidRange => "Mid-range (1080p gaming)",
            Tier::HighEnd => "High-end (1440p gaming, streaming)",
            Tier::Enthusiast => "Enthusiast (4K gaming, heavy workstation loads)",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tier {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "entrylevel" | "entry" | "budget" => Ok(Tier::EntryLevel),
            "midrange" | "mid" => Ok(Tier::MidRange),
            "highend" | "high" => Ok(Tier::HighEnd),
            "enthusiast" | "flagship" => Ok(Tier::Enthusiast),
            _ => Err(RigError::InvalidInput(format!(
                "Invalid tier '{}'. Valid tiers: entry-level, mid-range, high-end, enthusiast",
                s
            ))),
        }
    }
}
