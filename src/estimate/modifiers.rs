// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Usage-context modifier tables
//!
//! Each table maps one piece of build context to a multiplicative factor
//! applied to a component's raw benchmark score.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Target display resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1080p", alias = "fhd")]
    Fhd,
    #[serde(rename = "1440p", alias = "qhd")]
    Qhd,
    #[serde(rename = "4K", alias = "4k", alias = "2160p", alias = "uhd")]
    Uhd,
}

impl Resolution {
    /// All resolutions, lowest pixel count first
    pub const ALL: [Resolution; 3] = [Resolution::Fhd, Resolution::Qhd, Resolution::Uhd];

    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Fhd => "1080p",
            Resolution::Qhd => "1440p",
            Resolution::Uhd => "4K",
        }
    }

    /// Factor applied to the GPU score in the bottleneck estimate
    pub fn gpu_modifier(&self) -> f64 {
        match self {
            Resolution::Fhd => 1.0,
            Resolution::Qhd => 0.85,
            Resolution::Uhd => 0.7,
        }
    }

    /// Expected frame-rate scaling from pixel count alone
    pub fn fps_multiplier(&self) -> f64 {
        match self {
            Resolution::Fhd => 1.2,
            Resolution::Qhd => 1.0,
            Resolution::Uhd => 0.7,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Resolution {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1080p" | "1080" | "fhd" => Ok(Resolution::Fhd),
            "1440p" | "1440" | "qhd" => Ok(Resolution::Qhd),
            "4k" | "2160p" | "2160" | "uhd" => Ok(Resolution::Uhd),
            _ => Err(RigError::InvalidInput(format!(
                "Invalid resolution '{}'. Valid resolutions: 1080p, 1440p, 4K",
                s
            ))),
        }
    }
}

/// What the build is mainly used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Gaming,
    Streaming,
    Productivity,
    General,
}

/// Pair of score factors for one purpose
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PurposeModifier {
    pub cpu: f64,
    pub gpu: f64,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [
        Purpose::Gaming,
        Purpose::Streaming,
        Purpose::Productivity,
        Purpose::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Gaming => "gaming",
            Purpose::Streaming => "streaming",
            Purpose::Productivity => "productivity",
            Purpose::General => "general",
        }
    }

    pub fn modifier(&self) -> PurposeModifier {
        let (cpu, gpu) = match self {
            Purpose::Gaming => (0.9, 1.1),
            Purpose::Streaming => (1.05, 1.0),
            Purpose::Productivity => (1.1, 0.9),
            Purpose::General => (1.0, 1.0),
        };
        PurposeModifier { cpu, gpu }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Purpose {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaming" | "games" => Ok(Purpose::Gaming),
            "streaming" | "stream" => Ok(Purpose::Streaming),
            "productivity" | "workstation" | "work" => Ok(Purpose::Productivity),
            "general" | "office" => Ok(Purpose::General),
            _ => Err(RigError::InvalidInput(format!(
                "Invalid purpose '{}'. Valid purposes: gaming, streaming, productivity, general",
                s
            ))),
        }
    }
}

/// Installed system memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RamSize {
    Gb8,
    Gb16,
    Gb32,
    Gb64,
}

impl RamSize {
    pub const ALL: [RamSize; 4] = [RamSize::Gb8, RamSize::Gb16, RamSize::Gb32, RamSize::Gb64];

    pub fn gigabytes(&self) -> u32 {
        match self {
            RamSize::Gb8 => 8,
            RamSize::Gb16 => 16,
            RamSize::Gb32 => 32,
            RamSize::Gb64 => 64,
        }
    }

    /// Factor applied to the CPU score in the bottleneck estimate
    pub fn modifier(&self) -> f64 {
        match self {
            RamSize::Gb8 => 0.85,
            RamSize::Gb16 => 1.0,
            RamSize::Gb32 => 1.05,
            RamSize::Gb64 => 1.08,
        }
    }
}

impl TryFrom<u32> for RamSize {
    type Error = RigError;

    fn try_from(gb: u32) -> Result<Self, Self::Error> {
        RamSize::ALL
            .into_iter()
            .find(|r| r.gigabytes() == gb)
            .ok_or_else(|| {
                RigError::InvalidInput(format!(
                    "Invalid RAM size '{}'. Valid sizes: 8, 16, 32, 64",
                    gb
                ))
            })
    }
}

impl From<RamSize> for u32 {
    fn from(ram: RamSize) -> Self {
        ram.gigabytes()
    }
}

impl std::fmt::Display for RamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}GB", self.gigabytes())
    }
}

impl FromStr for RamSize {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches(|c: char| c.is_alphabetic()).trim();
        let gb: u32 = digits
            .parse()
            .map_err(|_| RigError::InvalidInput(format!("Invalid RAM size '{}'", s)))?;
        RamSize::try_from(gb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Resolution tests =====

    #[test]
    fn test_resolution_parse() {
        assert_eq!("1080p".parse::<Resolution>().unwrap(), Resolution::Fhd);
        assert_eq!("1440P".parse::<Resolution>().unwrap(), Resolution::Qhd);
        assert_eq!("4K".parse::<Resolution>().unwrap(), Resolution::Uhd);
        assert_eq!("2160p".parse::<Resolution>().unwrap(), Resolution::Uhd);
        assert!("720p".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_resolution_label_round_trip() {
        for res in Resolution::ALL {
            assert_eq!(res.label().parse::<Resolution>().unwrap(), res);
        }
    }

    #[test]
    fn test_fps_multipliers_decrease_with_resolution() {
        assert_eq!(Resolution::Fhd.fps_multiplier(), 1.2);
        assert_eq!(Resolution::Qhd.fps_multiplier(), 1.0);
        assert_eq!(Resolution::Uhd.fps_multiplier(), 0.7);
        for i in 1..Resolution::ALL.len() {
            assert!(Resolution::ALL[i].fps_multiplier() < Resolution::ALL[i - 1].fps_multiplier());
            assert!(Resolution::ALL[i].gpu_modifier() < Resolution::ALL[i - 1].gpu_modifier());
        }
    }

    #[test]
    fn test_resolution_serde() {
        assert_eq!(serde_json::to_string(&Resolution::Uhd).unwrap(), "\"4K\"");
        let parsed: Resolution = serde_json::from_str("\"2160p\"").unwrap();
        assert_eq!(parsed, Resolution::Uhd);
    }

    // ===== Purpose tests =====

    #[test]
    fn test_gaming_modifier() {
        let m = Purpose::Gaming.modifier();
        assert_eq!(m.cpu, 0.9);
        assert_eq!(m.gpu, 1.1);
    }

    #[test]
    fn test_general_modifier_is_neutral() {
        let m = Purpose::General.modifier();
        assert_eq!(m.cpu, 1.0);
        assert_eq!(m.gpu, 1.0);
    }

    #[test]
    fn test_purpose_parse() {
        for purpose in Purpose::ALL {
            assert_eq!(purpose.label().parse::<Purpose>().unwrap(), purpose);
        }
        assert_eq!("Workstation".parse::<Purpose>().unwrap(), Purpose::Productivity);
        assert!("mining".parse::<Purpose>().is_err());
    }

    // ===== RamSize tests =====

    #[test]
    fn test_ram_modifier() {
        assert_eq!(RamSize::Gb8.modifier(), 0.85);
        assert_eq!(RamSize::Gb16.modifier(), 1.0);
        assert_eq!(RamSize::Gb32.modifier(), 1.05);
        assert_eq!(RamSize::Gb64.modifier(), 1.08);
    }

    #[test]
    fn test_ram_parse() {
        assert_eq!("16".parse::<RamSize>().unwrap(), RamSize::Gb16);
        assert_eq!("32GB".parse::<RamSize>().unwrap(), RamSize::Gb32);
        assert_eq!("64 gb".parse::<RamSize>().unwrap(), RamSize::Gb64);
        assert!("12".parse::<RamSize>().is_err());
        assert!("lots".parse::<RamSize>().is_err());
    }

    #[test]
    fn test_ram_serde_as_number() {
        assert_eq!(serde_json::to_string(&RamSize::Gb32).unwrap(), "32");
        let parsed: RamSize = serde_json::from_str("8").unwrap();
        assert_eq!(parsed, RamSize::Gb8);
        assert!(serde_json::from_str::<RamSize>("12").is_err());
    }

    #[test]
    fn test_ram_display() {
        assert_eq!(RamSize::Gb16.to_string(), "16GB");
    }
}
