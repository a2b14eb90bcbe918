// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware component records

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tier::Tier;
use crate::error::RigError;

/// Which table a component lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Cpu,
    Gpu,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Cpu => write!(f, "CPU"),
            ComponentKind::Gpu => write!(f, "GPU"),
        }
    }
}

impl FromStr for ComponentKind {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" | "cpus" | "processor" => Ok(ComponentKind::Cpu),
            "gpu" | "gpus" | "graphics" => Ok(ComponentKind::Gpu),
            _ => Err(RigError::InvalidInput(format!(
                "Invalid component kind '{}'. Expected cpu or gpu",
                s
            ))),
        }
    }
}

/// Processor-specific physical attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSpecs {
    pub cores: u32,
    pub threads: u32,
    pub base_clock_ghz: f64,
    pub boost_clock_ghz: f64,
}

/// Graphics-card-specific physical attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuSpecs {
    pub vram_gb: u32,
    pub boost_clock_mhz: u32,
}

/// Physical attributes, shaped by component kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Specs {
    Cpu(CpuSpecs),
    Gpu(GpuSpecs),
}

/// One row of the CPU or GPU table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareComponent {
    /// Identifier, unique within its kind
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub kind: ComponentKind,
    /// Unitless synthetic benchmark score, higher is faster
    pub score: f64,
    pub tier: Tier,
    pub specs: Specs,
    /// Thermal design power in watts, used as the power draw estimate
    pub tdp_watts: u32,
    /// Street price in US dollars at the catalog snapshot date
    pub price_usd: f64,
}

impl HardwareComponent {
    /// One-line summary of the physical specs
    pub fn spec_summary(&self) -> String {
        match self.specs {
            Specs::Cpu(cpu) => format!(
                "{}C/{}T, {:.1}-{:.1} GHz, {}W",
                cpu.cores, cpu.threads, cpu.base_clock_ghz, cpu.boost_clock_ghz, self.tdp_watts
            ),
            Specs::Gpu(gpu) => format!(
                "{}GB VRAM, {} MHz boost, {}W",
                gpu.vram_gb, gpu.boost_clock_mhz, self.tdp_watts
            ),
        }
    }

    /// Case-insensitive substring match on id or display name
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.trim().to_lowercase();
        needle.is_empty()
            || self.id.to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
    }

    /// Benchmark points per hundred dollars
    pub fn value_score(&self) -> Option<f64> {
        (self.price_usd > 0.0).then(|| self.score / self.price_usd * 100.0)
    }
}
