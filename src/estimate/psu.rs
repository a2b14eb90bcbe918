// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Power supply sizing

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::hardware::{lookup_component, ComponentKind, HardwareComponent};

/// Target load ratio for the single-value recommendation
pub const TARGET_LOAD_RATIO: f64 = 0.6;

/// Headroom over the baseline load for the minimum tier
pub const MINIMUM_HEADROOM: f64 = 1.15;
/// Headroom over the baseline load for the recommended tier
pub const RECOMMENDED_HEADROOM: f64 = 1.3;
/// Headroom over the baseline load for the future-proof tier
pub const FUTURE_PROOF_HEADROOM: f64 = 1.5;

/// Rounding step beyond the retail table
pub const PSU_STEP_WATTS: u32 = 50;

/// Common retail PSU capacities
pub const PSU_SIZES: [u32; 12] = [
    450, 500, 550, 600, 650, 700, 750, 850, 1000, 1200, 1300, 1600,
];

/// Wattage allowance for everything besides the CPU and GPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraLoad {
    /// Board, one SSD, a couple of fans
    Minimal,
    /// Board, two drives, several fans
    Standard,
    /// Multiple drives, AIO pump, RGB, many fans
    Enthusiast,
    /// Drive arrays, add-in cards, custom loop
    Workstation,
}

impl ExtraLoad {
    pub const ALL: [ExtraLoad; 4] = [
        ExtraLoad::Minimal,
        ExtraLoad::Standard,
        ExtraLoad::Enthusiast,
        ExtraLoad::Workstation,
    ];

    pub fn watts(&self) -> u32 {
        match self {
            ExtraLoad::Minimal => 50,
            ExtraLoad::Standard => 100,
            ExtraLoad::Enthusiast => 150,
            ExtraLoad::Workstation => 250,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExtraLoad::Minimal => "minimal",
            ExtraLoad::Standard => "standard",
            ExtraLoad::Enthusiast => "enthusiast",
            ExtraLoad::Workstation => "workstation",
        }
    }
}

impl std::fmt::Display for ExtraLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}W)", self.label(), self.watts())
    }
}

impl FromStr for ExtraLoad {
    type Err = RigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.trim().to_ascii_lowercase();
        ExtraLoad::ALL
            .into_iter()
            .find(|preset| preset.label() == s_lower)
            .ok_or_else(|| {
                RigError::InvalidInput(format!(
                    "Invalid extra load preset '{}'. Valid presets: minimal, standard, enthusiast, workstation",
                    s
                ))
            })
    }
}

/// PSU sizing in three tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsuRecommendation {
    /// CPU TDP + GPU TDP + extra load
    pub base_watts: u32,
    pub minimum_watts: u32,
    /// Always a retail size, so always a multiple of [`PSU_STEP_WATTS`]
    pub recommended_watts: u32,
    pub future_proof_watts: u32,
}

impl PsuRecommendation {
    /// Suggested 80 PLUS certification for the recommended size
    pub fn efficiency_hint(&self) -> &'static str {
        match self.recommended_watts {
            0..=649 => "80 PLUS Bronze",
            650..=1000 => "80 PLUS Gold",
            _ => "80 PLUS Platinum",
        }
    }
}

/// Round a wattage up to the nearest retail PSU size
pub fn step_up(watts: f64) -> u32 {
    let watts = watts.max(0.0).ceil() as u32;
    PSU_SIZES
        .iter()
        .copied()
        .find(|&size| size >= watts)
        .unwrap_or_else(|| watts.div_ceil(PSU_STEP_WATTS) * PSU_STEP_WATTS)
}

/// Baseline draw of a build
pub fn base_load(cpu_tdp: u32, gpu_tdp: u32, extra: ExtraLoad) -> u32 {
    cpu_tdp + gpu_tdp + extra.watts()
}

/// Single-value recommendation sized so the baseline sits at the target load
pub fn load_ratio_watts(base_watts: u32) -> u32 {
    step_up(base_watts as f64 / TARGET_LOAD_RATIO)
}

/// Three-tier sizing from a baseline load
pub fn tiers_from_base(base_watts: u32) -> PsuRecommendation {
    let base = base_watts as f64;
    PsuRecommendation {
        base_watts,
        minimum_watts: (base * MINIMUM_HEADROOM).round() as u32,
        recommended_watts: step_up((base * RECOMMENDED_HEADROOM).round()),
        future_proof_watts: (base * FUTURE_PROOF_HEADROOM).round() as u32,
    }
}

/// Three-tier sizing for resolved catalog entries
pub fn psu_for(
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    extra: ExtraLoad,
) -> PsuRecommendation {
    let base = base_load(cpu.tdp_watts, gpu.tdp_watts, extra);
    let rec = tiers_from_base(base);
    tracing::debug!(
        cpu = cpu.id,
        gpu = gpu.id,
        extra = extra.label(),
        base,
        minimum = rec.minimum_watts,
        recommended = rec.recommended_watts,
        future_proof = rec.future_proof_watts,
        "psu estimated"
    );
    rec
}

/// Three-tier sizing by catalog ids; `None` when either id is unknown
pub fn estimate_psu(cpu_id: &str, gpu_id: &str, extra: ExtraLoad) -> Option<PsuRecommendation> {
    let cpu = lookup_component(ComponentKind::Cpu, cpu_id);
    let gpu = lookup_component(ComponentKind::Gpu, gpu_id);
    match (cpu, gpu) {
        (Some(cpu), Some(gpu)) => Some(psu_for(cpu, gpu, extra)),
        _ => {
            tracing::warn!(cpu_id, gpu_id, "cannot estimate psu: unresolved component");
            None
        }
    }
}
