// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU/GPU bottleneck estimate
//!
//! Both raw scores are scaled by their usage-context modifiers. When one
//! effective score exceeds the other by more than [`BALANCE_THRESHOLD`], the
//! gap is reported as a percentage of the larger score and attributed to the
//! dominating side. Anything inside the dead zone is reported as balanced.

use serde::Serialize;

use super::modifiers::{Purpose, RamSize, Resolution};
use crate::hardware::{lookup_component, ComponentKind, HardwareComponent};

/// Ratio one effective score must exceed the other by before it counts
pub const BALANCE_THRESHOLD: f64 = 1.05;

/// Side a bottleneck is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BottleneckComponent {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    None,
}

impl std::fmt::Display for BottleneckComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BottleneckComponent::Cpu => write!(f, "CPU"),
            BottleneckComponent::Gpu => write!(f, "GPU"),
            BottleneckComponent::None => write!(f, "None"),
        }
    }
}

/// How large the imbalance is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Balanced,
    Low,
    Moderate,
    High,
    Severe,
}

impl Severity {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 0.0 {
            Severity::Balanced
        } else if percentage < 10.0 {
            Severity::Low
        } else if percentage < 20.0 {
            Severity::Moderate
        } else if percentage < 35.0 {
            Severity::High
        } else {
            Severity::Severe
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Balanced => write!(f, "Balanced"),
            Severity::Low => write!(f, "Low"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::High => write!(f, "High"),
            Severity::Severe => write!(f, "Severe"),
        }
    }
}

/// Outcome of a bottleneck estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckResult {
    pub component: BottleneckComponent,
    /// Gap between the effective scores as a percentage of the larger one
    pub percentage: f64,
    pub effective_cpu: f64,
    pub effective_gpu: f64,
}

impl BottleneckResult {
    pub fn severity(&self) -> Severity {
        Severity::from_percentage(self.percentage)
    }

    pub fn is_balanced(&self) -> bool {
        self.component == BottleneckComponent::None
    }

    /// Short recommendation for closing the gap
    pub fn advice(&self) -> String {
        match self.component {
            BottleneckComponent::None => {
                "CPU and GPU are well matched for this use case.".to_string()
            }
            BottleneckComponent::Cpu => format!(
                "The CPU outpaces the GPU by {:.1}%. A faster GPU would balance this build.",
                self.percentage
            ),
            BottleneckComponent::Gpu => format!(
                "The GPU outpaces the CPU by {:.1}%. A faster CPU would balance this build.",
                self.percentage
            ),
        }
    }
}

/// Raw CPU score scaled by purpose and RAM factors
pub fn effective_cpu_score(cpu_score: f64, purpose: Purpose, ram: RamSize) -> f64 {
    cpu_score * purpose.modifier().cpu * ram.modifier()
}

/// Raw GPU score scaled by purpose and resolution factors
pub fn effective_gpu_score(gpu_score: f64, purpose: Purpose, resolution: Resolution) -> f64 {
    gpu_score * purpose.modifier().gpu * resolution.gpu_modifier()
}

/// Classify a pair of already-scaled scores
pub fn classify(effective_cpu: f64, effective_gpu: f64) -> BottleneckResult {
    let (component, percentage) = if effective_cpu > effective_gpu * BALANCE_THRESHOLD {
        (
            BottleneckComponent::Cpu,
            (effective_cpu - effective_gpu) / effective_cpu * 100.0,
        )
    } else if effective_gpu > effective_cpu * BALANCE_THRESHOLD {
        (
            BottleneckComponent::Gpu,
            (effective_gpu - effective_cpu) / effective_gpu * 100.0,
        )
    } else {
        (BottleneckComponent::None, 0.0)
    };

    BottleneckResult {
        component,
        percentage,
        effective_cpu,
        effective_gpu,
    }
}

/// Estimate from raw benchmark scores
pub fn bottleneck_from_scores(
    cpu_score: f64,
    gpu_score: f64,
    purpose: Purpose,
    resolution: Resolution,
    ram: RamSize,
) -> BottleneckResult {
    let result = classify(
        effective_cpu_score(cpu_score, purpose, ram),
        effective_gpu_score(gpu_score, purpose, resolution),
    );
    tracing::debug!(
        cpu_score,
        gpu_score,
        %purpose,
        %resolution,
        %ram,
        effective_cpu = result.effective_cpu,
        effective_gpu = result.effective_gpu,
        component = %result.component,
        percentage = result.percentage,
        "bottleneck estimated"
    );
    result
}

/// Estimate for two resolved catalog entries
pub fn bottleneck_for(
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    purpose: Purpose,
    resolution: Resolution,
    ram: RamSize,
) -> BottleneckResult {
    bottleneck_from_scores(cpu.score, gpu.score, purpose, resolution, ram)
}

/// Estimate by catalog id; `None` when either id is unknown
pub fn estimate_bottleneck(
    cpu_id: &str,
    gpu_id: &str,
    purpose: Purpose,
    resolution: Resolution,
    ram: RamSize,
) -> Option<BottleneckResult> {
    let cpu = lookup_component(ComponentKind::Cpu, cpu_id);
    let gpu = lookup_component(ComponentKind::Gpu, gpu_id);
    match (cpu, gpu) {
        (Some(cpu), Some(gpu)) => Some(bottleneck_for(cpu, gpu, purpose, resolution, ram)),
        _ => {
            tracing::warn!(cpu_id, gpu_id, "cannot estimate bottleneck: unresolved component");
            None
        }
    }
}
