// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! PSU calculator command

use crossterm::style::Color;
use serde::Serialize;

use super::output::{color_enabled, paint, selection_from, to_json};
use crate::cli::args::{OutputFormat, PsuArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::estimate::{load_ratio_watts, ExtraLoad, PsuRecommendation};
use crate::hardware::HardwareComponent;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PsuReport {
    cpu: &'static HardwareComponent,
    gpu: &'static HardwareComponent,
    extra_load: ExtraLoad,
    extra_load_watts: u32,
    #[serde(flatten)]
    recommendation: PsuRecommendation,
    load_ratio_watts: u32,
    efficiency: &'static str,
}

/// Execute the psu command
pub fn execute(args: &PsuArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    println!("{}", render(args, format, settings)?);
    Ok(())
}

/// Build the command output without printing it
pub fn render(args: &PsuArgs, format: &OutputFormat, settings: &Settings) -> Result<String> {
    let mut selection = selection_from(&args.components, settings);
    if let Some(extra) = args.extra {
        selection.extra_load = extra;
    }

    let cpu = selection.require_cpu()?;
    let gpu = selection.require_gpu()?;
    let recommendation = selection.psu()?;

    let report = PsuReport {
        cpu,
        gpu,
        extra_load: selection.extra_load,
        extra_load_watts: selection.extra_load.watts(),
        recommendation,
        load_ratio_watts: load_ratio_watts(recommendation.base_watts),
        efficiency: recommendation.efficiency_hint(),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Markdown => Ok(render_markdown(&report)),
        OutputFormat::Text => Ok(render_text(&report, color_enabled(format, settings))),
    }
}

fn render_text(report: &PsuReport, color: bool) -> String {
    let rec = &report.recommendation;
    let mut out = String::new();
    out.push_str("\n=== PSU Estimate ===\n\n");
    out.push_str(&format!(
        "CPU: {} ({}W)\n",
        report.cpu.name, report.cpu.tdp_watts
    ));
    out.push_str(&format!(
        "GPU: {} ({}W)\n",
        report.gpu.name, report.gpu.tdp_watts
    ));
    out.push_str(&format!("Other components: {}\n", report.extra_load));
    out.push_str(&format!("Estimated load: {}W\n\n", rec.base_watts));
    out.push_str(&format!("  Minimum:       {}W\n", rec.minimum_watts));
    out.push_str(&format!(
        "  Recommended:   {}\n",
        paint(&format!("{}W", rec.recommended_watts), Color::Green, color)
    ));
    out.push_str(&format!("  Future-proof:  {}W\n\n", rec.future_proof_watts));
    out.push_str(&format!(
        "At a 60% target load: {}W\n",
        report.load_ratio_watts
    ));
    out.push_str(&format!("Suggested rating: {}", report.efficiency));
    out
}

fn render_markdown(report: &PsuReport) -> String {
    let rec = &report.recommendation;
    let mut out = String::new();
    out.push_str("## PSU Estimate\n\n");
    out.push_str(&format!(
        "{} ({}W) + {} ({}W) + {}\n\n",
        report.cpu.name,
        report.cpu.tdp_watts,
        report.gpu.name,
        report.gpu.tdp_watts,
        report.extra_load
    ));
    out.push_str("| Tier | Watts |\n");
    out.push_str("|---|---|\n");
    out.push_str(&format!("| Estimated load | {} |\n", rec.base_watts));
    out.push_str(&format!("| Minimum | {} |\n", rec.minimum_watts));
    out.push_str(&format!("| **Recommended** | **{}** |\n", rec.recommended_watts));
    out.push_str(&format!("| Future-proof | {} |\n\n", rec.future_proof_watts));
    out.push_str(&format!("Suggested rating: {}", report.efficiency));
    out
}
