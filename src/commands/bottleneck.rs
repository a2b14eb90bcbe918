// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bottleneck calculator command

use crossterm::style::Color;
use serde::Serialize;

use super::output::{color_enabled, paint, selection_from, to_json};
use crate::cli::args::{BottleneckArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::estimate::{BottleneckComponent, BottleneckResult, Purpose, RamSize, Resolution, Severity};
use crate::hardware::HardwareComponent;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BottleneckReport {
    cpu: &'static HardwareComponent,
    gpu: &'static HardwareComponent,
    purpose: Purpose,
    resolution: Resolution,
    ram: RamSize,
    #[serde(flatten)]
    result: BottleneckResult,
    severity: Severity,
    advice: String,
}

/// Execute the bottleneck command
pub fn execute(args: &BottleneckArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    println!("{}", render(args, format, settings)?);
    Ok(())
}

/// Build the command output without printing it
pub fn render(args: &BottleneckArgs, format: &OutputFormat, settings: &Settings) -> Result<String> {
    let mut selection = selection_from(&args.components, settings);
    if let Some(purpose) = args.purpose {
        selection.purpose = purpose;
    }
    if let Some(resolution) = args.resolution {
        selection.resolution = resolution;
    }
    if let Some(ram) = args.ram {
        selection.ram = ram;
    }

    let cpu = selection.require_cpu()?;
    let gpu = selection.require_gpu()?;
    let result = selection.bottleneck()?;

    let report = BottleneckReport {
        cpu,
        gpu,
        purpose: selection.purpose,
        resolution: selection.resolution,
        ram: selection.ram,
        result,
        severity: result.severity(),
        advice: result.advice(),
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Markdown => Ok(render_markdown(&report)),
        OutputFormat::Text => Ok(render_text(&report, color_enabled(format, settings))),
    }
}

/// Names the limiting side; `component` is the side that is ahead.
fn verdict(result: &BottleneckResult) -> String {
    let (limited, ahead) = match result.component {
        BottleneckComponent::None => return "Balanced (0%)".to_string(),
        BottleneckComponent::Cpu => ("GPU", "CPU"),
        BottleneckComponent::Gpu => ("CPU", "GPU"),
    };
    format!(
        "{}-limited ({} ahead by {:.1}%, {})",
        limited,
        ahead,
        result.percentage,
        result.severity()
    )
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Balanced | Severity::Low => Color::Green,
        Severity::Moderate => Color::Yellow,
        Severity::High | Severity::Severe => Color::Red,
    }
}

fn render_text(report: &BottleneckReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str("\n=== Bottleneck Estimate ===\n\n");
    out.push_str(&format!(
        "CPU: {} (score {:.0})\n",
        report.cpu.name, report.cpu.score
    ));
    out.push_str(&format!(
        "GPU: {} (score {:.0})\n",
        report.gpu.name, report.gpu.score
    ));
    out.push_str(&format!(
        "Context: {}, {}, {} RAM\n\n",
        report.purpose, report.resolution, report.ram
    ));
    out.push_str(&format!(
        "Effective CPU score: {:.1}\n",
        report.result.effective_cpu
    ));
    out.push_str(&format!(
        "Effective GPU score: {:.1}\n",
        report.result.effective_gpu
    ));
    out.push_str(&format!(
        "Result: {}\n\n",
        paint(
            &verdict(&report.result),
            severity_color(report.severity),
            color
        )
    ));
    out.push_str(&report.advice);
    out
}

fn render_markdown(report: &BottleneckReport) -> String {
    let mut out = String::new();
    out.push_str("## Bottleneck Estimate\n\n");
    out.push_str("| | Component | Score | Effective |\n");
    out.push_str("|---|---|---|---|\n");
    out.push_str(&format!(
        "| CPU | {} | {:.0} | {:.1} |\n",
        report.cpu.name, report.cpu.score, report.result.effective_cpu
    ));
    out.push_str(&format!(
        "| GPU | {} | {:.0} | {:.1} |\n\n",
        report.gpu.name, report.gpu.score, report.result.effective_gpu
    ));
    out.push_str(&format!(
        "**Context:** {}, {}, {} RAM\n\n",
        report.purpose, report.resolution, report.ram
    ));
    out.push_str(&format!("**Result:** {}\n\n", verdict(&report.result)));
    out.push_str(&report.advice);
    out
}
