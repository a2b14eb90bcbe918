// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! FPS calculator command

use crossterm::style::Color;
use serde::Serialize;

use super::output::{color_enabled, paint, selection_from, to_json};
use crate::cli::args::{FpsArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::estimate::{FpsRating, GameFps, Resolution};
use crate::hardware::{GameProfile, HardwareComponent};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FpsReport {
    cpu: &'static HardwareComponent,
    gpu: &'static HardwareComponent,
    resolution: Resolution,
    games: Vec<GameFps>,
}

/// Execute the fps command
pub fn execute(args: &FpsArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    println!("{}", render(args, format, settings)?);
    Ok(())
}

/// Build the command output without printing it
pub fn render(args: &FpsArgs, format: &OutputFormat, settings: &Settings) -> Result<String> {
    let mut selection = selection_from(&args.components, settings);
    selection.game_id = args.game.clone();
    if let Some(resolution) = args.resolution {
        selection.resolution = resolution;
    }

    let cpu = selection.require_cpu()?;
    let gpu = selection.require_gpu()?;
    let games = if args.all_games {
        selection.fps_all_games()?
    } else {
        let game: &GameProfile = selection.require_game()?;
        let fps = selection.fps()?;
        vec![GameFps {
            game_id: game.id,
            game_name: game.name,
            fps,
            rating: FpsRating::from_fps(fps),
        }]
    };

    let report = FpsReport {
        cpu,
        gpu,
        resolution: selection.resolution,
        games,
    };

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Markdown => Ok(render_markdown(&report)),
        OutputFormat::Text => Ok(render_text(&report, color_enabled(format, settings))),
    }
}

fn rating_color(rating: FpsRating) -> Color {
    match rating {
        FpsRating::Unplayable => Color::Red,
        FpsRating::Playable => Color::Yellow,
        FpsRating::Smooth | FpsRating::HighRefresh => Color::Green,
    }
}

fn render_text(report: &FpsReport, color: bool) -> String {
    let mut out = String::new();
    out.push_str("\n=== FPS Estimate ===\n\n");
    out.push_str(&format!("CPU: {}\n", report.cpu.name));
    out.push_str(&format!("GPU: {}\n", report.gpu.name));
    out.push_str(&format!("Resolution: {}\n\n", report.resolution));

    let width = report
        .games
        .iter()
        .map(|g| g.game_name.len())
        .max()
        .unwrap_or(0);
    for row in &report.games {
        out.push_str(&format!(
            "  {:<width$}  {:>4} FPS  {}\n",
            row.game_name,
            row.fps,
            paint(&row.rating.to_string(), rating_color(row.rating), color),
            width = width
        ));
    }
    out.push_str("\nEstimates assume high settings and no frame cap.");
    out
}

fn render_markdown(report: &FpsReport) -> String {
    let mut out = String::new();
    out.push_str("## FPS Estimate\n\n");
    out.push_str(&format!(
        "{} + {} at {}\n\n",
        report.cpu.name, report.gpu.name, report.resolution
    ));
    out.push_str("| Game | FPS | Rating |\n");
    out.push_str("|---|---|---|\n");
    for row in &report.games {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            row.game_name, row.fps, row.rating
        ));
    }
    out
}
