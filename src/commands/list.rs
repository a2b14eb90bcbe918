// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalog listing command

use serde::Serialize;

use super::output::to_json;
use crate::cli::args::{ListArgs, ListTarget, OutputFormat};
use crate::config::Settings;
use crate::error::{Result, RigError};
use crate::hardware::{
    filter_by_tier, games, prices_as_of, search, ComponentKind, GameProfile, HardwareComponent,
    Tier,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentListing {
    kind: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<Tier>,
    prices_as_of: Option<String>,
    components: Vec<&'static HardwareComponent>,
}

/// Execute the list command
pub fn execute(args: &ListArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    println!("{}", render(args, format, settings)?);
    Ok(())
}

/// Build the command output without printing it
pub fn render(args: &ListArgs, format: &OutputFormat, settings: &Settings) -> Result<String> {
    let kind = match args.target {
        ListTarget::Cpus => ComponentKind::Cpu,
        ListTarget::Gpus => ComponentKind::Gpu,
        ListTarget::Games => return render_games(args, format),
    };

    let text = args.search.as_deref().unwrap_or("");
    let components: Vec<&'static HardwareComponent> = match args.tier {
        Some(tier) => filter_by_tier(kind, tier)
            .into_iter()
            .filter(|c| c.matches_text(text))
            .collect(),
        None => search(kind, text),
    };
    tracing::debug!(%kind, count = components.len(), "listing components");

    let listing = ComponentListing {
        kind,
        tier: args.tier,
        prices_as_of: prices_as_of().map(|d| d.to_string()),
        components,
    };

    match format {
        OutputFormat::Json => to_json(&listing),
        OutputFormat::Markdown => Ok(components_markdown(&listing, settings.display.show_prices)),
        OutputFormat::Text => Ok(components_text(&listing, settings.display.show_prices)),
    }
}

fn components_text(listing: &ComponentListing, show_prices: bool) -> String {
    let mut out = format!("\n=== {}s ===\n\n", listing.kind);
    if let Some(tier) = listing.tier {
        out.push_str(&format!("Tier: {}\n\n", tier.description()));
    }
    if listing.components.is_empty() {
        out.push_str("  (no matches)");
        return out;
    }
    for c in &listing.components {
        let price = if show_prices {
            format!("  ${:.0}{}", c.price_usd, value_note(c))
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {:<20} {:<34} {:>5.0}  {:<12} {}{}\n",
            c.id,
            c.name,
            c.score,
            c.tier.label(),
            c.spec_summary(),
            price
        ));
    }
    if show_prices {
        if let Some(date) = &listing.prices_as_of {
            out.push_str(&format!("\nPrices as of {}", date));
        }
    }
    out
}

fn value_note(c: &HardwareComponent) -> String {
    c.value_score()
        .map(|v| format!(" ({:.1} pts/$100)", v))
        .unwrap_or_default()
}

fn components_markdown(listing: &ComponentListing, show_prices: bool) -> String {
    let mut out = format!("## {}s\n\n", listing.kind);
    if let Some(tier) = listing.tier {
        out.push_str(&format!("_{}_\n\n", tier.description()));
    }
    if show_prices {
        out.push_str("| Id | Name | Score | Tier | Specs | Price | Pts/$100 |\n");
        out.push_str("|---|---|---|---|---|---|---|\n");
    } else {
        out.push_str("| Id | Name | Score | Tier | Specs |\n");
        out.push_str("|---|---|---|---|---|\n");
    }
    for c in &listing.components {
        out.push_str(&format!(
            "| {} | {} | {:.0} | {} | {} |",
            c.id,
            c.name,
            c.score,
            c.tier,
            c.spec_summary()
        ));
        if show_prices {
            let value = c
                .value_score()
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(" ${:.0} | {} |", c.price_usd, value));
        }
        out.push('\n');
    }
    out
}

fn render_games(args: &ListArgs, format: &OutputFormat) -> Result<String> {
    if args.tier.is_some() {
        return Err(RigError::InvalidInput(
            "--tier applies to cpus and gpus; games have no tier".to_string(),
        ));
    }
    let needle = args.search.as_deref().unwrap_or("").trim().to_lowercase();
    let matches: Vec<&'static GameProfile> = games()
        .iter()
        .filter(|g| {
            needle.is_empty()
                || g.id.contains(needle.as_str())
                || g.name.to_lowercase().contains(&needle)
        })
        .collect();

    match format {
        OutputFormat::Json => to_json(&matches),
        OutputFormat::Markdown => {
            let mut out = String::from("## Games\n\n");
            out.push_str("| Id | Name | Year | Category | CPU demand | GPU demand |\n");
            out.push_str("|---|---|---|---|---|---|\n");
            for g in &matches {
                out.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    g.id, g.name, g.release_year, g.category, g.cpu_demand, g.gpu_demand
                ));
            }
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::from("\n=== Games ===\n\n");
            for g in &matches {
                out.push_str(&format!(
                    "  {:<24} {:<24} {}  {:<8} CPU {:<9} GPU {:<9} {}GB RAM\n",
                    g.id,
                    g.name,
                    g.release_year,
                    g.category,
                    g.cpu_demand,
                    g.gpu_demand,
                    g.ram_required_gb
                ));
            }
            if matches.is_empty() {
                out.push_str("  (no matches)");
            }
            Ok(out)
        }
    }
}
