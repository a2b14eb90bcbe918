// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! rigcalc - PC build calculators
//!
//! Entry point for the rigcalc CLI application.

use clap::Parser;

use rigcalc::cli::{Cli, Commands, SettingsArgs, SettingsCommands};
use rigcalc::commands;
use rigcalc::config::Settings;
use rigcalc::error::Result;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` shows calculator internals, `-vv` everything rigcalc logs.
    // `RUST_LOG` still takes precedence.
    let directive = match verbose {
        0 => None,
        1 => Some("rigcalc=debug"),
        _ => Some("rigcalc=trace"),
    };
    if let Some(parsed) = directive.and_then(|d| d.parse().ok()) {
        env_filter = env_filter.add_directive(parsed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = load_settings(&cli.command, &settings_path)?;

    match &cli.command {
        Commands::Bottleneck(args) => commands::bottleneck::execute(args, &cli.format, &settings),
        Commands::Fps(args) => commands::fps::execute(args, &cli.format, &settings),
        Commands::Psu(args) => commands::psu::execute(args, &cli.format, &settings),
        Commands::List(args) => commands::list::execute(args, &cli.format, &settings),
        Commands::Settings(args) => commands::settings::execute(args, &settings_path, settings),
    }
}

/// `settings reset` must still work when the file it replaces is broken.
fn load_settings(command: &Commands, path: &std::path::Path) -> Result<Settings> {
    let resetting = matches!(
        command,
        Commands::Settings(SettingsArgs {
            command: Some(SettingsCommands::Reset)
        })
    );
    match Settings::load_from(path) {
        Err(e) if resetting => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings for reset");
            Ok(Settings::default())
        }
        other => other,
    }
}
