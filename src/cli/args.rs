// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for rigcalc.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::estimate::{ExtraLoad, Purpose, RamSize, Resolution};
use crate::hardware::Tier;

/// rigcalc - PC build calculators
#[derive(Parser, Debug)]
#[command(name = "rigcalc")]
#[command(version, about = "Bottleneck, FPS and PSU calculators for PC builds")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate how far apart the CPU and GPU are
    #[command(alias = "bn")]
    Bottleneck(BottleneckArgs),

    /// Estimate average frame rate in a game
    Fps(FpsArgs),

    /// Recommend a power supply size
    Psu(PsuArgs),

    /// Browse the CPU, GPU and game tables
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show or change saved defaults
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// CPU and GPU choice shared by every calculator
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ComponentArgs {
    /// CPU id (see `rigcalc list cpus`)
    #[arg(long)]
    pub cpu: Option<String>,

    /// GPU id (see `rigcalc list gpus`)
    #[arg(long)]
    pub gpu: Option<String>,
}

/// Arguments for the bottleneck subcommand
#[derive(clap::Args, Debug, Default)]
pub struct BottleneckArgs {
    #[command(flatten)]
    pub components: ComponentArgs,

    /// Main use of the build (gaming, streaming, productivity, general)
    #[arg(short, long)]
    pub purpose: Option<Purpose>,

    /// Target resolution (1080p, 1440p, 4K)
    #[arg(short, long)]
    pub resolution: Option<Resolution>,

    /// Installed RAM in GB (8, 16, 32, 64)
    #[arg(long)]
    pub ram: Option<RamSize>,
}

/// Arguments for the fps subcommand
#[derive(clap::Args, Debug, Default)]
pub struct FpsArgs {
    #[command(flatten)]
    pub components: ComponentArgs,

    /// Game id (see `rigcalc list games`)
    #[arg(short, long, conflicts_with = "all_games")]
    pub game: Option<String>,

    /// Estimate every game in the table
    #[arg(long)]
    pub all_games: bool,

    /// Target resolution (1080p, 1440p, 4K)
    #[arg(short, long)]
    pub resolution: Option<Resolution>,
}

/// Arguments for the psu subcommand
#[derive(clap::Args, Debug, Default)]
pub struct PsuArgs {
    #[command(flatten)]
    pub components: ComponentArgs,

    /// Allowance for the rest of the system (minimal, standard, enthusiast, workstation)
    #[arg(short, long)]
    pub extra: Option<ExtraLoad>,
}

/// Which table to list
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ListTarget {
    Cpus,
    Gpus,
    Games,
}

/// Arguments for the list subcommand
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Table to list
    pub target: ListTarget,

    /// Only show components in this tier
    #[arg(short, long)]
    pub tier: Option<Tier>,

    /// Case-insensitive text filter on id and name
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for settings/config
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "resolution", "ram")
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Reset configuration to defaults
    Reset,
}

/// Output format for results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,

    /// Markdown output
    Markdown,
}
