// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use rigcalc::cli::{Cli, Commands, ListTarget, OutputFormat, SettingsCommands};
use rigcalc::estimate::{ExtraLoad, Purpose, RamSize, Resolution};
use rigcalc::hardware::Tier;

#[test]
fn test_parse_bottleneck_command() {
    let args = vec![
        "rigcalc",
        "bottleneck",
        "--cpu",
        "i5-13600k",
        "--gpu",
        "rtx-4070",
        "-p",
        "streaming",
        "-r",
        "1440p",
        "--ram",
        "32",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Commands::Bottleneck(bn) = cli.command {
        assert_eq!(bn.components.cpu.as_deref(), Some("i5-13600k"));
        assert_eq!(bn.components.gpu.as_deref(), Some("rtx-4070"));
        assert_eq!(bn.purpose, Some(Purpose::Streaming));
        assert_eq!(bn.resolution, Some(Resolution::Qhd));
        assert_eq!(bn.ram, Some(RamSize::Gb32));
    } else {
        panic!("Expected Bottleneck command");
    }
}

#[test]
fn test_parse_bottleneck_alias() {
    let cli = Cli::try_parse_from(["rigcalc", "bn", "--cpu", "x"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Bottleneck(_)));
}

#[test]
fn test_parse_ram_with_unit() {
    let cli = Cli::try_parse_from(["rigcalc", "bottleneck", "--ram", "64GB"])
        .expect("Valid command parsing");
    if let Commands::Bottleneck(bn) = cli.command {
        assert_eq!(bn.ram, Some(RamSize::Gb64));
    } else {
        panic!("Expected Bottleneck command");
    }
}

#[test]
fn test_parse_rejects_bad_ram() {
    assert!(Cli::try_parse_from(["rigcalc", "bottleneck", "--ram", "12"]).is_err());
}

#[test]
fn test_parse_rejects_bad_resolution() {
    assert!(Cli::try_parse_from(["rigcalc", "fps", "-r", "720p"]).is_err());
}

#[test]
fn test_parse_fps_command() {
    let cli = Cli::try_parse_from([
        "rigcalc", "fps", "--cpu", "i5-13600k", "--gpu", "rtx-4070", "-g", "valorant", "-r", "4k",
    ])
    .expect("Valid command parsing");
    if let Commands::Fps(fps) = cli.command {
        assert_eq!(fps.game.as_deref(), Some("valorant"));
        assert_eq!(fps.resolution, Some(Resolution::Uhd));
        assert!(!fps.all_games);
    } else {
        panic!("Expected Fps command");
    }
}

#[test]
fn test_parse_fps_game_conflicts_with_all() {
    let result = Cli::try_parse_from(["rigcalc", "fps", "-g", "valorant", "--all-games"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_psu_command() {
    let cli = Cli::try_parse_from(["rigcalc", "psu", "--cpu", "a", "--gpu", "b", "-e", "enthusiast"])
        .expect("Valid command parsing");
    if let Commands::Psu(psu) = cli.command {
        assert_eq!(psu.extra, Some(ExtraLoad::Enthusiast));
    } else {
        panic!("Expected Psu command");
    }
}

#[test]
fn test_parse_list_with_filters() {
    let cli = Cli::try_parse_from(["rigcalc", "ls", "gpus", "-t", "high-end", "-s", "rtx"])
        .expect("Valid command parsing");
    if let Commands::List(list) = cli.command {
        assert_eq!(list.target, ListTarget::Gpus);
        assert_eq!(list.tier, Some(Tier::HighEnd));
        assert_eq!(list.search.as_deref(), Some("rtx"));
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn test_parse_list_requires_target() {
    assert!(Cli::try_parse_from(["rigcalc", "list"]).is_err());
}

#[test]
fn test_parse_settings_command() {
    let cli = Cli::try_parse_from(["rigcalc", "settings"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Commands::Settings(ref s) if s.command.is_none()));
}

#[test]
fn test_parse_config_alias_get() {
    let cli = Cli::try_parse_from(["rigcalc", "config", "get", "ram"]).expect("Valid command parsing");
    if let Commands::Settings(s) = cli.command {
        assert!(matches!(s.command, Some(SettingsCommands::Get { ref key }) if key == "ram"));
    } else {
        panic!("Expected Settings command");
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["rigcalc", "psu", "-vv", "--format", "markdown"])
        .expect("Valid command parsing");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.format, OutputFormat::Markdown);
}

#[test]
fn test_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["rigcalc", "benchmark"]).is_err());
}

// ==================== Binary ====================

fn rigcalc_with_config(config: &std::path::Path, args: &[&str]) -> std::process::Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_rigcalc"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn test_reset_recovers_corrupt_settings_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{corrupt").unwrap();

    let output = rigcalc_with_config(&path, &["settings", "reset"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Settings reset to defaults."));

    let loaded = rigcalc::config::Settings::load_from(&path).unwrap();
    assert_eq!(loaded, rigcalc::config::Settings::default());
}

#[test]
fn test_corrupt_settings_still_fail_other_commands() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{corrupt").unwrap();

    let output = rigcalc_with_config(&path, &["settings", "show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: JSON error"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{corrupt");
}
