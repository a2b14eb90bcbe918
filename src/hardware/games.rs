// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Game profiles used by the FPS estimator

use serde::Serialize;

/// Broad game category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameCategory {
    #[serde(rename = "AAA")]
    Aaa,
    Esports,
    Indie,
}

impl std::fmt::Display for GameCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameCategory::Aaa => write!(f, "AAA"),
            GameCategory::Esports => write!(f, "Esports"),
            GameCategory::Indie => write!(f, "Indie"),
        }
    }
}

/// Qualitative demand a game puts on one component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandLevel::Low => write!(f, "Low"),
            DemandLevel::Medium => write!(f, "Medium"),
            DemandLevel::High => write!(f, "High"),
            DemandLevel::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// Per-game constants for the FPS model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub release_year: u16,
    pub category: GameCategory,
    /// Frame rate of a reference build (CPU and GPU both scoring 100) at 1440p
    pub base_fps: f64,
    /// Share of achieved frame rate driven by the CPU
    pub cpu_weight: f64,
    /// Share of achieved frame rate driven by the GPU
    pub gpu_weight: f64,
    pub ram_required_gb: u32,
    pub storage_required_gb: u32,
    pub cpu_demand: DemandLevel,
    pub gpu_demand: DemandLevel,
}

macro_rules! game {
    ($id:literal, $name:literal, $year:literal, $cat:ident, $fps:literal,
     $cpu_w:literal / $gpu_w:literal, $ram:literal GB, $disk:literal GB,
     $cpu_d:ident, $gpu_d:ident) => {
        GameProfile {
            id: $id,
            name: $name,
            release_year: $year,
            category: GameCategory::$cat,
            base_fps: $fps,
            cpu_weight: $cpu_w,
            gpu_weight: $gpu_w,
            ram_required_gb: $ram,
            storage_required_gb: $disk,
            cpu_demand: DemandLevel::$cpu_d,
            gpu_demand: DemandLevel::$gpu_d,
        }
    };
}

#[rustfmt::skip]
pub static GAMES: &[GameProfile] = &[
    game!("cyberpunk-2077", "Cyberpunk 2077", 2020, Aaa, 70.0, 0.3 / 0.7, 16 GB, 70 GB, High, VeryHigh),
    game!("elden-ring", "Elden Ring", 2022, Aaa, 75.0, 0.35 / 0.65, 16 GB, 60 GB, High, High),
    game!("baldurs-gate-3", "Baldur's Gate 3", 2023, Aaa, 80.0, 0.4 / 0.6, 16 GB, 150 GB, High, High),
    game!("red-dead-redemption-2", "Red Dead Redemption 2", 2019, Aaa, 75.0, 0.3 / 0.7, 12 GB, 150 GB, High, VeryHigh),
    game!("alan-wake-2", "Alan Wake 2", 2023, Aaa, 55.0, 0.2 / 0.8, 16 GB, 90 GB, Medium, VeryHigh),
    game!("counter-strike-2", "Counter-Strike 2", 2023, Esports, 320.0, 0.6 / 0.4, 8 GB, 85 GB, High, Medium),
    game!("valorant", "Valorant", 2020, Esports, 380.0, 0.65 / 0.35, 4 GB, 35 GB, Medium, Low),
    game!("fortnite", "Fortnite", 2017, Esports, 200.0, 0.5 / 0.5, 8 GB, 30 GB, Medium, Medium),
    game!("league-of-legends", "League of Legends", 2009, Esports, 300.0, 0.7 / 0.3, 4 GB, 16 GB, Low, Low),
    game!("apex-legends", "Apex Legends", 2019, Esports, 180.0, 0.45 / 0.55, 8 GB, 75 GB, Medium, Medium),
    game!("hades-2", "Hades II", 2024, Indie, 240.0, 0.4 / 0.6, 8 GB, 10 GB, Low, Low),
    game!("stardew-valley", "Stardew Valley", 2016, Indie, 400.0, 0.5 / 0.5, 2 GB, 1 GB, Low, Low),
];

/// All game profiles
pub fn games() -> &'static [GameProfile] {
    GAMES
}

/// Look up a game by id (case-insensitive)
pub fn lookup_game(id: &str) -> Option<&'static GameProfile> {
    let id = id.trim();
    let found = GAMES.iter().find(|g| g.id.eq_ignore_ascii_case(id));
    if found.is_none() {
        tracing::debug!(id, "game not in catalog");
    }
    found
}
