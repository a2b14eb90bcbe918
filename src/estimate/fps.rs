// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Average frame-rate estimate for a game

use serde::Serialize;

use super::modifiers::Resolution;
use crate::hardware::{games, lookup_component, lookup_game, ComponentKind, GameProfile, HardwareComponent};

/// Exponent of the diminishing-returns curve applied to raw scores
pub const SCORE_EXPONENT: f64 = 0.7;

/// Playability band of an estimated frame rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FpsRating {
    Unplayable,
    Playable,
    Smooth,
    HighRefresh,
}

impl FpsRating {
    pub fn from_fps(fps: u32) -> Self {
        match fps {
            0..=29 => FpsRating::Unplayable,
            30..=59 => FpsRating::Playable,
            60..=143 => FpsRating::Smooth,
            _ => FpsRating::HighRefresh,
        }
    }
}

impl std::fmt::Display for FpsRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FpsRating::Unplayable => write!(f, "Unplayable"),
            FpsRating::Playable => write!(f, "Playable"),
            FpsRating::Smooth => write!(f, "Smooth"),
            FpsRating::HighRefresh => write!(f, "High refresh"),
        }
    }
}

/// One row of a multi-game estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFps {
    pub game_id: &'static str,
    pub game_name: &'static str,
    pub fps: u32,
    pub rating: FpsRating,
}

/// Normalized performance factor of a raw score
pub fn performance_factor(score: f64) -> f64 {
    (score.max(0.0) / 100.0).powf(SCORE_EXPONENT)
}

/// Estimate from raw benchmark scores
pub fn fps_from_scores(
    cpu_score: f64,
    gpu_score: f64,
    game: &GameProfile,
    resolution: Resolution,
) -> u32 {
    let cpu_factor = performance_factor(cpu_score);
    let gpu_factor = performance_factor(gpu_score);
    let weighted = cpu_factor * game.cpu_weight + gpu_factor * game.gpu_weight;
    let fps = (game.base_fps * weighted * resolution.fps_multiplier())
        .round()
        .max(0.0) as u32;
    tracing::debug!(
        game = game.id,
        %resolution,
        cpu_factor,
        gpu_factor,
        weighted,
        fps,
        "fps estimated"
    );
    fps
}

/// Estimate for resolved catalog entries
pub fn fps_for(
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    game: &GameProfile,
    resolution: Resolution,
) -> u32 {
    fps_from_scores(cpu.score, gpu.score, game, resolution)
}

/// Estimate by catalog ids; `None` when any id is unknown
pub fn estimate_fps(
    cpu_id: &str,
    gpu_id: &str,
    game_id: &str,
    resolution: Resolution,
) -> Option<u32> {
    let resolved = (
        lookup_component(ComponentKind::Cpu, cpu_id),
        lookup_component(ComponentKind::Gpu, gpu_id),
        lookup_game(game_id),
    );
    match resolved {
        (Some(cpu), Some(gpu), Some(game)) => Some(fps_for(cpu, gpu, game, resolution)),
        _ => {
            tracing::warn!(cpu_id, gpu_id, game_id, "cannot estimate fps: insufficient input");
            None
        }
    }
}

/// Estimate every game in the table, sorted by title
pub fn fps_for_all_games(
    cpu: &HardwareComponent,
    gpu: &HardwareComponent,
    resolution: Resolution,
) -> Vec<GameFps> {
    let mut rows: Vec<GameFps> = games()
        .iter()
        .map(|game| {
            let fps = fps_for(cpu, gpu, game, resolution);
            GameFps {
                game_id: game.id,
                game_name: game.name,
                fps,
                rating: FpsRating::from_fps(fps),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.game_name.cmp(b.game_name));
    rows
}

/// Multi-game estimate by catalog ids; `None` when either id is unknown
pub fn estimate_fps_all(
    cpu_id: &str,
    gpu_id: &str,
    resolution: Resolution,
) -> Option<Vec<GameFps>> {
    let cpu = lookup_component(ComponentKind::Cpu, cpu_id)?;
    let gpu = lookup_component(ComponentKind::Gpu, gpu_id)?;
    Some(fps_for_all_games(cpu, gpu, resolution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{DemandLevel, GameCategory};

    fn reference_game() -> GameProfile {
        GameProfile {
            id: "reference",
            name: "Reference",
            release_year: 2024,
            category: GameCategory::Aaa,
            base_fps: 100.0,
            cpu_weight: 0.3,
            gpu_weight: 0.7,
            ram_required_gb: 16,
            storage_required_gb: 50,
            cpu_demand: DemandLevel::High,
            gpu_demand: DemandLevel::High,
        }
    }

    // ===== performance_factor tests =====

    #[test]
    fn test_factor_at_reference_score() {
        assert!((performance_factor(100.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_factor_diminishing_returns() {
        // doubling the score yields less than double the factor
        let f100 = performance_factor(100.0);
        let f200 = performance_factor(200.0);
        assert!(f200 > f100);
        assert!(f200 < 2.0 * f100);
    }

    #[test]
    fn test_factor_negative_clamped() {
        assert_eq!(performance_factor(-10.0), 0.0);
    }

    // ===== fps_from_scores tests =====

    #[test]
    fn test_reference_build() {
        let game = reference_game();
        assert_eq!(fps_from_scores(100.0, 100.0, &game, Resolution::Qhd), 100);
        assert_eq!(fps_from_scores(100.0, 100.0, &game, Resolution::Fhd), 120);
        assert_eq!(fps_from_scores(100.0, 100.0, &game, Resolution::Uhd), 70);
    }

    #[test]
    fn test_zero_scores() {
        let game = reference_game();
        assert_eq!(fps_from_scores(0.0, 0.0, &game, Resolution::Fhd), 0);
    }

    #[test]
    fn test_weighted_by_game() {
        let game = reference_game();
        // (0.5^0.7 * 0.3 + 1.0 * 0.7) * 100
        let expected = (0.5f64.powf(0.7) * 0.3 + 0.7) * 100.0;
        assert_eq!(
            fps_from_scores(50.0, 100.0, &game, Resolution::Qhd),
            expected.round() as u32
        );
    }

    #[test]
    fn test_gpu_heavy_game_favors_gpu() {
        let game = reference_game();
        let faster_gpu = fps_from_scores(80.0, 120.0, &game, Resolution::Qhd);
        let faster_cpu = fps_from_scores(120.0, 80.0, &game, Resolution::Qhd);
        assert!(faster_gpu > faster_cpu);
    }

    // ===== Lookup tests =====

    #[test]
    fn test_estimate_by_id() {
        let fps = estimate_fps("i5-13600k", "rtx-4070", "cyberpunk-2077", Resolution::Fhd);
        assert!(fps.is_some());
        assert!(fps.unwrap() > 0);
    }

    #[test]
    fn test_estimate_unknown_game() {
        assert!(estimate_fps("i5-13600k", "rtx-4070", "half-life-3", Resolution::Fhd).is_none());
    }

    #[test]
    fn test_estimate_unknown_hardware() {
        assert!(estimate_fps("nope", "rtx-4070", "valorant", Resolution::Fhd).is_none());
        assert!(estimate_fps("i5-13600k", "nope", "valorant", Resolution::Fhd).is_none());
    }

    #[test]
    fn test_all_games_sorted_and_complete() {
        let rows = estimate_fps_all("ryzen-7-7800x3d", "rtx-4080-super", Resolution::Qhd).unwrap();
        assert_eq!(rows.len(), games().len());
        for pair in rows.windows(2) {
            assert!(pair[0].game_name <= pair[1].game_name);
        }
        for row in &rows {
            assert_eq!(row.rating, FpsRating::from_fps(row.fps));
        }
    }

    #[test]
    fn test_all_games_unknown_cpu() {
        assert!(estimate_fps_all("nope", "rtx-4070", Resolution::Qhd).is_none());
    }

    // ===== FpsRating tests =====

    #[test]
    fn test_rating_bands() {
        assert_eq!(FpsRating::from_fps(0), FpsRating::Unplayable);
        assert_eq!(FpsRating::from_fps(29), FpsRating::Unplayable);
        assert_eq!(FpsRating::from_fps(30), FpsRating::Playable);
        assert_eq!(FpsRating::from_fps(60), FpsRating::Smooth);
        assert_eq!(FpsRating::from_fps(143), FpsRating::Smooth);
        assert_eq!(FpsRating::from_fps(144), FpsRating::HighRefresh);
    }
}
