// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The user's in-progress build choices
//!
//! A selection lives only as long as one command invocation. It is the layer
//! that turns "nothing chosen" and "unknown id" into errors before anything
//! reaches the estimators.

use serde::Serialize;

use crate::config::DefaultsConfig;
use crate::error::{Result, RigError};
use crate::estimate::{
    bottleneck_for, fps_for, fps_for_all_games, psu_for, BottleneckResult, ExtraLoad, GameFps,
    Purpose, PsuRecommendation, RamSize, Resolution,
};
use crate::hardware::{lookup_component, lookup_game, ComponentKind, GameProfile, HardwareComponent};

/// Choices made so far
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSelection {
    pub cpu_id: Option<String>,
    pub gpu_id: Option<String>,
    pub game_id: Option<String>,
    pub resolution: Resolution,
    pub ram: RamSize,
    pub purpose: Purpose,
    pub extra_load: ExtraLoad,
}

impl Default for BuildSelection {
    fn default() -> Self {
        Self::from_defaults(&DefaultsConfig::default())
    }
}

impl BuildSelection {
    /// Empty selection using configured context defaults
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            cpu_id: None,
            gpu_id: None,
            game_id: None,
            resolution: defaults.resolution,
            ram: defaults.ram,
            purpose: defaults.purpose,
            extra_load: defaults.extra_load,
        }
    }

    pub fn require_cpu(&self) -> Result<&'static HardwareComponent> {
        require_component(ComponentKind::Cpu, self.cpu_id.as_deref())
    }

    pub fn require_gpu(&self) -> Result<&'static HardwareComponent> {
        require_component(ComponentKind::Gpu, self.gpu_id.as_deref())
    }

    pub fn require_game(&self) -> Result<&'static GameProfile> {
        let id = self
            .game_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| RigError::IncompleteSelection("game".to_string()))?;
        lookup_game(id).ok_or_else(|| RigError::UnknownGame(id.to_string()))
    }

    pub fn bottleneck(&self) -> Result<BottleneckResult> {
        let cpu = self.require_cpu()?;
        let gpu = self.require_gpu()?;
        Ok(bottleneck_for(
            cpu,
            gpu,
            self.purpose,
            self.resolution,
            self.ram,
        ))
    }

    pub fn fps(&self) -> Result<u32> {
        let cpu = self.require_cpu()?;
        let gpu = self.require_gpu()?;
        let game = self.require_game()?;
        Ok(fps_for(cpu, gpu, game, self.resolution))
    }

    pub fn fps_all_games(&self) -> Result<Vec<GameFps>> {
        let cpu = self.require_cpu()?;
        let gpu = self.require_gpu()?;
        Ok(fps_for_all_games(cpu, gpu, self.resolution))
    }

    pub fn psu(&self) -> Result<PsuRecommendation> {
        let cpu = self.require_cpu()?;
        let gpu = self.require_gpu()?;
        Ok(psu_for(cpu, gpu, self.extra_load))
    }
}

fn require_component(kind: ComponentKind, id: Option<&str>) -> Result<&'static HardwareComponent> {
    let id = id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| RigError::IncompleteSelection(kind.to_string().to_lowercase()))?;
    lookup_component(kind, id).ok_or_else(|| RigError::UnknownComponent {
        kind,
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection() -> BuildSelection {
        BuildSelection {
            cpu_id: Some("i5-13600k".to_string()),
            gpu_id: Some("rtx-4070".to_string()),
            game_id: Some("valorant".to_string()),
            ..BuildSelection::default()
        }
    }

    #[test]
    fn test_default_uses_config_defaults() {
        let defaults = DefaultsConfig::default();
        let sel = BuildSelection::default();
        assert_eq!(sel.resolution, defaults.resolution);
        assert_eq!(sel.purpose, defaults.purpose);
        assert!(sel.cpu_id.is_none());
    }

    #[test]
    fn test_missing_cpu() {
        let sel = BuildSelection {
            cpu_id: None,
            ..full_selection()
        };
        match sel.bottleneck() {
            Err(RigError::IncompleteSelection(field)) => assert_eq!(field, "cpu"),
            other => panic!("expected incomplete selection, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_gpu_counts_as_missing() {
        let sel = BuildSelection {
            gpu_id: Some("  ".to_string()),
            ..full_selection()
        };
        assert!(matches!(
            sel.psu(),
            Err(RigError::IncompleteSelection(field)) if field == "gpu"
        ));
    }

    #[test]
    fn test_unknown_gpu() {
        let sel = BuildSelection {
            gpu_id: Some("voodoo-2".to_string()),
            ..full_selection()
        };
        match sel.bottleneck() {
            Err(RigError::UnknownComponent { kind, id }) => {
                assert_eq!(kind, ComponentKind::Gpu);
                assert_eq!(id, "voodoo-2");
            }
            other => panic!("expected unknown component, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_game_only_matters_for_fps() {
        let sel = BuildSelection {
            game_id: None,
            ..full_selection()
        };
        assert!(sel.bottleneck().is_ok());
        assert!(sel.psu().is_ok());
        assert!(sel.fps_all_games().is_ok());
        assert!(matches!(sel.fps(), Err(RigError::IncompleteSelection(_))));
    }

    #[test]
    fn test_unknown_game() {
        let sel = BuildSelection {
            game_id: Some("half-life-3".to_string()),
            ..full_selection()
        };
        assert!(matches!(sel.fps(), Err(RigError::UnknownGame(_))));
    }

    #[test]
    fn test_full_selection_computes() {
        let sel = full_selection();
        assert!(sel.fps().unwrap() > 0);
        assert_eq!(sel.psu().unwrap().recommended_watts % 50, 0);
    }
}
