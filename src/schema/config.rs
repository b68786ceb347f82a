//! Configuration types for the weighted life arena.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Number of grids in the arena (a 3x3 arrangement).
pub const GRID_COUNT: usize = 9;

/// Grids per arena row.
pub const ARENA_SIDE: usize = 3;

/// Half-open integer band `[low, high)` tested against an environment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Inclusive lower bound.
    pub low: i32,
    /// Exclusive upper bound.
    pub high: i32,
}

impl Band {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Check whether `value` lies in `[low, high)`.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.low <= value && value < self.high
    }
}

/// Survival and birth bands for the weighted rule.
///
/// Evolution only mutates weight vectors; these thresholds stay fixed for the
/// lifetime of an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// A live cell survives when its environment falls in this band.
    pub survival: Band,
    /// A candidate cell is born when its environment falls in this band.
    pub birth: Band,
}

impl RuleThresholds {
    /// Survival on `[1, 3)`, birth on `[2, 3)`.
    pub const DEFAULT_SURVIVAL: Band = Band::new(1, 3);
    pub const DEFAULT_BIRTH: Band = Band::new(2, 3);

    /// Thresholds that, with all-ones weights, reproduce Conway's B3/S23.
    pub const fn classic() -> Self {
        Self {
            survival: Band::new(2, 4),
            birth: Band::new(3, 4),
        }
    }
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            survival: Self::DEFAULT_SURVIVAL,
            birth: Self::DEFAULT_BIRTH,
        }
    }
}

/// Mutation settings applied at each generation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Inclusive range for the number of mutation events per boundary.
    #[serde(default = "default_events")]
    pub events: (usize, usize),
    /// Inclusive range for the number of slot perturbations per event.
    #[serde(default = "default_perturbations")]
    pub perturbations: (usize, usize),
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            events: default_events(),
            perturbations: default_perturbations(),
        }
    }
}

fn default_events() -> (usize, usize) {
    (1, 5)
}
fn default_perturbations() -> (usize, usize) {
    (1, 4)
}

/// Top-level arena configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Grid width in cells.
    #[serde(default = "default_side")]
    pub width: usize,
    /// Grid height in cells.
    #[serde(default = "default_side")]
    pub height: usize,
    /// Number of running `tick()` calls per simulation step.
    #[serde(default = "default_frames_per_step")]
    pub frames_per_step: u32,
    /// Simulation steps per generation.
    #[serde(default = "default_steps_per_generation")]
    pub steps_per_generation: u32,
    /// Survival and birth bands.
    #[serde(default)]
    pub thresholds: RuleThresholds,
    /// Inclusive bounds for freshly generated weights.
    #[serde(default = "default_initial_weights")]
    pub initial_weights: (i32, i32),
    /// Half-open range of width multipliers for centre-third reseeding.
    #[serde(default = "default_reseed_multiplier")]
    pub reseed_multiplier: (usize, usize),
    /// Half-open range of width multipliers for whole-grid scattering.
    #[serde(default = "default_scatter_multiplier")]
    pub scatter_multiplier: (usize, usize),
    /// Copies granted to each rank at selection (rank 0 first).
    #[serde(default = "default_selection_slots")]
    pub selection_slots: Vec<usize>,
    /// Mutation settings.
    #[serde(default)]
    pub mutation: MutationConfig,
    /// Generation records retained by the arena.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            frames_per_step: default_frames_per_step(),
            steps_per_generation: default_steps_per_generation(),
            thresholds: RuleThresholds::default(),
            initial_weights: default_initial_weights(),
            reseed_multiplier: default_reseed_multiplier(),
            scatter_multiplier: default_scatter_multiplier(),
            selection_slots: default_selection_slots(),
            mutation: MutationConfig::default(),
            history_limit: default_history_limit(),
            random_seed: None,
        }
    }
}

// 800px window, 10px separators, 5px tiles: (800 - 4 * 10) / 3 / 5.
fn default_side() -> usize {
    50
}
fn default_frames_per_step() -> u32 {
    5
}
fn default_steps_per_generation() -> u32 {
    18
}
fn default_initial_weights() -> (i32, i32) {
    (-3, 4)
}
fn default_reseed_multiplier() -> (usize, usize) {
    (2, 6)
}
fn default_scatter_multiplier() -> (usize, usize) {
    (30, 40)
}
fn default_selection_slots() -> Vec<usize> {
    vec![3, 2, 2, 1, 1]
}
fn default_history_limit() -> usize {
    64
}

impl ArenaConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Total cells per grid.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The centre third must hold at least one cell.
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.frames_per_step == 0 {
            return Err(ConfigError::InvalidCadence);
        }
        if self.steps_per_generation == 0 {
            return Err(ConfigError::InvalidGenerationLength);
        }
        let RuleThresholds { survival, birth } = self.thresholds;
        if survival.low >= survival.high {
            return Err(ConfigError::EmptyBand("survival"));
        }
        if birth.low >= birth.high {
            return Err(ConfigError::EmptyBand("birth"));
        }
        if self.initial_weights.0 > self.initial_weights.1 {
            return Err(ConfigError::InvalidRange("initial_weights"));
        }
        if self.reseed_multiplier.0 >= self.reseed_multiplier.1 {
            return Err(ConfigError::InvalidRange("reseed_multiplier"));
        }
        if self.scatter_multiplier.0 >= self.scatter_multiplier.1 {
            return Err(ConfigError::InvalidRange("scatter_multiplier"));
        }
        if self.mutation.events.0 > self.mutation.events.1 {
            return Err(ConfigError::InvalidRange("mutation.events"));
        }
        if self.mutation.perturbations.0 > self.mutation.perturbations.1 {
            return Err(ConfigError::InvalidRange("mutation.perturbations"));
        }
        let total: usize = self.selection_slots.iter().sum();
        if total != GRID_COUNT || self.selection_slots.len() > GRID_COUNT {
            return Err(ConfigError::InvalidSelectionSlots(self.selection_slots.clone()));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be at least 3x3, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Frames per step must be non-zero")]
    InvalidCadence,
    #[error("Steps per generation must be non-zero")]
    InvalidGenerationLength,
    #[error("The {0} band is empty")]
    EmptyBand(&'static str),
    #[error("Range {0} has its lower bound above its upper bound")]
    InvalidRange(&'static str),
    #[error("Selection slots {0:?} must fill exactly 9 grids across at most 9 ranks")]
    InvalidSelectionSlots(Vec<usize>),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = ArenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size(), 2500);
    }

    #[test]
    fn test_band_is_half_open() {
        let band = Band::new(2, 3);
        assert!(!band.contains(1));
        assert!(band.contains(2));
        assert!(!band.contains(3));
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = ArenaConfig {
            width: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_selection_slots() {
        let config = ArenaConfig {
            selection_slots: vec![3, 3, 2],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSelectionSlots(_))
        ));
    }

    #[test]
    fn test_rejects_empty_band() {
        let config = ArenaConfig {
            thresholds: RuleThresholds {
                survival: Band::new(3, 3),
                birth: RuleThresholds::DEFAULT_BIRTH,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBand("survival"))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = ArenaConfig {
            random_seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ArenaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.width, config.width);
        assert_eq!(parsed.thresholds, config.thresholds);
        assert_eq!(parsed.random_seed, Some(7));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: ArenaConfig = serde_json::from_str(r#"{"width": 30}"#).unwrap();
        assert_eq!(parsed.width, 30);
        assert_eq!(parsed.height, 50);
        assert_eq!(parsed.selection_slots, vec![3, 2, 2, 1, 1]);
    }
}
