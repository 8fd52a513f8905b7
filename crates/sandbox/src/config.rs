//! Game configuration
//!
//! Everything here can be overridden from `sandbox.toml`; missing keys keep
//! their defaults.

use serde::{Deserialize, Serialize};

use sandbox_engine::config::Config;
use sandbox_engine::physics::movement::{PlayerMovementConfig, VehicleConfig};

/// Default config file, relative to the working directory
pub const CONFIG_PATH: &str = "sandbox.toml";

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Terrain generation
    pub terrain: TerrainConfig,

    /// Headless simulation
    pub simulation: SimulationConfig,

    /// Level layout
    pub level: LevelConfig,

    /// On-foot movement tuning
    pub player: PlayerMovementConfig,

    /// Vehicle tuning
    pub vehicle: VehicleConfig,
}

impl Config for GameConfig {}

/// Procedural terrain parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Vertices along X
    pub columns: usize,

    /// Vertices along Z
    pub rows: usize,

    /// Vertex spacing (meters)
    pub cell_size: f32,

    /// Peak hill height (meters)
    pub amplitude: f32,

    /// Number of sine octaves
    pub octaves: u32,

    /// Spatial frequency of the first octave (radians/meter)
    pub base_frequency: f32,

    /// Radius around the origin kept perfectly flat for level content
    pub flat_radius: f32,

    /// Distance over which hills fade in past the flat radius
    pub blend_width: f32,

    /// RNG seed
    pub seed: u64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            columns: 129,
            rows: 129,
            cell_size: 2.0,
            amplitude: 6.0,
            octaves: 4,
            base_frequency: 0.02,
            flat_radius: 60.0,
            blend_width: 25.0,
            seed: 7,
        }
    }
}

/// Headless simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks to run
    pub ticks: u32,

    /// Fixed tick length (seconds)
    pub delta_time: f32,

    /// Log a state summary every this many ticks
    pub report_interval: u32,

    /// Log every registry hit
    pub debug_collisions: bool,

    /// Back-to-back runs; the level is reset and both movers respawn between them
    pub runs: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 1200,
            delta_time: 1.0 / 60.0,
            report_interval: 120,
            debug_collisions: false,
            runs: 1,
        }
    }
}

/// Level layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Distance from the origin to the inner face of each perimeter wall
    pub arena_half_extent: f32,

    /// Trees in the grove
    pub tree_count: usize,

    /// Seed for tree placement
    pub grove_seed: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            arena_half_extent: 40.0,
            tree_count: 12,
            grove_seed: 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_engine::config::ConfigFormat;

    #[test]
    fn test_nested_overrides_keep_other_defaults() {
        let text = "[simulation]\nticks = 10\n\n[player]\nwalk_speed = 3.5\n";
        let config = GameConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();

        assert_eq!(config.simulation.ticks, 10);
        assert!((config.player.walk_speed - 3.5).abs() < f32::EPSILON);
        assert_eq!(config.terrain, TerrainConfig::default());
        assert_eq!(config.vehicle, VehicleConfig::default());
    }

    #[test]
    fn test_toml_text_reloads_to_same_config() {
        let text = GameConfig::default().to_string_with_format(ConfigFormat::Toml).unwrap();
        let parsed = GameConfig::from_str_with_format(&text, ConfigFormat::Toml).unwrap();
        assert_eq!(parsed, GameConfig::default());
    }
}
