//! # Engine Configuration
//!
//! All tunables of the world live in one [`EngineConfig`] that is constructed once at
//! startup and handed to the systems that need it. Every field has a default, so a
//! configuration file only has to name the values it changes:
//!
//! ```json
//! {
//!     "world_size": [4, 2, 4],
//!     "terrain": { "seed": 1337, "mode": "flat", "flat_height": 20 }
//! }
//! ```

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::engine_state::voxels::noise::NoiseOptions;

use super::EngineError;

/// Environment variable naming the JSON configuration file read by [`EngineConfig::from_env`].
pub const CONFIG_PATH_ENV: &str = "VOXEL_WORLD_CONFIG";

/// Top level configuration of the voxel world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Size of a single chunk in voxels along x, y and z.
    pub chunk_size: [u32; 3],
    /// Number of chunks along x, y and z.
    pub world_size: [u32; 3],
    /// Where and how the shared texture atlas is loaded.
    pub atlas: AtlasConfig,
    /// Terrain generation parameters.
    pub terrain: TerrainConfig,
    /// Block picking parameters.
    pub picking: PickingConfig,
    /// Block names placed into the hotbar slots, in order.
    pub hotbar: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: [32, 32, 32],
            world_size: [16, 4, 16],
            atlas: AtlasConfig::default(),
            terrain: TerrainConfig::default(),
            picking: PickingConfig::default(),
            hotbar: ["dirt", "grass", "stone", "log", "leaf", "planks", "sand"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        info!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the file named by [`CONFIG_PATH_ENV`], falling back to the defaults when the
    /// variable is unset or the file cannot be used.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(&path).unwrap_or_else(|err| {
                warn!("{}; using default configuration", err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

/// Location and cell layout of the texture atlas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Path of the atlas image.
    pub path: String,
    /// Width (and height) of the atlas image in pixels.
    pub image_size: u32,
    /// Width (and height) of a single block texture in pixels.
    pub cell_size: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            path: "resources/textures/textureAtlas.png".to_string(),
            image_size: 2048,
            cell_size: 256,
        }
    }
}

/// Which terrain generator fills the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainMode {
    /// Layered simplex height field with water, sand and trees.
    Noise,
    /// A flat grass plane over dirt.
    Flat,
}

/// Terrain generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub mode: TerrainMode,
    /// Lowest possible column height.
    pub min_amplitude: i32,
    /// Height range added on top of `min_amplitude` by the noise field.
    pub max_amplitude: i32,
    /// Surface height used by [`TerrainMode::Flat`].
    pub flat_height: i32,
    /// Empty voxels below this height are filled with water.
    pub water_level: i32,
    /// Noise and tree seed. A random seed is drawn when unset.
    pub seed: Option<u32>,
    /// Probability that an eligible grass column grows a tree.
    pub tree_chance: f64,
    /// Inclusive range of tree trunk heights.
    pub trunk_height: [i32; 2],
    /// High frequency detail layer.
    pub detail_noise: NoiseOptions,
    /// Low frequency macro layer.
    pub macro_noise: NoiseOptions,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            mode: TerrainMode::Noise,
            min_amplitude: 32,
            max_amplitude: 96,
            flat_height: 32,
            water_level: 34,
            seed: None,
            tree_chance: 0.01,
            trunk_height: [4, 7],
            detail_noise: NoiseOptions {
                octaves: 6,
                frequency: 0.25,
                roughness: 0.5,
                redistribution: 1.0,
            },
            macro_noise: NoiseOptions {
                octaves: 4,
                frequency: 0.1,
                roughness: 0.48,
                redistribution: 2.5,
            },
        }
    }
}

/// Ray marching parameters used for selecting blocks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickingConfig {
    /// Maximum distance from the eye a block can be selected at.
    pub reach: f32,
    /// Length of a single ray march step.
    pub step: f32,
}

impl Default for PickingConfig {
    fn default() -> Self {
        Self {
            reach: 6.0,
            step: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "world_size": [2, 1, 2] }"#).unwrap();
        assert_eq!(config.world_size, [2, 1, 2]);
        assert_eq!(config.chunk_size, [32, 32, 32]);
        assert_eq!(config.terrain.water_level, 34);
        assert_eq!(config.hotbar.len(), 7);
    }

    #[test]
    fn terrain_mode_is_lowercase() {
        let config =
            EngineConfig::from_json(r#"{ "terrain": { "mode": "flat", "flat_height": 7 } }"#)
                .unwrap();
        assert_eq!(config.terrain.mode, TerrainMode::Flat);
        assert_eq!(config.terrain.flat_height, 7);
        assert_eq!(config.terrain.detail_noise.octaves, 6);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = EngineConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
