//! # Core Module
//!
//! Engine-wide plumbing shared by every other module: the configuration that is loaded
//! once at startup and passed down explicitly, and the error type used by the few
//! operations that touch the filesystem.
//!
//! ## Key Components
//! - `EngineConfig`: world, terrain, atlas and picking parameters (JSON via serde)
//! - `EngineError`: failures while loading configuration or the texture atlas
//!
//! ## Usage
//! ```rust
//! use voxel_world::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "world_size": [2, 1, 2] }"#).unwrap();
//! assert_eq!(config.chunk_size, [32, 32, 32]);
//! ```

pub mod config;
pub mod error;

pub use config::{AtlasConfig, EngineConfig, PickingConfig, TerrainConfig, TerrainMode};
pub use error::EngineError;
