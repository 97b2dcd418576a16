#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A chunked voxel world: procedural terrain, face-culled chunk meshing and block editing,
//! with the GPU upload of meshes and atlas pixels built on WGPU.
//!
//! ## Key Modules
//!
//! * `application_state` - Application states, the state stack and input tracking
//! * `core` - Configuration and errors
//! * `engine_state` - Voxel data, chunk management, terrain, meshing and GPU upload
//!
//! ## Architecture
//!
//! The [`ChunkManager`] owns every [`Chunk`] in one arena and is the only place global
//! voxel coordinates are split into chunks. Chunks refer to their neighbours by
//! [`ChunkId`]. Meshes are rebuilt synchronously after block data changes and mirrored to
//! the GPU by the [`MeshManager`].
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector3;
//! use voxel_world::{BlockType, ChunkManager, TextureAtlas};
//!
//! let mut world = ChunkManager::new(Vector3::new(16, 16, 16), TextureAtlas::new(2048, 256));
//! world.generate_chunks(2, 1, 2);
//! world.generate_flat_terrain(4);
//! assert_eq!(world.get_block_global(20, 4, 3), Some(BlockType::GRASS.id()));
//! assert_eq!(world.get_block_global(-1, 4, 3), None);
//! ```

use std::path::Path;

use log::info;

pub mod application_state;
pub mod core;
pub mod engine_state;

pub use crate::application_state::{
    input_manager::InputManager,
    input_state::{ProcessedInputState, RawInputState},
    playing::Playing,
    State, StateManager,
};
pub use crate::core::{AtlasConfig, EngineConfig, EngineError, PickingConfig, TerrainConfig, TerrainMode};
pub use crate::engine_state::rendering::{
    meshing::{culled, Face, FACE_INDICES, FACE_UV_TEMPLATE},
    AtlasTexture, ChunkMesh, MeshManager, TextureAtlas, Vertex,
};
pub use crate::engine_state::voxels::{
    block::{
        block_breaker::{BlockBreaker, BreakProgress},
        block_side::BlockSide,
        block_type::BlockType,
        break_time, texture_coords, BlockId,
    },
    chunk::{Chunk, ChunkId, Neighbour, NeighbourChunks},
    chunk_manager::ChunkManager,
    noise::{LayeredNoise, NoiseOptions},
    raycast::{cast_ray, placement_target, Ray, RayHit},
};

/// Initializes logging, generates the world and runs one frame.
///
/// The configuration is read from `config_path` when given, otherwise from the file named
/// by `VOXEL_WORLD_CONFIG`, otherwise the defaults are used.
pub fn run(config_path: Option<impl AsRef<Path>>) -> Result<(), EngineError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();
    info!("Logger initialized");

    let config = match config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env(),
    };

    let mut states = StateManager::new();
    states.push(Box::new(Playing::new(config)));

    let mut input = InputManager::new();
    states.update(&input.get_and_reset_processed_input(), 0.0);

    info!("Ran first frame with {} active state(s)", states.len());
    Ok(())
}
