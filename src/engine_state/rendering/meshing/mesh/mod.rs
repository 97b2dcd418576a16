//! Mesh generation for voxel rendering.
//!
//! This module converts chunk block data into GPU-friendly triangle meshes. Hidden faces
//! are culled, including faces hidden by blocks in neighbouring chunks.
//!
//! # Architecture
//! - [`ChunkMesh`]: Positions, texture coordinates and indices of one chunk
//! - [`Face`]: The static per-face geometry table of a unit cube
//! - [`culled`]: The face culling mesher
//!
//! # Usage
//! ```no_run
//! use voxel_world::{BlockType, Chunk, TextureAtlas};
//! use cgmath::{Point3, Vector3};
//!
//! let atlas = TextureAtlas::new(2048, 256);
//! let mut chunk = Chunk::new(Point3::new(0, 0, 0), Vector3::new(32, 32, 32));
//! chunk.set_block_local(1, 1, 1, BlockType::STONE.id());
//! chunk.update(&atlas, &[None; 6]);
//! assert_eq!(chunk.mesh().face_count(), 6);
//! ```

mod culled;
mod face;
mod mesh;

pub use culled::culled;
pub use face::{Face, FACE_INDICES, FACE_UV_TEMPLATE};
pub use mesh::*;
