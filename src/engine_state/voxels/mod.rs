//! # Voxel World
//!
//! This module contains the data side of the engine: block types, chunks, the chunk
//! manager that owns them, terrain generation and block picking.
//!
//! ## Architecture
//!
//! * **Block**: Block ids, their faces, texture cells and break times
//! * **Chunk**: A fixed-size box of block ids and the mesh of its visible faces
//! * **Chunk Manager**: The chunk arena, global coordinates, terrain and edits
//! * **Noise**: Layered simplex noise feeding the terrain height field
//! * **Raycast**: Picking the block under the crosshair
//!
//! ## Data Flow
//!
//! 1. The chunk manager allocates the chunk grid and wires neighbours
//! 2. Terrain generation writes block ids into every chunk
//! 3. Every chunk is meshed once all block data is final
//! 4. Edits write through the manager and remesh the touched chunk and its neighbours

pub mod block;
pub mod chunk;
pub mod chunk_manager;
pub mod noise;
pub mod raycast;
