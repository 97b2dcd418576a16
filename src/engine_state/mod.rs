//! # Engine State Module
//!
//! The engine proper, independent of windowing and the frame loop.
//!
//! ## Key Components
//!
//! * `voxels` - Blocks, chunks, the chunk manager, terrain generation and picking
//! * `rendering` - The texture atlas, chunk meshing and GPU upload of meshes
//!
//! Voxel data is the source of truth. Meshes are derived from it on the CPU whenever a
//! chunk is updated, and the renderer only mirrors them onto the GPU.

pub mod rendering;
pub mod voxels;
