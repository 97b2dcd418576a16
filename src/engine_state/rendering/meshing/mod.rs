//! Mesh generation and GPU residency for voxel rendering.
//!
//! # Architecture
//! - `mesh/`: Converts chunk block data into face-culled triangle meshes
//! - [`MeshManager`]: Mirrors chunk meshes into per-chunk GPU buffers
//!
//! Meshes are produced on the CPU whenever the chunk manager updates a chunk. The renderer
//! only ever reads them, keyed on each chunk's mesh revision.

mod mesh;
mod renderer;

pub use mesh::*;
pub use renderer::*;
