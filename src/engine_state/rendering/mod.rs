//! Rendering support for the voxel engine.
//!
//! This module holds everything between block data and the GPU: the texture atlas layout,
//! the chunk mesher, the vertex format and the GPU upload of meshes and atlas pixels.
//! Window and surface management belong to the host application.

pub mod meshing;
pub mod texture;
pub mod texture_atlas;
mod vertex;

// Re-export commonly used types
pub use meshing::{ChunkMesh, MeshManager};
pub use texture::AtlasTexture;
pub use texture_atlas::TextureAtlas;
pub use vertex::Vertex;
