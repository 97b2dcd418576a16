//! Mesh data structures and operations for voxel rendering.
//!
//! A [`ChunkMesh`] holds the flat position, texture coordinate and index arrays of one
//! chunk, in the layout a vertex buffer expects. Faces are appended one at a time and
//! the whole mesh is rebuilt whenever the chunk changes.

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::block::block_side::BlockSide;

use super::face::Face;

/// Triangle mesh of the visible faces of one chunk, in chunk-local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Vertex positions, three floats per vertex
    pub positions: Vec<f32>,
    /// Atlas texture coordinates, two floats per vertex
    pub tex_coords: Vec<f32>,
    /// Triangle list indices into the vertex arrays
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one block face.
    ///
    /// # Arguments
    /// * `side` - Which face of the voxel to emit
    /// * `x`, `y`, `z` - Local coordinates of the voxel
    /// * `uv` - The four UV corners of the face, as returned by the block catalog
    pub fn add_face(&mut self, side: BlockSide, x: usize, y: usize, z: usize, uv: [f32; 8]) {
        let base = self.vertex_count() as u32;
        for corner in Face::of(side).translated(x, y, z) {
            self.positions.extend_from_slice(&corner);
        }
        self.tex_coords.extend_from_slice(&uv);
        self.indices.extend_from_slice(&Face::indices(base));
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of quads in the mesh.
    pub fn face_count(&self) -> usize {
        self.vertex_count() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Interleaves positions and texture coordinates into GPU vertices.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.tex_coords.chunks_exact(2))
            .map(|(position, uv)| Vertex::new([position[0], position[1], position[2]], [uv[0], uv[1]]))
            .collect()
    }
}
