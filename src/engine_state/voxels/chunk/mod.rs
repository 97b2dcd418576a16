//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size, axis-aligned box of block ids
//! together with the mesh of its visible faces.
//!
//! ## Storage
//!
//! Blocks are stored densely, one `BlockId` per voxel, in a flat vector indexed as
//! `(x * size_y + y) * size_z + z`. Air is id `0`, so a freshly created chunk is all zeros.
//!
//! ## Meshing
//!
//! Writing blocks never remeshes. Callers batch their writes and then call
//! [`Chunk::update`] (or the chunk manager's `update_chunk`) once, which rebuilds the whole
//! mesh from the block data and the border layers of the neighbouring chunks.

use cgmath::{Point3, Vector3};
use log::debug;

use crate::engine_state::rendering::{
    meshing::{culled, ChunkMesh},
    texture_atlas::TextureAtlas,
};

use super::block::BlockId;

mod neighbour;

pub use neighbour::{ChunkId, Neighbour, NeighbourChunks};

/// A fixed-size region of the voxel world and the mesh of its visible faces.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// World-space position of the chunk's minimum corner, in voxels.
    position: Point3<i32>,

    /// Number of voxels along each axis.
    size: Vector3<usize>,

    /// Block ids in `(x * size_y + y) * size_z + z` order.
    blocks: Vec<BlockId>,

    /// Arena handles of the face-adjacent chunks, indexed by `Neighbour as usize`.
    neighbours: [Option<ChunkId>; 6],

    /// Mesh built by the last update.
    mesh: ChunkMesh,

    /// Incremented every time a new mesh is applied.
    mesh_revision: u64,
}

impl Chunk {
    /// Creates a new chunk filled with air.
    ///
    /// # Arguments
    /// * `position` - World-space position of the chunk's minimum corner
    /// * `size` - Number of voxels along each axis
    pub fn new(position: Point3<i32>, size: Vector3<usize>) -> Self {
        Self::solid(position, size, 0)
    }

    /// Creates a new chunk with every voxel set to `block_id`.
    pub fn solid(position: Point3<i32>, size: Vector3<usize>, block_id: BlockId) -> Self {
        Chunk {
            position,
            size,
            blocks: vec![block_id; size.x * size.y * size.z],
            neighbours: [None; 6],
            mesh: ChunkMesh::new(),
            mesh_revision: 0,
        }
    }

    pub fn position(&self) -> Point3<i32> {
        self.position
    }

    pub fn size(&self) -> Vector3<usize> {
        self.size
    }

    /// Block ids in storage order.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Writes a block at local coordinates.
    ///
    /// Out-of-bounds writes are ignored and return `false`. The mesh is not rebuilt.
    pub fn set_block_local(&mut self, x: i32, y: i32, z: i32, block_id: BlockId) -> bool {
        match self.index3d(x, y, z) {
            Some(index) => {
                self.blocks[index] = block_id;
                true
            }
            None => {
                debug!(
                    "Ignored out of bounds block write at ({}, {}, {}) in chunk {:?}",
                    x, y, z, self.position
                );
                false
            }
        }
    }

    /// Reads the block at local coordinates, or `None` when they fall outside the chunk.
    pub fn get_block_local(&self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        self.index3d(x, y, z).map(|index| self.blocks[index])
    }

    /// Reads an in-bounds block.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the chunk.
    pub(crate) fn block(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[(x * self.size.y + y) * self.size.z + z]
    }

    /// Records the chunk adjacent in direction `neighbour`.
    pub fn set_neighbour(&mut self, neighbour: Neighbour, chunk: ChunkId) {
        self.neighbours[neighbour as usize] = Some(chunk);
    }

    pub fn neighbour(&self, neighbour: Neighbour) -> Option<ChunkId> {
        self.neighbours[neighbour as usize]
    }

    /// All neighbour handles, indexed by `Neighbour as usize`.
    pub fn neighbours(&self) -> [Option<ChunkId>; 6] {
        self.neighbours
    }

    /// Builds a mesh from the current block data without touching the stored mesh.
    pub fn generate_mesh(&self, atlas: &TextureAtlas, neighbours: &NeighbourChunks<'_>) -> ChunkMesh {
        culled(self, neighbours, atlas)
    }

    /// Replaces the stored mesh.
    pub fn apply_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = mesh;
        self.mesh_revision += 1;
    }

    /// Rebuilds the mesh from the block data and the given neighbour chunks.
    pub fn update(&mut self, atlas: &TextureAtlas, neighbours: &NeighbourChunks<'_>) {
        let mesh = self.generate_mesh(atlas, neighbours);
        self.apply_mesh(mesh);
    }

    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Number of meshes applied so far; renderers compare it to skip unchanged chunks.
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    fn index3d(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let in_bounds = |coordinate: i32, size: usize| coordinate >= 0 && (coordinate as usize) < size;
        if in_bounds(x, self.size.x) && in_bounds(y, self.size.y) && in_bounds(z, self.size.z) {
            Some((x as usize * self.size.y + y as usize) * self.size.z + z as usize)
        } else {
            None
        }
    }
}
