//! # Chunk Manager
//!
//! This module provides the `ChunkManager`, which owns every chunk of the world in one
//! arena and is the only place global voxel coordinates are split into a chunk and a local
//! position.
//!
//! ## Coordinates
//!
//! The world is a grid of `world_size` chunks, each `chunk_size` voxels large, with its
//! minimum corner at the origin. Global voxel coordinates are therefore valid only in
//! `[0, world_size * chunk_size)` on each axis. Negative coordinates are outside the world:
//! reads return `None`, writes are ignored and chunk lookups return `None`.
//!
//! Chunk handles are indices into the arena, ordered `(cx * world_y + cy) * world_z + cz`.
//!
//! ## Meshing
//!
//! Writes never remesh on their own. Call [`ChunkManager::update_chunk`] and
//! [`ChunkManager::update_neighbours`] after an edit, or use [`ChunkManager::break_block`]
//! and [`ChunkManager::place_block`] which do both.

use cgmath::{Point3, Vector3};
use log::{debug, info, warn};

use crate::core::{EngineConfig, TerrainConfig};
use crate::engine_state::rendering::texture_atlas::TextureAtlas;

use super::block::{block_type::BlockType, BlockId};
use super::chunk::{Chunk, ChunkId, Neighbour, NeighbourChunks};

mod terrain;

/// Owns the chunk grid and the texture atlas shared by every chunk mesh.
#[derive(Debug)]
pub struct ChunkManager {
    chunks: Vec<Chunk>,
    /// Chunks per axis, zero until `generate_chunks` runs
    world_size: Vector3<usize>,
    /// Voxels per chunk per axis
    chunk_size: Vector3<usize>,
    atlas: TextureAtlas,
    terrain: TerrainConfig,
    seed: u32,
}

impl ChunkManager {
    /// Creates an empty manager with the default terrain settings.
    ///
    /// The noise seed is taken from the terrain settings or drawn at random.
    pub fn new(chunk_size: Vector3<usize>, atlas: TextureAtlas) -> Self {
        Self::with_terrain(chunk_size, atlas, TerrainConfig::default())
    }

    /// Creates an empty manager with explicit terrain settings.
    pub fn with_terrain(chunk_size: Vector3<usize>, atlas: TextureAtlas, terrain: TerrainConfig) -> Self {
        let seed = match terrain.seed {
            Some(seed) => seed,
            None => {
                let seed = fastrand::u32(..);
                info!("No terrain seed configured, using {}", seed);
                seed
            }
        };

        Self {
            chunks: Vec::new(),
            world_size: Vector3::new(0, 0, 0),
            chunk_size: chunk_size.map(|size| size.max(1)),
            atlas,
            terrain,
            seed,
        }
    }

    /// Creates a manager from configuration and loads the shared texture atlas.
    ///
    /// A missing or malformed atlas image is logged and replaced by an atlas that only
    /// knows its cell layout, which is all meshing needs.
    pub fn from_config(config: &EngineConfig) -> Self {
        let atlas_config = &config.atlas;
        let atlas = TextureAtlas::load(&atlas_config.path, atlas_config.cell_size).unwrap_or_else(|err| {
            warn!("{}; meshing without atlas pixels", err);
            TextureAtlas::new(atlas_config.image_size, atlas_config.cell_size)
        });

        let [x, y, z] = config.chunk_size;
        Self::with_terrain(
            Vector3::new(x as usize, y as usize, z as usize),
            atlas,
            config.terrain.clone(),
        )
    }

    /// Changes the chunk size. Ignored once chunks exist.
    pub fn set_chunk_size(&mut self, chunk_size: Vector3<usize>) {
        if !self.chunks.is_empty() {
            warn!("Ignored chunk size change after the world was generated");
            return;
        }
        self.chunk_size = chunk_size.map(|size| size.max(1));
    }

    /// Allocates an `nx * ny * nz` grid of empty chunks and wires their neighbours.
    ///
    /// A world is generated once; later calls are logged and ignored.
    pub fn generate_chunks(&mut self, nx: usize, ny: usize, nz: usize) {
        if !self.chunks.is_empty() {
            warn!("Ignored generate_chunks: the world already has {} chunks", self.chunks.len());
            return;
        }

        self.world_size = Vector3::new(nx, ny, nz);
        self.chunks.reserve(nx * ny * nz);

        for cx in 0..nx {
            for cy in 0..ny {
                for cz in 0..nz {
                    let position = Point3::new(
                        (cx * self.chunk_size.x) as i32,
                        (cy * self.chunk_size.y) as i32,
                        (cz * self.chunk_size.z) as i32,
                    );
                    self.chunks.push(Chunk::new(position, self.chunk_size));
                }
            }
        }

        for cx in 0..nx as i32 {
            for cy in 0..ny as i32 {
                for cz in 0..nz as i32 {
                    let Some(id) = self.chunk_index(cx, cy, cz) else {
                        continue;
                    };
                    for neighbour in Neighbour::all() {
                        let offset = neighbour.offset();
                        if let Some(other) = self.chunk_index(cx + offset.x, cy + offset.y, cz + offset.z) {
                            self.chunks[id.0].set_neighbour(neighbour, other);
                        }
                    }
                }
            }
        }

        info!(
            "Generated {}x{}x{} chunks of {}x{}x{} voxels",
            nx, ny, nz, self.chunk_size.x, self.chunk_size.y, self.chunk_size.z
        );
    }

    /// Handle of the chunk at grid coordinates, or `None` outside the grid.
    pub fn chunk_index(&self, cx: i32, cy: i32, cz: i32) -> Option<ChunkId> {
        let in_grid = |coordinate: i32, size: usize| coordinate >= 0 && (coordinate as usize) < size;
        if !(in_grid(cx, self.world_size.x) && in_grid(cy, self.world_size.y) && in_grid(cz, self.world_size.z)) {
            return None;
        }
        let (cx, cy, cz) = (cx as usize, cy as usize, cz as usize);
        Some(ChunkId((cx * self.world_size.y + cy) * self.world_size.z + cz))
    }

    /// Splits a global voxel coordinate into the owning chunk and the local coordinate.
    pub fn split_global(&self, x: i32, y: i32, z: i32) -> Option<(ChunkId, Point3<i32>)> {
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (sx, sy, sz) = (
            self.chunk_size.x as i32,
            self.chunk_size.y as i32,
            self.chunk_size.z as i32,
        );
        let id = self.chunk_index(x / sx, y / sy, z / sz)?;
        Some((id, Point3::new(x % sx, y % sy, z % sz)))
    }

    /// Reads a block by global coordinates, or `None` outside the world.
    pub fn get_block_global(&self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        let (id, local) = self.split_global(x, y, z)?;
        self.chunks[id.0].get_block_local(local.x, local.y, local.z)
    }

    /// Writes a block by global coordinates without remeshing.
    ///
    /// Returns `false` and leaves the world untouched outside the world.
    pub fn set_block_global(&mut self, x: i32, y: i32, z: i32, block_id: BlockId) -> bool {
        match self.split_global(x, y, z) {
            Some((id, local)) => self.chunks[id.0].set_block_local(local.x, local.y, local.z, block_id),
            None => {
                debug!("Ignored block write outside the world at ({}, {}, {})", x, y, z);
                false
            }
        }
    }

    /// Handle of the chunk containing a global coordinate.
    pub fn chunk_from_global(&self, x: i32, y: i32, z: i32) -> Option<ChunkId> {
        self.split_global(x, y, z).map(|(id, _)| id)
    }

    pub fn chunk(&self, id: ChunkId) -> Option<&Chunk> {
        self.chunks.get(id.0)
    }

    pub fn chunk_mut(&mut self, id: ChunkId) -> Option<&mut Chunk> {
        self.chunks.get_mut(id.0)
    }

    /// All chunks in arena order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Resolves the neighbour handles of a chunk.
    pub fn neighbour_chunks(&self, chunk: &Chunk) -> NeighbourChunks<'_> {
        chunk
            .neighbours()
            .map(|neighbour| neighbour.and_then(|id| self.chunks.get(id.0)))
    }

    /// Rebuilds the mesh of one chunk.
    pub fn update_chunk(&mut self, id: ChunkId) {
        let Some(chunk) = self.chunks.get(id.0) else {
            return;
        };
        let neighbours = self.neighbour_chunks(chunk);
        let mesh = chunk.generate_mesh(&self.atlas, &neighbours);
        self.chunks[id.0].apply_mesh(mesh);
    }

    /// Rebuilds the meshes of every registered neighbour of a chunk.
    pub fn update_neighbours(&mut self, id: ChunkId) {
        let Some(chunk) = self.chunks.get(id.0) else {
            return;
        };
        for neighbour in chunk.neighbours().into_iter().flatten() {
            self.update_chunk(neighbour);
        }
    }

    /// Rebuilds every mesh. Only call after all block data is final.
    pub fn update_all(&mut self) {
        for index in 0..self.chunks.len() {
            self.update_chunk(ChunkId(index));
        }
    }

    /// Replaces a block with air and remeshes around it.
    ///
    /// Returns the removed block, or `None` if there was nothing to break.
    pub fn break_block(&mut self, x: i32, y: i32, z: i32) -> Option<BlockId> {
        let (id, local) = self.split_global(x, y, z)?;
        let previous = self.chunks[id.0].get_block_local(local.x, local.y, local.z)?;
        if previous == BlockType::AIR.id() {
            return None;
        }

        self.chunks[id.0].set_block_local(local.x, local.y, local.z, BlockType::AIR.id());
        self.remesh_around(id);
        debug!("Broke {} at ({}, {}, {})", previous, x, y, z);
        Some(previous)
    }

    /// Places a block into an air voxel and remeshes around it.
    pub fn place_block(&mut self, x: i32, y: i32, z: i32, block_id: BlockId) -> bool {
        let Some((id, local)) = self.split_global(x, y, z) else {
            return false;
        };
        if self.chunks[id.0].get_block_local(local.x, local.y, local.z) != Some(BlockType::AIR.id()) {
            return false;
        }

        self.chunks[id.0].set_block_local(local.x, local.y, local.z, block_id);
        self.remesh_around(id);
        debug!("Placed {} at ({}, {}, {})", block_id, x, y, z);
        true
    }

    fn remesh_around(&mut self, id: ChunkId) {
        self.update_chunk(id);
        self.update_neighbours(id);
    }

    pub fn atlas(&self) -> &TextureAtlas {
        &self.atlas
    }

    /// Chunks per axis.
    pub fn world_size(&self) -> Vector3<usize> {
        self.world_size
    }

    /// Voxels per chunk per axis.
    pub fn chunk_size(&self) -> Vector3<usize> {
        self.chunk_size
    }

    /// Voxels per axis across the whole world.
    pub fn world_extent(&self) -> Vector3<i32> {
        Vector3::new(
            (self.world_size.x * self.chunk_size.x) as i32,
            (self.world_size.y * self.chunk_size.y) as i32,
            (self.world_size.z * self.chunk_size.z) as i32,
        )
    }

    /// Total vertices and indices across all chunk meshes.
    pub fn mesh_totals(&self) -> (usize, usize) {
        self.chunks.iter().fold((0, 0), |(vertices, indices), chunk| {
            (vertices + chunk.mesh().vertex_count(), indices + chunk.mesh().index_count())
        })
    }

    pub fn terrain_config(&self) -> &TerrainConfig {
        &self.terrain
    }

    /// Seed of the noise field and tree placement.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}
