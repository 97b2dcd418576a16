//! Terrain generation.
//!
//! Generation runs in two passes over the whole world: every chunk's block data is written
//! first, then every chunk is meshed. Meshing a chunk reads its neighbours' border layers,
//! so no chunk may be meshed before all of them are filled.
//!
//! Column heights come from two layered noise fields multiplied together: a detailed one
//! for small bumps and a low frequency one for hills and plains. Columns are filled with
//! grass (or sand under water level), three layers of dirt and stone below. Empty voxels
//! under the water level become water.

use std::time::Instant;

use cgmath::Point3;
use log::{debug, info};

use crate::engine_state::voxels::{
    block::{block_type::BlockType, BlockId},
    noise::LayeredNoise,
};

use super::ChunkManager;

/// Layers of dirt between the surface and stone.
const DIRT_DEPTH: i32 = 3;

impl ChunkManager {
    /// Fills the world with a grass plane at `height` over dirt, then meshes it.
    pub fn generate_flat_terrain(&mut self, height: i32) {
        let started = Instant::now();
        let height = height.min(self.world_extent().y);
        let size = self.chunk_size;

        for index in 0..self.chunks.len() {
            let chunk = &mut self.chunks[index];
            let origin_y = chunk.position().y;
            for x in 0..size.x as i32 {
                for z in 0..size.z as i32 {
                    for y in 0..size.y as i32 {
                        let voxel_y = origin_y + y;
                        if voxel_y == height {
                            chunk.set_block_local(x, y, z, BlockType::GRASS.id());
                        } else if voxel_y < height {
                            chunk.set_block_local(x, y, z, BlockType::DIRT.id());
                        }
                    }
                }
            }
        }

        self.update_all();
        info!("Generated flat terrain at height {} in {:?}", height, started.elapsed());
    }

    /// Fills the world from the noise height field, plants trees, then meshes it.
    ///
    /// Column heights lie in `[min_amplitude, min_amplitude + max_amplitude]`, clamped to
    /// the world height. The same seed and amplitudes always produce the same blocks.
    pub fn generate_terrain(&mut self, min_amplitude: i32, max_amplitude: i32) {
        let started = Instant::now();
        let detail = LayeredNoise::new(self.seed, self.terrain.detail_noise);
        let macro_field = LayeredNoise::new(self.seed, self.terrain.macro_noise);
        let mut rng = fastrand::Rng::with_seed(self.seed as u64);

        let size = self.chunk_size;
        let max_height = self.world_extent().y;
        let water_level = self.terrain.water_level;
        let tree_chance = self.terrain.tree_chance;
        let mut trees = 0usize;

        for index in 0..self.chunks.len() {
            let origin = self.chunks[index].position();

            for x in 0..size.x as i32 {
                for z in 0..size.z as i32 {
                    let sample_x = (origin.x + x) as f64 / size.x as f64;
                    let sample_z = (origin.z + z) as f64 / size.z as f64;
                    let result = detail.sample2(sample_x, sample_z) * macro_field.sample2(sample_x, sample_z);
                    let height = ((result * max_amplitude as f64 + min_amplitude as f64) as i32).min(max_height);

                    for y in 0..size.y as i32 {
                        let voxel_y = origin.y + y;

                        if voxel_y > height {
                            // Above the surface only water is written, so trees from
                            // earlier columns survive.
                            if voxel_y < water_level {
                                self.chunks[index].set_block_local(x, y, z, BlockType::WATER.id());
                            }
                        } else if voxel_y == height {
                            if voxel_y < water_level {
                                self.chunks[index].set_block_local(x, y, z, BlockType::SAND.id());
                                continue;
                            }

                            self.chunks[index].set_block_local(x, y, z, BlockType::GRASS.id());

                            let inside = x > 0 && x + 1 < size.x as i32 && z > 0 && z + 1 < size.z as i32;
                            if rng.f64() < tree_chance && inside {
                                let trunk_height = self.trunk_height(&mut rng);
                                self.plant_tree(Point3::new(origin.x + x, height, origin.z + z), trunk_height);
                                trees += 1;
                            }
                        } else if voxel_y > height - 1 - DIRT_DEPTH {
                            self.chunks[index].set_block_local(x, y, z, BlockType::DIRT.id());
                        } else {
                            self.chunks[index].set_block_local(x, y, z, BlockType::STONE.id());
                        }
                    }
                }
            }
        }

        debug!("Filled {} chunks and planted {} trees", self.chunks.len(), trees);

        self.update_all();
        info!(
            "Generated terrain with seed {} (amplitude {}..{}) in {:?}",
            self.seed,
            min_amplitude,
            min_amplitude + max_amplitude,
            started.elapsed()
        );
    }

    fn trunk_height(&self, rng: &mut fastrand::Rng) -> i32 {
        let [low, high] = self.terrain.trunk_height;
        if high <= low {
            return low;
        }
        rng.i32(low..=high)
    }

    /// Writes a log trunk up from `base` and a leaf crown around its top.
    ///
    /// Writes go through the global setter and may land in neighbouring chunks.
    pub fn plant_tree(&mut self, base: Point3<i32>, trunk_height: i32) {
        let log = BlockType::LOG.id();
        let leaf = BlockType::LEAF.id();

        for i in 0..trunk_height {
            self.set_block_global(base.x, base.y + i, base.z, log);
        }

        for (x, y, z) in crown_offsets() {
            self.set_block_global(base.x + x, base.y + y + trunk_height, base.z + z, leaf);
        }

        for (x, z) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            self.set_block_global(base.x + x, base.y + trunk_height, base.z + z, leaf);
        }
    }

    /// Number of voxels holding `block`, for diagnostics and tests.
    pub fn count_blocks(&self, block: BlockId) -> usize {
        self.chunks
            .iter()
            .map(|chunk| chunk.blocks().iter().filter(|id| **id == block).count())
            .sum()
    }
}

/// Leaf positions relative to the top of the trunk: two tapering 5x5 layers and a cap.
fn crown_offsets() -> impl Iterator<Item = (i32, i32, i32)> {
    (-2i32..=2).flat_map(|x| {
        (-2i32..=0).flat_map(move |y| {
            (-2i32..=2).filter_map(move |z| {
                let trunk = x == 0 && z == 0 && y < 0;
                let corner = y == -1 && (x.abs() == 2 || z.abs() == 2);
                let cap = y == 0 && (x != 0 || z != 0);
                (!(trunk || corner || cap)).then_some((x, y, z))
            })
        })
    })
}
