use cgmath::{Point3, Vector3};
use voxel_world::{BlockType, ChunkManager, TerrainConfig, TextureAtlas};

const WATER_LEVEL: i32 = 6;

fn noise_world(terrain: TerrainConfig) -> ChunkManager {
    let mut manager = ChunkManager::with_terrain(Vector3::new(8, 8, 8), TextureAtlas::new(2048, 256), terrain);
    manager.generate_chunks(2, 2, 2);
    manager.generate_terrain(2, 8);
    manager
}

fn flat_world(world: (usize, usize, usize), chunk: usize, height: i32) -> ChunkManager {
    let mut manager = ChunkManager::new(Vector3::new(chunk, chunk, chunk), TextureAtlas::new(2048, 256));
    manager.generate_chunks(world.0, world.1, world.2);
    manager.generate_flat_terrain(height);
    manager
}

fn seeded(seed: u32, tree_chance: f64) -> TerrainConfig {
    TerrainConfig {
        seed: Some(seed),
        water_level: WATER_LEVEL,
        tree_chance,
        ..TerrainConfig::default()
    }
}

#[test]
fn same_seed_generates_the_same_world() {
    let first = noise_world(seeded(7, 0.2));
    let second = noise_world(seeded(7, 0.2));

    for (a, b) in first.chunks().iter().zip(second.chunks()) {
        assert_eq!(a.blocks(), b.blocks());
        assert_eq!(a.mesh(), b.mesh());
    }
}

#[test]
fn columns_are_layered_from_stone_to_surface() {
    let manager = noise_world(seeded(42, 0.0));
    let extent = manager.world_extent();
    let block = |x, y, z| BlockType::from_id(manager.get_block_global(x, y, z).unwrap()).unwrap();

    for x in 0..extent.x {
        for z in 0..extent.z {
            let surface = (0..extent.y)
                .rev()
                .find(|&y| !matches!(block(x, y, z), BlockType::AIR | BlockType::WATER))
                .unwrap();
            assert!((2..=10).contains(&surface), "column ({}, {}) at {}", x, z, surface);

            let top = if surface < WATER_LEVEL { BlockType::SAND } else { BlockType::GRASS };
            assert_eq!(block(x, surface, z), top);

            for y in 0..surface {
                let expected = if y >= surface - 3 { BlockType::DIRT } else { BlockType::STONE };
                assert_eq!(block(x, y, z), expected, "({}, {}, {})", x, y, z);
            }
            for y in surface + 1..extent.y {
                let expected = if y < WATER_LEVEL { BlockType::WATER } else { BlockType::AIR };
                assert_eq!(block(x, y, z), expected, "({}, {}, {})", x, y, z);
            }
        }
    }
}

#[test]
fn trees_grow_on_grass() {
    let terrain = TerrainConfig {
        water_level: 0,
        ..seeded(3, 1.0)
    };
    let manager = noise_world(terrain);
    assert!(manager.count_blocks(BlockType::LOG.id()) > 0);
    assert!(manager.count_blocks(BlockType::LEAF.id()) > 0);
    assert_eq!(manager.count_blocks(BlockType::WATER.id()), 0);
}

#[test]
fn flat_terrain_is_grass_over_dirt() {
    let manager = flat_world((2, 2, 2), 8, 10);
    assert_eq!(manager.count_blocks(BlockType::GRASS.id()), 256);
    assert_eq!(manager.count_blocks(BlockType::DIRT.id()), 2560);
    assert_eq!(manager.get_block_global(3, 10, 12), Some(BlockType::GRASS.id()));
    assert_eq!(manager.get_block_global(3, 11, 12), Some(BlockType::AIR.id()));
}

#[test]
fn flat_terrain_height_is_clamped_to_the_world() {
    let manager = flat_world((2, 2, 2), 8, 40);
    assert_eq!(manager.count_blocks(BlockType::GRASS.id()), 0);
    assert_eq!(manager.count_blocks(BlockType::DIRT.id()), 16 * 16 * 16);
}

#[test]
fn planted_tree_has_trunk_and_crown() {
    let mut manager = flat_world((1, 1, 1), 16, 3);
    manager.plant_tree(Point3::new(8, 3, 8), 4);

    assert_eq!(manager.count_blocks(BlockType::LOG.id()), 4);
    assert_eq!(manager.count_blocks(BlockType::LEAF.id()), 37);
    for y in 3..7 {
        assert_eq!(manager.get_block_global(8, y, 8), Some(BlockType::LOG.id()));
    }
    assert_eq!(manager.get_block_global(8, 7, 8), Some(BlockType::LEAF.id()));
    assert_eq!(manager.get_block_global(9, 7, 8), Some(BlockType::LEAF.id()));
    assert_eq!(manager.get_block_global(9, 7, 9), Some(BlockType::AIR.id()));
}

#[test]
fn trees_at_the_world_edge_are_cut_off() {
    let mut manager = flat_world((1, 1, 1), 16, 3);
    manager.plant_tree(Point3::new(0, 3, 0), 4);

    assert_eq!(manager.count_blocks(BlockType::LOG.id()), 4);
    assert!(manager.count_blocks(BlockType::LEAF.id()) < 37);
}

#[test]
fn trees_keep_clear_of_chunk_edges() {
    let terrain = TerrainConfig {
        water_level: 0,
        ..seeded(11, 1.0)
    };
    let manager = noise_world(terrain);
    let extent = manager.world_extent();
    let mut trunks = 0;

    for x in 0..extent.x {
        for z in 0..extent.z {
            for y in 1..extent.y {
                let on_ground = manager.get_block_global(x, y, z) == Some(BlockType::LOG.id())
                    && manager.get_block_global(x, y - 1, z) != Some(BlockType::LOG.id());
                if on_ground {
                    trunks += 1;
                    let (local_x, local_z) = (x % 8, z % 8);
                    assert!((1..7).contains(&local_x), "trunk at x = {}", x);
                    assert!((1..7).contains(&local_z), "trunk at z = {}", z);
                }
            }
        }
    }
    assert!(trunks > 0);
}
