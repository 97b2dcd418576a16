use std::collections::HashMap;

use cgmath::{EuclideanSpace, Point3, Vector3};
use voxel_world::engine_state::rendering::meshing::{chunk_origins, instance_range, stale_chunks};
use voxel_world::{BlockType, ChunkId, ChunkManager, Neighbour, TextureAtlas};

fn manager(world: (usize, usize, usize), chunk: usize) -> ChunkManager {
    let mut manager = ChunkManager::new(Vector3::new(chunk, chunk, chunk), TextureAtlas::new(2048, 256));
    manager.generate_chunks(world.0, world.1, world.2);
    manager
}

fn solid(world: (usize, usize, usize), chunk: usize, block: BlockType) -> ChunkManager {
    let mut manager = manager(world, chunk);
    let extent = manager.world_extent();
    for x in 0..extent.x {
        for y in 0..extent.y {
            for z in 0..extent.z {
                manager.set_block_global(x, y, z, block.id());
            }
        }
    }
    manager.update_all();
    manager
}

#[test]
fn global_writes_are_read_back() {
    let mut manager = manager((2, 2, 2), 8);
    assert!(manager.set_block_global(13, 2, 7, BlockType::LOG.id()));
    assert_eq!(manager.get_block_global(13, 2, 7), Some(BlockType::LOG.id()));
    assert_eq!(manager.get_block_global(13, 2, 6), Some(BlockType::AIR.id()));

    let chunk = manager.chunk(ChunkId(4)).unwrap();
    assert_eq!(chunk.position(), Point3::new(8, 0, 0));
    assert_eq!(chunk.get_block_local(5, 2, 7), Some(BlockType::LOG.id()));
}

#[test]
fn coordinates_outside_the_world_are_ignored() {
    let mut manager = manager((2, 2, 2), 8);

    assert_eq!(manager.get_block_global(16, 0, 0), None);
    assert_eq!(manager.get_block_global(-1, 0, 0), None);
    assert_eq!(manager.get_block_global(0, -8, 0), None);
    assert!(!manager.set_block_global(0, 16, 0, BlockType::STONE.id()));
    assert!(!manager.set_block_global(-3, 2, 2, BlockType::STONE.id()));
    assert_eq!(manager.chunk_from_global(-1, -1, -1), None);
    assert_eq!(manager.count_blocks(BlockType::STONE.id()), 0);
}

#[test]
fn split_global_matches_chunk_positions() {
    let manager = manager((3, 2, 2), 8);
    for (x, y, z) in [(0, 0, 0), (7, 7, 7), (8, 0, 15), (23, 9, 3)] {
        let (id, local) = manager.split_global(x, y, z).unwrap();
        let origin = manager.chunk(id).unwrap().position();
        assert_eq!(origin + local.to_vec(), Point3::new(x, y, z));
    }
    assert_eq!(manager.split_global(24, 0, 0), None);
}

#[test]
fn neighbours_are_wired_by_grid_position() {
    let manager = manager((2, 2, 2), 8);
    let chunk = manager.chunk(ChunkId(5)).unwrap();

    assert_eq!(chunk.position(), Point3::new(8, 0, 8));
    assert_eq!(chunk.neighbour(Neighbour::EAST), Some(ChunkId(1)));
    assert_eq!(chunk.neighbour(Neighbour::NORTH), Some(ChunkId(4)));
    assert_eq!(chunk.neighbour(Neighbour::ABOVE), Some(ChunkId(7)));
    assert_eq!(chunk.neighbour(Neighbour::WEST), None);
    assert_eq!(chunk.neighbour(Neighbour::SOUTH), None);
    assert_eq!(chunk.neighbour(Neighbour::BELOW), None);

    // Every link has a link back.
    for (index, chunk) in manager.chunks().iter().enumerate() {
        for direction in Neighbour::all() {
            if let Some(other) = chunk.neighbour(direction) {
                let back = manager.chunk(other).unwrap().neighbour(direction.opposite());
                assert_eq!(back, Some(ChunkId(index)));
            }
        }
    }
}

#[test]
fn chunks_are_generated_once() {
    let mut manager = manager((2, 1, 1), 4);
    manager.set_block_global(1, 1, 1, BlockType::SAND.id());

    manager.generate_chunks(3, 3, 3);
    assert_eq!(manager.chunks().len(), 2);
    assert_eq!(manager.world_size(), Vector3::new(2, 1, 1));
    assert_eq!(manager.get_block_global(1, 1, 1), Some(BlockType::SAND.id()));
}

#[test]
fn breaking_remeshes_both_sides_of_a_border() {
    let mut manager = solid((2, 1, 1), 4, BlockType::STONE);
    assert_eq!(manager.mesh_totals(), (0, 0));

    assert_eq!(manager.break_block(3, 1, 1), Some(BlockType::STONE.id()));
    assert_eq!(manager.get_block_global(3, 1, 1), Some(BlockType::AIR.id()));
    assert_eq!(manager.chunks()[0].mesh().face_count(), 5);
    assert_eq!(manager.chunks()[1].mesh().face_count(), 1);

    assert_eq!(manager.break_block(3, 1, 1), None);
    assert_eq!(manager.break_block(-1, 1, 1), None);
}

#[test]
fn placing_fills_air_only() {
    let mut manager = solid((2, 1, 1), 4, BlockType::STONE);
    manager.break_block(3, 1, 1);

    assert!(!manager.place_block(2, 1, 1, BlockType::DIRT.id()));
    assert!(manager.place_block(3, 1, 1, BlockType::DIRT.id()));
    assert_eq!(manager.get_block_global(3, 1, 1), Some(BlockType::DIRT.id()));
    assert_eq!(manager.mesh_totals(), (0, 0));

    assert!(!manager.place_block(8, 0, 0, BlockType::DIRT.id()));
}

#[test]
fn stale_chunks_track_mesh_revisions() {
    let mut manager = manager((2, 1, 1), 4);
    let mut uploaded = HashMap::new();
    assert!(stale_chunks(&uploaded, &manager).is_empty());

    manager.update_all();
    assert_eq!(stale_chunks(&uploaded, &manager), vec![ChunkId(0), ChunkId(1)]);

    for (index, chunk) in manager.chunks().iter().enumerate() {
        uploaded.insert(ChunkId(index), chunk.mesh_revision());
    }
    assert!(stale_chunks(&uploaded, &manager).is_empty());

    manager.set_block_global(6, 0, 0, BlockType::GRASS.id());
    manager.update_chunk(ChunkId(1));
    assert_eq!(stale_chunks(&uploaded, &manager), vec![ChunkId(1)]);
}

#[test]
fn config_builds_a_manager_without_atlas_pixels() {
    let mut config = voxel_world::EngineConfig::default();
    config.atlas.path = "does/not/exist.png".to_string();
    config.chunk_size = [8, 4, 8];
    config.terrain.seed = Some(99);

    let manager = ChunkManager::from_config(&config);
    assert_eq!(manager.chunk_size(), Vector3::new(8, 4, 8));
    assert_eq!(manager.seed(), 99);
    assert!(manager.atlas().image().is_none());
    assert_eq!(manager.atlas().image_size(), 2048);
}

#[test]
fn equal_local_meshes_are_drawn_at_their_chunk_origins() {
    let mut manager = manager((2, 1, 1), 4);
    manager.set_block_global(1, 1, 1, BlockType::STONE.id());
    manager.set_block_global(5, 1, 1, BlockType::STONE.id());
    manager.update_all();

    // Both meshes are chunk-local and identical; only the origin tells them apart.
    let first = manager.chunks()[0].mesh().vertices();
    let second = manager.chunks()[1].mesh().vertices();
    assert_eq!(first, second);

    let origins = chunk_origins(&manager);
    assert_eq!(origins.len(), 2);
    assert_eq!(origins[0].point(), Point3::new(0, 0, 0));
    assert_eq!(origins[1].point(), Point3::new(4, 0, 0));
    assert_eq!(bytemuck::cast_slice::<_, u8>(&origins).len(), 32);

    assert_eq!(instance_range(ChunkId(0)), 0..1);
    assert_eq!(instance_range(ChunkId(1)), 1..2);

    let world = |origin: Point3<i32>, vertex: &voxel_world::Vertex| {
        vertex.position[0] + origin.x as f32
    };
    let first_x: Vec<f32> = first.iter().map(|vertex| world(origins[0].point(), vertex)).collect();
    let second_x: Vec<f32> = second.iter().map(|vertex| world(origins[1].point(), vertex)).collect();
    assert!(first_x.iter().zip(&second_x).all(|(a, b)| b - a == 4.0));
}
