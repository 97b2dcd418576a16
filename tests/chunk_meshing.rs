use cgmath::{Point3, Vector3};
use voxel_world::{texture_coords, BlockSide, BlockType, Chunk, ChunkId, ChunkManager, TextureAtlas};

fn atlas() -> TextureAtlas {
    TextureAtlas::new(2048, 256)
}

fn manager(world: (usize, usize, usize), chunk: usize) -> ChunkManager {
    let mut manager = ChunkManager::new(Vector3::new(chunk, chunk, chunk), atlas());
    manager.generate_chunks(world.0, world.1, world.2);
    manager
}

fn fill(manager: &mut ChunkManager, min: (i32, i32, i32), max: (i32, i32, i32), block: BlockType) {
    for x in min.0..max.0 {
        for y in min.1..max.1 {
            for z in min.2..max.2 {
                assert!(manager.set_block_global(x, y, z, block.id()));
            }
        }
    }
}

#[test]
fn corner_block_without_neighbours_hides_border_faces() {
    let mut chunk = Chunk::new(Point3::new(0, 0, 0), Vector3::new(32, 32, 32));
    chunk.set_block_local(0, 0, 0, BlockType::STONE.id());
    chunk.update(&atlas(), &[None; 6]);

    // RIGHT, TOP and FRONT face into the chunk; the other three touch the world edge.
    assert_eq!(chunk.mesh().face_count(), 3);
    assert_eq!(chunk.mesh().index_count(), 18);
}

#[test]
fn interior_block_emits_six_faces() {
    let mut chunk = Chunk::new(Point3::new(0, 0, 0), Vector3::new(32, 32, 32));
    chunk.set_block_local(1, 1, 1, BlockType::STONE.id());
    chunk.update(&atlas(), &[None; 6]);

    let mesh = chunk.mesh();
    assert_eq!(mesh.face_count(), 6);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.index_count(), 36);
    assert_eq!(mesh.tex_coords.len(), 48);
    assert_eq!(&mesh.indices[..12], &[0, 1, 3, 3, 1, 2, 4, 5, 7, 7, 5, 6]);
}

#[test]
fn faces_are_emitted_left_first_with_catalog_uvs() {
    let atlas = atlas();
    let mut chunk = Chunk::new(Point3::new(0, 0, 0), Vector3::new(4, 4, 4));
    chunk.set_block_local(1, 1, 1, BlockType::GRASS.id());
    chunk.update(&atlas, &[None; 6]);

    let mesh = chunk.mesh();
    let left = texture_coords(BlockType::GRASS.id(), BlockSide::LEFT, &atlas);
    let top = texture_coords(BlockType::GRASS.id(), BlockSide::TOP, &atlas);
    assert_eq!(&mesh.tex_coords[..8], &left);
    // LEFT, RIGHT, BOTTOM, TOP: the fourth face is the top.
    assert_eq!(&mesh.tex_coords[24..32], &top);

    // Left face of voxel (1, 1, 1) lies on the x = 1 plane.
    for corner in mesh.positions[..12].chunks(3) {
        assert_eq!(corner[0], 1.0);
    }
}

#[test]
fn shared_faces_between_solid_blocks_are_culled() {
    let mut chunk = Chunk::new(Point3::new(0, 0, 0), Vector3::new(8, 8, 8));
    chunk.set_block_local(2, 2, 2, BlockType::DIRT.id());
    chunk.set_block_local(3, 2, 2, BlockType::STONE.id());
    chunk.update(&atlas(), &[None; 6]);

    assert_eq!(chunk.mesh().face_count(), 10);
}

#[test]
fn cavity_in_solid_chunk_exposes_six_faces() {
    let mut chunk = Chunk::solid(Point3::new(0, 0, 0), Vector3::new(32, 32, 32), BlockType::STONE.id());
    chunk.update(&atlas(), &[None; 6]);
    assert!(chunk.mesh().is_empty());

    assert!(chunk.set_block_local(5, 5, 5, BlockType::AIR.id()));
    chunk.update(&atlas(), &[None; 6]);
    assert_eq!(chunk.mesh().face_count(), 6);
    assert_eq!(chunk.mesh().vertex_count(), 24);
}

#[test]
fn world_edges_stay_closed() {
    let mut manager = manager((1, 1, 1), 4);
    fill(&mut manager, (0, 0, 0), (4, 4, 4), BlockType::STONE);
    manager.update_all();

    assert!(manager.chunks()[0].mesh().is_empty());
}

#[test]
fn boundary_faces_follow_the_neighbour_layer() {
    let mut manager = manager((2, 1, 1), 4);
    fill(&mut manager, (0, 0, 0), (4, 4, 4), BlockType::STONE);
    manager.update_all();

    // Only the 4x4 layer facing the empty chunk is visible.
    assert_eq!(manager.chunks()[0].mesh().face_count(), 16);
    assert!(manager.chunks()[1].mesh().is_empty());

    for corner in manager.chunks()[0].mesh().positions.chunks(3) {
        assert_eq!(corner[0], 4.0);
    }
}

#[test]
fn boundary_faces_work_in_the_negative_direction() {
    let mut manager = manager((2, 1, 1), 4);
    fill(&mut manager, (4, 0, 0), (8, 4, 4), BlockType::STONE);
    manager.update_all();

    assert!(manager.chunks()[0].mesh().is_empty());
    assert_eq!(manager.chunks()[1].mesh().face_count(), 16);
}

#[test]
fn vertical_neighbours_are_consulted() {
    let mut manager = manager((1, 2, 1), 4);
    fill(&mut manager, (0, 0, 0), (4, 5, 4), BlockType::DIRT);
    manager.update_all();

    // Lower chunk is covered by the first layer of the upper chunk.
    assert!(manager.chunks()[0].mesh().is_empty());
    // The single layer in the upper chunk shows its top.
    assert_eq!(manager.chunks()[1].mesh().face_count(), 16);
}

#[test]
fn update_is_idempotent() {
    let mut manager = manager((2, 1, 2), 8);
    manager.generate_flat_terrain(5);
    manager.set_block_global(7, 5, 7, BlockType::AIR.id());
    manager.set_block_global(3, 6, 3, BlockType::LOG.id());
    manager.update_all();

    let before: Vec<_> = manager.chunks().iter().map(|chunk| chunk.mesh().clone()).collect();
    manager.update_all();
    let after: Vec<_> = manager.chunks().iter().map(|chunk| chunk.mesh().clone()).collect();

    assert_eq!(before, after);
    assert_eq!(manager.chunks()[0].mesh_revision(), 3);
}

#[test]
fn local_update_does_not_touch_other_chunks() {
    let mut manager = manager((2, 1, 1), 4);
    fill(&mut manager, (0, 0, 0), (8, 4, 4), BlockType::STONE);
    manager.update_all();
    assert!(manager.chunks().iter().all(|chunk| chunk.mesh().is_empty()));

    manager.set_block_global(3, 1, 1, BlockType::AIR.id());
    let chunk = manager.chunk_from_global(3, 1, 1).unwrap();
    manager.update_chunk(chunk);

    assert_eq!(manager.chunks()[0].mesh().face_count(), 5);
    assert!(manager.chunks()[1].mesh().is_empty());
    assert_eq!(manager.chunks()[1].mesh_revision(), 1);

    manager.update_neighbours(chunk);
    assert_eq!(manager.chunks()[1].mesh().face_count(), 1);
    assert_eq!(manager.chunk(ChunkId(1)).unwrap().mesh_revision(), 2);
}

#[test]
fn flat_world_only_shows_its_surface() {
    let mut manager = manager((2, 2, 2), 8);
    manager.generate_flat_terrain(10);

    let (vertices, indices) = manager.mesh_totals();
    assert_eq!(vertices, 16 * 16 * 4);
    assert_eq!(indices, 16 * 16 * 6);
}

#[test]
fn interleaved_vertices_match_mesh_arrays() {
    let mut chunk = Chunk::new(Point3::new(0, 0, 0), Vector3::new(2, 2, 2));
    chunk.set_block_local(0, 1, 0, BlockType::SAND.id());
    chunk.update(&atlas(), &[None; 6]);

    let vertices = chunk.mesh().vertices();
    assert_eq!(vertices.len(), chunk.mesh().vertex_count());
    assert_eq!(vertices[0].position[..], chunk.mesh().positions[..3]);
    assert_eq!(vertices[0].tex_coords[..], chunk.mesh().tex_coords[..2]);
}
