//! Face-culled meshing for voxel chunks.
//!
//! Every solid voxel emits one quad per side whose touching voxel is air. Voxels on the
//! chunk border look into the registered neighbour chunk's touching layer. Borders without
//! a neighbour are treated as solid so the edge of the world never shows open faces.

use std::time::Instant;

use log::debug;

use crate::engine_state::{
    rendering::texture_atlas::TextureAtlas,
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType, texture_coords, BlockId},
        chunk::{Chunk, Neighbour, NeighbourChunks},
    },
};

use super::mesh::ChunkMesh;

/// Order in which the sides of a voxel are visited.
const SIDE_ORDER: [BlockSide; 6] = [
    BlockSide::LEFT,
    BlockSide::RIGHT,
    BlockSide::BOTTOM,
    BlockSide::TOP,
    BlockSide::BACK,
    BlockSide::FRONT,
];

const AIR: BlockId = BlockType::AIR as BlockId;

/// Builds the mesh of `chunk` from its block data and its neighbours' border layers.
///
/// The result only depends on the block ids of `chunk` and `neighbours`, so meshing an
/// unchanged chunk twice yields identical buffers.
pub fn culled(chunk: &Chunk, neighbours: &NeighbourChunks<'_>, atlas: &TextureAtlas) -> ChunkMesh {
    let started = Instant::now();
    let size = chunk.size();
    let mut mesh = ChunkMesh::new();

    for x in 0..size.x {
        for y in 0..size.y {
            for z in 0..size.z {
                let block_id = chunk.block(x, y, z);
                if block_id == AIR {
                    continue;
                }

                for side in SIDE_ORDER {
                    if is_side_exposed(chunk, neighbours, x, y, z, side) {
                        mesh.add_face(side, x, y, z, texture_coords(block_id, side, atlas));
                    }
                }
            }
        }
    }

    debug!(
        "Meshed chunk at {:?}: {} faces in {:?}",
        chunk.position(),
        mesh.face_count(),
        started.elapsed()
    );

    mesh
}

/// Whether the voxel touching `side` of `(x, y, z)` is air.
fn is_side_exposed(
    chunk: &Chunk,
    neighbours: &NeighbourChunks<'_>,
    x: usize,
    y: usize,
    z: usize,
    side: BlockSide,
) -> bool {
    let size = chunk.size();
    let offset = side.offset();
    let (nx, ny, nz) = (
        x as i32 + offset.x,
        y as i32 + offset.y,
        z as i32 + offset.z,
    );

    if let Some(block_id) = chunk.get_block_local(nx, ny, nz) {
        return block_id == AIR;
    }

    let Some(neighbour) = neighbours[Neighbour::from_side(side) as usize] else {
        return false;
    };

    // Wrap the coordinate on the crossed axis onto the neighbour's touching layer.
    let neighbour_size = neighbour.size();
    let wrap = |coordinate: i32, own: usize, theirs: usize| -> i32 {
        if coordinate < 0 {
            theirs as i32 - 1
        } else if coordinate >= own as i32 {
            0
        } else {
            coordinate
        }
    };

    neighbour.get_block_local(
        wrap(nx, size.x, neighbour_size.x),
        wrap(ny, size.y, neighbour_size.y),
        wrap(nz, size.z, neighbour_size.z),
    ) == Some(AIR)
}
