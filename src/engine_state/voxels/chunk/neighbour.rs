//! # Chunk Neighbours
//!
//! Chunks refer to their face-adjacent chunks through [`ChunkId`] handles into the
//! chunk manager's arena instead of owning or pointing at each other.

use cgmath::Vector3;

use crate::engine_state::voxels::block::block_side::BlockSide;

use super::Chunk;

/// Handle of a chunk inside the chunk manager's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(pub usize);

/// The chunks adjacent to a chunk, indexed by `Neighbour as usize`.
pub type NeighbourChunks<'a> = [Option<&'a Chunk>; 6];

/// Direction of a face-adjacent chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Neighbour {
    /// Towards negative Z
    NORTH = 0,
    /// Towards positive Z
    SOUTH = 1,
    /// Towards negative X
    EAST = 2,
    /// Towards positive X
    WEST = 3,
    /// Towards positive Y
    ABOVE = 4,
    /// Towards negative Y
    BELOW = 5,
}

impl Neighbour {
    pub fn all() -> [Neighbour; 6] {
        [
            Neighbour::NORTH,
            Neighbour::SOUTH,
            Neighbour::EAST,
            Neighbour::WEST,
            Neighbour::ABOVE,
            Neighbour::BELOW,
        ]
    }

    /// The neighbour a block face on the chunk border looks into.
    pub fn from_side(side: BlockSide) -> Self {
        match side {
            BlockSide::BACK => Neighbour::NORTH,
            BlockSide::FRONT => Neighbour::SOUTH,
            BlockSide::LEFT => Neighbour::EAST,
            BlockSide::RIGHT => Neighbour::WEST,
            BlockSide::TOP => Neighbour::ABOVE,
            BlockSide::BOTTOM => Neighbour::BELOW,
        }
    }

    /// Offset of the neighbour in chunk grid coordinates.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            Neighbour::NORTH => Vector3::new(0, 0, -1),
            Neighbour::SOUTH => Vector3::new(0, 0, 1),
            Neighbour::EAST => Vector3::new(-1, 0, 0),
            Neighbour::WEST => Vector3::new(1, 0, 0),
            Neighbour::ABOVE => Vector3::new(0, 1, 0),
            Neighbour::BELOW => Vector3::new(0, -1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Neighbour::NORTH => Neighbour::SOUTH,
            Neighbour::SOUTH => Neighbour::NORTH,
            Neighbour::EAST => Neighbour::WEST,
            Neighbour::WEST => Neighbour::EAST,
            Neighbour::ABOVE => Neighbour::BELOW,
            Neighbour::BELOW => Neighbour::ABOVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_and_neighbour_offsets_agree() {
        for side in BlockSide::all() {
            assert_eq!(Neighbour::from_side(side).offset(), side.offset());
        }
        for neighbour in Neighbour::all() {
            assert_eq!(neighbour.opposite().offset(), -neighbour.offset());
        }
    }
}
