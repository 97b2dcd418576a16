//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world together with
//! their static catalog data: which atlas cell each face samples and how long the block
//! takes to break.

use std::fmt;

use num_derive::FromPrimitive;
use phf::phf_map;

use super::block_side::BlockSide;
use super::BlockId;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminants are the block ids stored in chunks. `AIR` must stay `0`: meshing,
/// picking and placement all treat id `0` as "nothing here".
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space, never meshed.
    AIR = 0,

    /// Plain dirt, found in the three layers under the surface.
    DIRT = 1,

    /// Grass with a green top, dirt bottom and grass/dirt sides.
    GRASS = 2,

    /// Stone, everything deep underground.
    STONE = 3,

    /// Tree trunk with rings on top and bottom and bark on the sides.
    LOG = 4,

    /// Tree leaves.
    LEAF = 5,

    /// Wooden planks, only available through placement.
    PLANKS = 6,

    /// Sand, the surface block below the water level.
    SAND = 7,

    /// Water filling empty space below the water level.
    WATER = 8,
}

/// Atlas cell used for ids that have no texture of their own.
pub const ERROR_TEXTURE_CELL: (u32, u32) = (7, 7);

/// Lowercase block names accepted in configuration files.
static BLOCK_NAMES: phf::Map<&'static str, BlockType> = phf_map! {
    "air" => BlockType::AIR,
    "dirt" => BlockType::DIRT,
    "grass" => BlockType::GRASS,
    "stone" => BlockType::STONE,
    "log" => BlockType::LOG,
    "leaf" => BlockType::LEAF,
    "leaves" => BlockType::LEAF,
    "planks" => BlockType::PLANKS,
    "sand" => BlockType::SAND,
    "water" => BlockType::WATER,
};

impl BlockType {
    /// Converts a raw block id to a `BlockType`, returning `None` for unknown ids.
    pub fn from_id(id: BlockId) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// Looks up a block by its lowercase configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_NAMES.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// The raw id stored in chunk block arrays.
    pub fn id(self) -> BlockId {
        self as BlockId
    }

    /// Whether this block is empty space.
    pub fn is_air(self) -> bool {
        self == BlockType::AIR
    }

    /// Atlas grid cell sampled by the given face of this block.
    ///
    /// Grass and logs use different cells for their top/bottom and side faces.
    pub fn texture_cell(self, side: BlockSide) -> (u32, u32) {
        match self {
            BlockType::GRASS => match side {
                BlockSide::TOP => (0, 0),
                BlockSide::BOTTOM => (2, 0),
                _ => (1, 0),
            },
            BlockType::DIRT => (2, 0),
            BlockType::STONE => (3, 0),
            BlockType::LOG if side.is_vertical() => (4, 0),
            BlockType::LOG => (5, 0),
            BlockType::LEAF => (6, 0),
            BlockType::PLANKS => (7, 0),
            BlockType::WATER => (0, 1),
            BlockType::SAND => (1, 1),
            BlockType::AIR => ERROR_TEXTURE_CELL,
        }
    }

    /// Seconds the break button has to be held to remove this block.
    ///
    /// Air and water cannot be broken and report `0.0`.
    pub fn break_time(self) -> f32 {
        match self {
            BlockType::DIRT | BlockType::SAND | BlockType::GRASS => 2.0,
            BlockType::STONE => 5.0,
            BlockType::LEAF => 1.5,
            BlockType::LOG | BlockType::PLANKS => 3.0,
            BlockType::AIR | BlockType::WATER => 0.0,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_ascii_lowercase())
    }
}
