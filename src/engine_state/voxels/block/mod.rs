//! # Block Module
//!
//! This module provides the block catalog: block type definitions, block faces, and the
//! lookups that turn a raw block id into texture coordinates and break times.

use block_type::{BlockType, ERROR_TEXTURE_CELL};

use crate::engine_state::rendering::texture_atlas::TextureAtlas;

use block_side::BlockSide;

pub mod block_breaker;
pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in chunk storage.
pub type BlockId = u8;

/// Returns the four UV corners (8 floats) the given face of a block samples in the atlas.
///
/// Ids without a `BlockType` map to the atlas error cell.
pub fn texture_coords(block_id: BlockId, side: BlockSide, atlas: &TextureAtlas) -> [f32; 8] {
    let cell = BlockType::from_id(block_id)
        .map(|block_type| block_type.texture_cell(side))
        .unwrap_or(ERROR_TEXTURE_CELL);
    atlas.texture_coords(cell)
}

/// Seconds needed to break the block with the given id, `0.0` for unbreakable or unknown ids.
pub fn break_time(block_id: BlockId) -> f32 {
    BlockType::from_id(block_id)
        .map(BlockType::break_time)
        .unwrap_or(0.0)
}
