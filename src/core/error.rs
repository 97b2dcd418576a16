//! # Engine Errors
//!
//! Resource loading is the only part of the engine that can fail. Chunk, meshing and
//! terrain code never return errors; they degrade to sentinel values instead.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading configuration or GPU-bound resources.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed to load
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::EngineConfig`].
    #[error("invalid engine configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The texture atlas image could not be decoded.
    #[error("failed to decode texture atlas: {0}")]
    Image(#[from] image::ImageError),

    /// The atlas image does not fit the cell grid convention.
    #[error("texture atlas must be square and divisible into {cell_size}px cells, got {width}x{height}")]
    InvalidAtlas {
        /// Width of the decoded image in pixels
        width: u32,
        /// Height of the decoded image in pixels
        height: u32,
        /// Requested size of a single atlas cell in pixels
        cell_size: u32,
    },
}
