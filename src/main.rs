//! # Voxel World Entry Point
//!
//! Generates and meshes a world headlessly and reports its size.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [config.json]
//! ```
//!
//! Without an argument the configuration path is read from `VOXEL_WORLD_CONFIG`.

fn main() {
    if let Err(err) = voxel_world::run(std::env::args().nth(1)) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
