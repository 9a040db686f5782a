pub mod config;
pub mod geometry;
pub mod tile;

pub use config::{Config, VentPlate};
pub use tile::{ring_count, tile, tile_cells};
