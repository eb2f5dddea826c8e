//! lvlgen - Level table generator
//!
//! A library for turning pixel-encoded level images into a Rust source file
//! of fixed-size level tables that a game compiles in.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use discovery::{discover, discover_with, generate, DiscoveryResult, LevelOrder, Manifest, ScanResult};
pub use error::{LvlError, Result};
pub use parser::parse_level_filename;
pub use render::{render_table, transcode, write_table, Entities, PixelSource};
pub use types::{
    classify, to_pixel, to_world, Classification, LevelCatalog, LevelParams, LevelRecord,
    Orientation, RockObstacle, StarMarker, WorldPoint,
};
