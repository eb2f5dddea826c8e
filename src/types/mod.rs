//! Core domain types for lvlgen.
//!
//! - `StarMarker`, `RockObstacle` - entities placed by pixels
//! - `LevelRecord`, `LevelCatalog` - decoded levels
//! - `Classification` - palette lookup result
//! - `WorldPoint` - pixel to world transform

pub mod coords;
mod entity;
mod level;
mod palette;

pub use self::coords::{to_pixel, to_world, WorldPoint};
pub use self::entity::{Entity, Orientation, RockObstacle, StarMarker};
pub use self::level::{LevelCatalog, LevelParams, LevelRecord};
pub use self::palette::{classify, hex_key, Classification, PALETTE};
