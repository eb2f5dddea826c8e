//! Entities placed on a level by coloured pixels.

use serde::Serialize;

use super::coords::WorldPoint;

/// Which way a star marker is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// A collectible star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarMarker {
    pub x: f32,
    pub y: f32,
    pub orientation: Orientation,
}

impl StarMarker {
    pub fn new(point: WorldPoint, orientation: Orientation) -> Self {
        Self {
            x: point.x,
            y: point.y,
            orientation,
        }
    }
}

/// A rock obstacle. Hazardous rocks are mines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RockObstacle {
    pub x: f32,
    pub y: f32,
    pub is_hazard: bool,
}

impl RockObstacle {
    pub fn new(point: WorldPoint, is_hazard: bool) -> Self {
        Self {
            x: point.x,
            y: point.y,
            is_hazard,
        }
    }
}

/// Any entity a pixel can produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity {
    Star(StarMarker),
    Rock(RockObstacle),
}
