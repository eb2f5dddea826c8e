//! Pixel grid to world-space coordinate transform.
//!
//! Level images use a top-left origin with rows growing downwards. The game
//! uses a centred, y-up world where each pixel covers one 50-unit grid cell.
//! A 100x100 canvas therefore spans -2500..2500 on both axes.

/// World units per pixel.
pub const GRID_SPACING: i64 = 50;

/// Distance from the world origin to the canvas edge.
pub const HALF_EXTENT: i64 = 2500;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

/// Convert a pixel position to world space.
pub fn to_world(col: u32, row: u32) -> WorldPoint {
    let x = i64::from(col) * GRID_SPACING - HALF_EXTENT;
    let y = HALF_EXTENT - i64::from(row) * GRID_SPACING;
    WorldPoint {
        x: x as f32,
        y: y as f32,
    }
}

/// Recover the pixel position of a world point.
///
/// Returns `None` for points that do not sit on a grid cell or that fall
/// above/left of the canvas origin.
pub fn to_pixel(point: WorldPoint) -> Option<(u32, u32)> {
    if point.x.fract() != 0.0 || point.y.fract() != 0.0 {
        return None;
    }

    let col = point.x as i64 + HALF_EXTENT;
    let row = HALF_EXTENT - point.y as i64;

    if col % GRID_SPACING != 0 || row % GRID_SPACING != 0 {
        return None;
    }

    let col = u32::try_from(col / GRID_SPACING).ok()?;
    let row = u32::try_from(row / GRID_SPACING).ok()?;
    Some((col, row))
}
