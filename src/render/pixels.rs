//! Pixel transcoding: level image to entities.
//!
//! Pixels are visited column by column, top to bottom within a column. That
//! order is the order entities appear in the generated arrays.

use image::{RgbImage, RgbaImage};
use palette::Srgb;

use crate::types::{classify, to_world, Entity, RockObstacle, StarMarker};

/// Read access to a decoded image.
pub trait PixelSource {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// RGB colour of a pixel. Alpha is dropped.
    fn rgb(&self, col: u32, row: u32) -> Srgb<u8>;
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb(&self, col: u32, row: u32) -> Srgb<u8> {
        let [r, g, b, _] = self.get_pixel(col, row).0;
        Srgb::<u8>::new(r, g, b)
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb(&self, col: u32, row: u32) -> Srgb<u8> {
        let [r, g, b] = self.get_pixel(col, row).0;
        Srgb::<u8>::new(r, g, b)
    }
}

/// Entities decoded from one image, in scan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entities {
    pub stars: Vec<StarMarker>,
    pub rocks: Vec<RockObstacle>,
}

/// Scan every pixel and collect the entities the palette places.
pub fn transcode<S: PixelSource + ?Sized>(source: &S) -> Entities {
    let (width, height) = source.dimensions();
    let mut entities = Entities::default();

    for col in 0..width {
        for row in 0..height {
            match classify(source.rgb(col, row)).entity(to_world(col, row)) {
                Some(Entity::Star(star)) => entities.stars.push(star),
                Some(Entity::Rock(rock)) => entities.rocks.push(rock),
                None => {}
            }
        }
    }

    entities
}
