//! The fixed colour palette that level images are painted with.
//!
//! Every RGB colour classifies to exactly one outcome. Colours outside the
//! palette are `Ignored` so that artists can leave backgrounds and guide
//! marks in the image.

use palette::Srgb;

use super::coords::WorldPoint;
use super::entity::{Entity, Orientation, RockObstacle, StarMarker};

/// Outcome of classifying a single pixel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    StarHorizontal,
    StarVertical,
    RockSafe,
    RockHazard,
    Ignored,
}

impl Classification {
    /// Build the entity this classification places at `point`, if any.
    pub fn entity(self, point: WorldPoint) -> Option<Entity> {
        match self {
            Classification::StarHorizontal => {
                Some(Entity::Star(StarMarker::new(point, Orientation::Horizontal)))
            }
            Classification::StarVertical => {
                Some(Entity::Star(StarMarker::new(point, Orientation::Vertical)))
            }
            Classification::RockSafe => Some(Entity::Rock(RockObstacle::new(point, false))),
            Classification::RockHazard => Some(Entity::Rock(RockObstacle::new(point, true))),
            Classification::Ignored => None,
        }
    }
}

/// Recognised colours, keyed on the lowercase `#rrggbb` of their RGB channels.
pub const PALETTE: [(&str, Classification); 4] = [
    ("#00ff00", Classification::StarHorizontal),
    ("#ffff00", Classification::StarVertical),
    ("#ff0000", Classification::RockSafe),
    ("#0000ff", Classification::RockHazard),
];

/// Classify a colour by its hex key. Anything off-palette is `Ignored`.
pub fn classify(colour: Srgb<u8>) -> Classification {
    let key = hex_key(colour);
    PALETTE
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, class)| *class)
        .unwrap_or(Classification::Ignored)
}

/// Lowercase `#rrggbb` key for a colour.
pub fn hex_key(colour: Srgb<u8>) -> String {
    format!("#{:x}", colour)
}
