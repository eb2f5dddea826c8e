//! Level records and the catalog of all levels in a run.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{LvlError, Result};

use super::entity::{RockObstacle, StarMarker};

/// Scalar level parameters encoded in the image file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LevelParams {
    pub start_inventory: usize,
    pub max_inventory: usize,
    pub start_points: usize,
    pub max_points: usize,
    pub time_limit: usize,
}

impl FromStr for LevelParams {
    type Err = LvlError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_level_filename(s)
    }
}

/// A fully decoded level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelRecord {
    /// 1-based position in the catalog.
    pub index: usize,

    /// Source image file name.
    pub name: String,

    /// Stars in scan order.
    pub stars: Vec<StarMarker>,

    /// Rocks in scan order.
    pub rocks: Vec<RockObstacle>,

    #[serde(flatten)]
    pub params: LevelParams,
}

impl LevelRecord {
    /// Name of the generated struct type, e.g. `Level3`.
    pub fn type_name(&self) -> String {
        format!("Level{}", self.index)
    }

    /// Name of the generated constant, e.g. `LEVEL_3`.
    pub fn const_name(&self) -> String {
        format!("LEVEL_{}", self.index)
    }

    /// Count of mine rocks.
    pub fn hazard_count(&self) -> usize {
        self.rocks.iter().filter(|r| r.is_hazard).count()
    }
}

/// Every level of a run, in output order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelCatalog {
    pub levels: Vec<LevelRecord>,
}

impl LevelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a level. Its index must follow on from the last one.
    pub fn push(&mut self, level: LevelRecord) {
        debug_assert_eq!(level.index, self.levels.len() + 1);
        self.levels.push(level);
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelRecord> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn level(index: usize) -> LevelRecord {
        LevelRecord {
            index,
            name: format!("lvl_{}_0_5_0_10_30.png", index),
            stars: vec![StarMarker {
                x: 0.0,
                y: 0.0,
                orientation: Orientation::Horizontal,
            }],
            rocks: vec![
                RockObstacle {
                    x: 50.0,
                    y: 0.0,
                    is_hazard: true,
                },
                RockObstacle {
                    x: 100.0,
                    y: 0.0,
                    is_hazard: false,
                },
            ],
            params: LevelParams::default(),
        }
    }

    #[test]
    fn test_generated_names() {
        let l = level(3);
        assert_eq!(l.type_name(), "Level3");
        assert_eq!(l.const_name(), "LEVEL_3");
    }

    #[test]
    fn test_hazard_count() {
        assert_eq!(level(1).hazard_count(), 1);
    }

    #[test]
    fn test_catalog_count() {
        let mut catalog = LevelCatalog::new();
        assert!(catalog.is_empty());

        catalog.push(level(1));
        catalog.push(level(2));

        assert_eq!(catalog.level_count(), 2);
        let indices: Vec<usize> = catalog.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_params_from_str() {
        let params: LevelParams = "intro_easy_0_5_0_100_60.png".parse().unwrap();
        assert_eq!(params.max_points, 100);
    }

    #[test]
    fn test_record_json_flattens_params() {
        let json = serde_json::to_value(level(1)).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["time_limit"], 0);
        assert_eq!(json["stars"][0]["orientation"], "horizontal");
        assert_eq!(json["rocks"][0]["is_hazard"], true);
    }
}
