//! Project manifest (lvlgen.yaml) parsing.
//!
//! The manifest is optional. Without one, levels are read from
//! `assets/levels` and the table is written to `src/levels.rs`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LvlError, Result};

/// How levels are ordered in the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelOrder {
    /// Natural file name order (`lvl_2_...` before `lvl_10_...`).
    #[default]
    Name,
    /// Whatever order the directory listing returns.
    Listing,
}

/// Project manifest loaded from lvlgen.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory containing the level images.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Generated Rust source file.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Image file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Level ordering.
    #[serde(default)]
    pub order: LevelOrder,
}

fn default_input() -> PathBuf {
    PathBuf::from("assets/levels")
}

fn default_output() -> PathBuf {
    PathBuf::from("src/levels.rs")
}

fn default_extension() -> String {
    "png".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            extension: default_extension(),
            order: LevelOrder::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a lvlgen.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LvlError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| LvlError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check lvlgen.yaml syntax".to_string()),
        })
    }

    /// Serialize the manifest back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| LvlError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check whether a file name carries the level image extension.
    ///
    /// Matches on the raw name bytes, so names that are not valid UTF-8
    /// still count as levels and fail later when decoded.
    pub fn is_level_file(&self, file_name: impl AsRef<OsStr>) -> bool {
        let name = file_name.as_ref().as_encoded_bytes();
        let suffix = format!(".{}", self.extension.trim_start_matches('.'));
        name.len() > suffix.len() && name.ends_with(suffix.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.input, PathBuf::from("assets/levels"));
        assert_eq!(manifest.output, PathBuf::from("src/levels.rs"));
        assert_eq!(manifest.extension, "png");
        assert_eq!(manifest.order, LevelOrder::Name);
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: game/src/levels.rs").unwrap();

        assert_eq!(manifest.output, PathBuf::from("game/src/levels.rs"));
        assert_eq!(manifest.input, PathBuf::from("assets/levels"));
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
input: art/levels
output: src/generated/levels.rs
extension: PNG
order: listing
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.input, PathBuf::from("art/levels"));
        assert_eq!(manifest.output, PathBuf::from("src/generated/levels.rs"));
        assert_eq!(manifest.extension, "PNG");
        assert_eq!(manifest.order, LevelOrder::Listing);
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_order() {
        let err = Manifest::parse("order: random").unwrap_err();
        assert!(matches!(err, LvlError::Parse { .. }));
    }

    #[test]
    fn test_yaml_round_trip() {
        let manifest = Manifest {
            order: LevelOrder::Listing,
            ..Default::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }

    #[test]
    fn test_is_level_file() {
        let manifest = Manifest::default();

        assert!(manifest.is_level_file("a_b_1_2_3_4_5.png"));
        assert!(!manifest.is_level_file("a_b_1_2_3_4_5.png.bak"));
        assert!(!manifest.is_level_file("notes.txt"));
        assert!(!manifest.is_level_file("levelpng"));
        assert!(!manifest.is_level_file(".png"));
    }

    #[test]
    fn test_is_level_file_dotted_extension() {
        let manifest = Manifest {
            extension: ".bmp".to_string(),
            ..Default::default()
        };
        assert!(manifest.is_level_file("x.bmp"));
        assert!(!manifest.is_level_file("x.png"));
    }
}
