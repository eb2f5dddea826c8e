//! Level loader - decodes scanned images into a catalog.
//!
//! The first level that fails to load aborts the whole catalog.

use std::path::Path;

use crate::error::{LvlError, Result};
use crate::parser::parse_level_filename;
use crate::render::transcode;
use crate::types::{LevelCatalog, LevelRecord};

use super::scanner::ScanResult;

/// Load every scanned level, numbering them from 1 in scan order.
pub fn load_catalog(scan: &ScanResult) -> Result<LevelCatalog> {
    let mut catalog = LevelCatalog::new();

    for (i, path) in scan.levels.iter().enumerate() {
        catalog.push(load_level(path, i + 1)?);
    }

    Ok(catalog)
}

/// Decode one level image and its file name parameters.
pub fn load_level(path: &Path, index: usize) -> Result<LevelRecord> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LvlError::Parse {
            message: format!("Level file name is not valid UTF-8: {}", path.display()),
            help: None,
        })?
        .to_string();

    let params = parse_level_filename(&name)?;

    let img = image::open(path)
        .map_err(|e| LvlError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let entities = transcode(&img);

    Ok(LevelRecord {
        index,
        name,
        stars: entities.stars,
        rocks: entities.rocks,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{scan_levels, Manifest};
    use crate::types::{LevelParams, Orientation};
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_level(dir: &Path, name: &str, pixels: &[(u32, u32, [u8; 4])]) {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        for &(x, y, rgba) in pixels {
            img.put_pixel(x, y, Rgba(rgba));
        }
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_load_level() {
        let dir = tempdir().unwrap();
        write_level(
            dir.path(),
            "intro_easy_0_5_0_100_60.png",
            &[(0, 0, [0, 255, 0, 255]), (1, 1, [0, 0, 255, 255])],
        );

        let level = load_level(&dir.path().join("intro_easy_0_5_0_100_60.png"), 1).unwrap();

        assert_eq!(level.index, 1);
        assert_eq!(level.name, "intro_easy_0_5_0_100_60.png");
        assert_eq!(
            level.params,
            LevelParams {
                start_inventory: 0,
                max_inventory: 5,
                start_points: 0,
                max_points: 100,
                time_limit: 60,
            }
        );
        assert_eq!(level.stars.len(), 1);
        assert_eq!(level.stars[0].orientation, Orientation::Horizontal);
        assert_eq!(level.rocks.len(), 1);
        assert!(level.rocks[0].is_hazard);
    }

    #[test]
    fn test_load_level_bad_name() {
        let dir = tempdir().unwrap();
        write_level(dir.path(), "intro_easy_0_5_0_100.png", &[]);

        let err = load_level(&dir.path().join("intro_easy_0_5_0_100.png"), 1).unwrap_err();
        assert!(matches!(err, LvlError::Parse { .. }));
    }

    #[test]
    fn test_load_level_corrupt_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a_b_1_2_3_4_5.png");
        fs::write(&path, b"not a png").unwrap();

        let err = load_level(&path, 1).unwrap_err();
        assert!(matches!(err, LvlError::Image { .. }));
    }

    #[test]
    fn test_load_catalog_numbers_levels() {
        let dir = tempdir().unwrap();
        write_level(dir.path(), "l1_a_1_1_1_1_10.png", &[]);
        write_level(dir.path(), "l2_b_2_2_2_2_20.png", &[]);
        write_level(dir.path(), "l10_c_3_3_3_3_30.png", &[]);

        let scan = scan_levels(dir.path(), &Manifest::default()).unwrap();
        let catalog = load_catalog(&scan).unwrap();

        assert_eq!(catalog.level_count(), 3);
        let limits: Vec<(usize, usize)> = catalog
            .iter()
            .map(|l| (l.index, l.params.time_limit))
            .collect();
        assert_eq!(limits, vec![(1, 10), (2, 20), (3, 30)]);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_catalog_non_utf8_name_aborts() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        write_level(dir.path(), "a_b_1_2_3_4_5.png", &[]);
        let odd = dir.path().join(OsStr::from_bytes(b"c\xff_d_1_2_3_4_5.png"));
        if fs::write(&odd, b"").is_err() {
            return;
        }

        let scan = scan_levels(dir.path(), &Manifest::default()).unwrap();
        let err = load_catalog(&scan).unwrap_err();

        assert!(matches!(err, LvlError::Parse { .. }));
    }

    #[test]
    fn test_load_catalog_first_bad_level_aborts() {
        let dir = tempdir().unwrap();
        write_level(dir.path(), "l1_a_1_1_1_1_10.png", &[]);
        write_level(dir.path(), "l2_broken.png", &[]);

        let scan = scan_levels(dir.path(), &Manifest::default()).unwrap();
        assert!(load_catalog(&scan).is_err());
    }
}
