//! Build command implementation.
//!
//! Decodes every level image and writes the level table.

use std::path::Path;

use clap::Args;

use crate::discovery::DiscoveryResult;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::{render_table, write_table};

use super::ProjectArgs;

/// Generate the level table from level images
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = args.project.discover(Path::new("."))?;
    build(&discovery, printer)?;
    Ok(())
}

/// Decode, render and write. Returns the number of levels written.
pub fn build(discovery: &DiscoveryResult, printer: &Printer) -> Result<usize> {
    printer.status(
        "Scanning",
        &format!(
            "{} ({})",
            display_path(&discovery.scan.root),
            plural(discovery.scan.total(), "level", "levels")
        ),
    );

    let catalog = discovery.load_catalog()?;

    for level in catalog.iter() {
        printer.decoded(level);
    }

    let output = discovery.output_path();
    write_table(&render_table(&catalog), &output)?;

    printer.success(
        "Generated",
        &format!(
            "{} ({})",
            display_path(&output),
            plural(catalog.level_count(), "level", "levels")
        ),
    );

    Ok(catalog.level_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{discover_with, Manifest};
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_build_writes_table() {
        let dir = tempdir().unwrap();
        let levels = dir.path().join("levels");
        fs::create_dir_all(&levels).unwrap();

        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        img.save(levels.join("intro_easy_0_5_0_100_60.png")).unwrap();

        let manifest = Manifest {
            input: levels.clone(),
            output: dir.path().join("out/levels.rs"),
            ..Default::default()
        };
        let discovery = discover_with(dir.path(), manifest).unwrap();

        let count = build(&discovery, &Printer::new()).unwrap();

        assert_eq!(count, 1);
        let source = fs::read_to_string(dir.path().join("out/levels.rs")).unwrap();
        assert!(source.contains("pub const MAX_LEVEL: usize = 1;"));
        assert!(source.contains("Star { x: -2500.0, y: 2500.0, vert: false },"));
    }

    #[test]
    fn test_build_bad_level_writes_nothing() {
        let dir = tempdir().unwrap();
        let levels = dir.path().join("levels");
        fs::create_dir_all(&levels).unwrap();

        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]))
            .save(levels.join("missing_params.png"))
            .unwrap();

        let manifest = Manifest {
            input: levels,
            output: dir.path().join("levels.rs"),
            ..Default::default()
        };
        let discovery = discover_with(dir.path(), manifest).unwrap();

        assert!(build(&discovery, &Printer::new()).is_err());
        assert!(!dir.path().join("levels.rs").exists());
    }
}
