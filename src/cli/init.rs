//! Init command implementation.
//!
//! Generates a `lvlgen.yaml` manifest, pointing `input` at the first
//! directory that holds correctly named level images.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::discovery::{Manifest, MANIFEST_FILENAME};
use crate::error::{LvlError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_level_filename;

/// Initialize a lvlgen project by generating a lvlgen.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing lvlgen.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(LvlError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));

    let mut manifest = Manifest::default();
    let found = level_directories(&args.path, &manifest);

    if !found.is_empty() && !found.contains_key(&manifest.input) {
        if let Some(dir) = found.keys().next() {
            manifest.input = dir.clone();
        }
    }

    let yaml = manifest.to_yaml()?;
    fs::write(&manifest_path, &yaml).map_err(|e| LvlError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    let total = found.get(&manifest.input).copied().unwrap_or(0);
    if found.len() > 1 {
        let dirs: Vec<String> = found.keys().map(|d| d.display().to_string()).collect();
        printer.warning("Multiple", &format!("level directories: {}", dirs.join(", ")));
    }

    printer.success(
        "Created",
        &format!(
            "{} (input {}, {} found)",
            MANIFEST_FILENAME,
            manifest.input.display(),
            plural(total, "level", "levels")
        ),
    );

    Ok(())
}

/// Directories (relative to `root`) holding level images, with counts.
fn level_directories(root: &Path, manifest: &Manifest) -> BTreeMap<PathBuf, usize> {
    let mut counts = BTreeMap::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let is_level = entry
            .file_name()
            .to_str()
            .is_some_and(|name| manifest.is_level_file(name) && parse_level_filename(name).is_ok());
        if !is_level {
            continue;
        }

        let Some(parent) = entry.path().parent() else {
            continue;
        };
        let relative = parent.strip_prefix(root).unwrap_or(parent).to_path_buf();
        let relative = if relative.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            relative
        };

        *counts.entry(relative).or_insert(0) += 1;
    }

    counts
}
