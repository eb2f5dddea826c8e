//! Level discovery and loading for lvlgen projects.
//!
//! A project is a directory with an optional `lvlgen.yaml` manifest. The
//! manifest's `input` directory is scanned for level images, which are then
//! decoded into a [`LevelCatalog`].
//!
//! # Example
//!
//! ```ignore
//! use lvlgen::discovery::discover;
//!
//! let result = discover(".")?;
//! println!("Found {} levels", result.scan.total());
//!
//! let source = result.generate()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::render::render_table;
use crate::types::LevelCatalog;

pub use loader::{load_catalog, load_level};
pub use manifest::{LevelOrder, Manifest};
pub use scanner::{natural_cmp, scan_levels, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "lvlgen.yaml";

/// Result of discovering levels in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The effective manifest (default if no lvlgen.yaml was found).
    pub manifest: Manifest,

    /// Whether a lvlgen.yaml manifest was found.
    pub has_manifest: bool,

    /// Scanned level images.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Decode every discovered level.
    pub fn load_catalog(&self) -> Result<LevelCatalog> {
        load_catalog(&self.scan)
    }

    /// Decode every level and render the level table source.
    pub fn generate(&self) -> Result<String> {
        Ok(render_table(&self.load_catalog()?))
    }

    /// Where the level table is written.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.manifest.output)
    }
}

/// Load `lvlgen.yaml` from a project root, if present.
pub fn load_manifest(root: &Path) -> Result<Option<Manifest>> {
    let path = root.join(MANIFEST_FILENAME);
    if path.exists() {
        Ok(Some(Manifest::load(&path)?))
    } else {
        Ok(None)
    }
}

/// Discover levels in a project directory.
///
/// Uses `lvlgen.yaml` from the root when present, defaults otherwise.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref();
    let manifest = load_manifest(root)?;
    let has_manifest = manifest.is_some();

    let mut result = discover_with(root, manifest.unwrap_or_default())?;
    result.has_manifest = has_manifest;
    Ok(result)
}

/// Discover levels using an explicit manifest (no lvlgen.yaml lookup).
pub fn discover_with(root: impl AsRef<Path>, manifest: Manifest) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let scan = scan_levels(&root.join(&manifest.input), &manifest)?;

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}

/// Render the level table for an input directory.
pub fn generate(input: impl AsRef<Path>) -> Result<String> {
    let manifest = Manifest {
        input: input.as_ref().to_path_buf(),
        ..Default::default()
    };
    discover_with(".", manifest)?.generate()
}
