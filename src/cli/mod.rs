pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod watch;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::discovery::{discover_with, load_manifest, DiscoveryResult};
use crate::error::Result;

/// lvlgen - Level table generator
#[derive(Parser, Debug)]
#[command(name = "lvlgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the level table from level images
    Build(build::BuildArgs),

    /// List levels with their parameters and entity counts
    List(list::ListArgs),

    /// Initialize a lvlgen project (generates lvlgen.yaml)
    Init(init::InitArgs),

    /// Rebuild the level table whenever a level image changes
    Watch(watch::WatchArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Input and output overrides shared by commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Directory containing level images (default: lvlgen.yaml or assets/levels)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Generated Rust file (default: lvlgen.yaml or src/levels.rs)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ProjectArgs {
    /// Discover levels under `root`, applying flag overrides on top of
    /// lvlgen.yaml.
    pub fn discover(&self, root: &Path) -> Result<DiscoveryResult> {
        let manifest = load_manifest(root)?;
        let has_manifest = manifest.is_some();
        let mut manifest = manifest.unwrap_or_default();

        if let Some(input) = &self.input {
            manifest.input = input.clone();
        }
        if let Some(output) = &self.output {
            manifest.output = output.clone();
        }

        let mut result = discover_with(root, manifest)?;
        result.has_manifest = has_manifest;
        Ok(result)
    }
}
