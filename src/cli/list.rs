//! List command implementation.
//!
//! Decodes levels and prints an inventory without writing the table.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{LvlError, Result};
use crate::output::Printer;
use crate::types::LevelCatalog;

use super::ProjectArgs;

/// List levels with their parameters and entity counts
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing level images (default: lvlgen.yaml or assets/levels)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Print the decoded catalog as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = ProjectArgs {
        input: args.input,
        output: None,
    };
    let catalog = project.discover(Path::new("."))?.load_catalog()?;

    if args.json {
        println!("{}", catalog_json(&catalog)?);
    } else {
        print_inventory(&catalog, printer);
    }

    Ok(())
}

fn catalog_json(catalog: &LevelCatalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).map_err(|e| LvlError::Build {
        message: format!("Failed to serialize levels: {}", e),
        help: None,
    })
}

fn print_inventory(catalog: &LevelCatalog, printer: &Printer) {
    if catalog.is_empty() {
        printer.warning("Empty", "no level images found");
        return;
    }

    for level in catalog.iter() {
        printer.level(level);
    }
}
