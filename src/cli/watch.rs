//! Watch command implementation.
//!
//! Runs a full build, then rebuilds every time a level image in the input
//! directory is created, changed or removed. The manifest is resolved once
//! at startup; edits to lvlgen.yaml need a restart.

use std::path::Path;
use std::sync::mpsc;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::discovery::{discover_with, Manifest};
use crate::error::{LvlError, Result};
use crate::output::{display_path, Printer};

use super::build::build;
use super::ProjectArgs;

/// Rebuild the level table whenever a level image changes
#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: WatchArgs, printer: &Printer) -> Result<()> {
    let root = Path::new(".");
    let discovery = args.project.discover(root)?;
    let input = discovery.scan.root.clone();

    rebuild(root, &discovery.manifest, printer);

    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    watcher
        .watch(&input, RecursiveMode::NonRecursive)
        .map_err(watch_error)?;

    printer.info("Watching", &display_path(&input));

    for res in rx {
        match res {
            Ok(event) if is_level_change(&event, &discovery.manifest) => {
                rebuild(root, &discovery.manifest, printer);
            }
            Ok(_) => {}
            Err(e) => printer.warning("Warning", &e.to_string()),
        }
    }

    Ok(())
}

/// Rebuild from scratch with the startup manifest. Failures are reported
/// and the watch continues.
fn rebuild(root: &Path, manifest: &Manifest, printer: &Printer) {
    let result =
        discover_with(root, manifest.clone()).and_then(|discovery| build(&discovery, printer));

    if let Err(e) = result {
        printer.error("Failed", &e.to_string());
    }
}

fn is_level_change(event: &Event, manifest: &Manifest) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );

    relevant_kind
        && event.paths.iter().any(|path| {
            path.file_name()
                .is_some_and(|name| manifest.is_level_file(name))
        })
}

fn watch_error(e: notify::Error) -> LvlError {
    LvlError::Build {
        message: format!("Failed to watch level directory: {}", e),
        help: None,
    }
}
