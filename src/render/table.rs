//! Rust source emitter for the level catalog.
//!
//! The generated file is compiled straight into the game, so its shape
//! (type names, field names and order) must not drift between runs.

use std::fs;
use std::path::Path;

use crate::error::{LvlError, Result};
use crate::types::{LevelCatalog, LevelRecord, RockObstacle, StarMarker};

const TAB: &str = "    ";

const HEADER: &str = "// @generated by lvlgen. Do not edit by hand.\n";

const ENTITY_TYPES: &str = "\
#[derive(Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub vert: bool,
}

#[derive(Clone)]
pub struct Rock {
    pub x: f32,
    pub y: f32,
    pub mine: bool,
}
";

/// Render the whole catalog as Rust source.
pub fn render_table(catalog: &LevelCatalog) -> String {
    let mut out = String::new();

    out.push_str(HEADER);
    out.push('\n');
    out.push_str(ENTITY_TYPES);
    out.push('\n');
    out.push_str(&format!(
        "pub const MAX_LEVEL: usize = {};\n",
        catalog.level_count()
    ));

    for level in catalog.iter() {
        out.push('\n');
        render_level(&mut out, level);
    }

    out
}

fn render_level(out: &mut String, level: &LevelRecord) {
    let type_name = level.type_name();

    out.push_str(&format!("//\n// LEVEL {}\n//\n", level.index));

    out.push_str(&format!("pub struct {} {{\n", type_name));
    out.push_str(&format!("{TAB}pub stars: [Star; {}],\n", level.stars.len()));
    out.push_str(&format!("{TAB}pub rocks: [Rock; {}],\n", level.rocks.len()));
    for field in ["start_i", "max_i", "start_p", "max_p", "time_limit"] {
        out.push_str(&format!("{TAB}pub {}: usize,\n", field));
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "pub const {}: {} = {} {{\n",
        level.const_name(),
        type_name,
        type_name
    ));

    let stars: Vec<String> = level.stars.iter().map(star_literal).collect();
    render_array(out, "stars", &stars);

    let rocks: Vec<String> = level.rocks.iter().map(rock_literal).collect();
    render_array(out, "rocks", &rocks);

    let params = &level.params;
    out.push_str(&format!("{TAB}start_i: {},\n", params.start_inventory));
    out.push_str(&format!("{TAB}max_i: {},\n", params.max_inventory));
    out.push_str(&format!("{TAB}start_p: {},\n", params.start_points));
    out.push_str(&format!("{TAB}max_p: {},\n", params.max_points));
    out.push_str(&format!("{TAB}time_limit: {},\n", params.time_limit));
    out.push_str("};\n");
}

/// Empty arrays collapse to `[]` so the literal matches a `[T; 0]` field.
fn render_array(out: &mut String, field: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("{TAB}{}: [],\n", field));
        return;
    }

    out.push_str(&format!("{TAB}{}: [\n", field));
    for item in items {
        out.push_str(&format!("{TAB}{TAB}{},\n", item));
    }
    out.push_str(&format!("{TAB}],\n"));
}

fn star_literal(star: &StarMarker) -> String {
    format!(
        "Star {{ x: {:.1}, y: {:.1}, vert: {} }}",
        star.x,
        star.y,
        star.orientation.is_vertical()
    )
}

fn rock_literal(rock: &RockObstacle) -> String {
    format!(
        "Rock {{ x: {:.1}, y: {:.1}, mine: {} }}",
        rock.x, rock.y, rock.is_hazard
    )
}

/// Write generated source to `path`, replacing any existing file.
pub fn write_table(source: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| LvlError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    fs::write(path, source).map_err(|e| LvlError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write level table: {}", e),
    })
}
