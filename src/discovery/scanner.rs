//! Level image enumeration.
//!
//! Lists the level images directly inside the input directory. Nested
//! directories are not searched.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{LvlError, Result};

use super::manifest::{LevelOrder, Manifest};

/// Result of scanning the input directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Directory that was scanned.
    pub root: PathBuf,
    /// Level images in output order.
    pub levels: Vec<PathBuf>,
}

impl ScanResult {
    /// Number of levels found.
    pub fn total(&self) -> usize {
        self.levels.len()
    }

    /// Check if no levels were found.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Scan a directory for level images.
///
/// Fails if the directory is missing or any entry cannot be read.
pub fn scan_levels(root: &Path, manifest: &Manifest) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(LvlError::Directory {
            path: root.to_path_buf(),
            message: "not a directory or does not exist".to_string(),
        });
    }

    let mut levels = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| LvlError::Directory {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if manifest.is_level_file(entry.file_name()) {
            levels.push(entry.into_path());
        }
    }

    if manifest.order == LevelOrder::Name {
        levels.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
    }

    Ok(ScanResult {
        root: root.to_path_buf(),
        levels,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compare strings with digit runs compared by numeric value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (x, y) in left.iter().zip(right.iter()) {
        let ord = compare_chunk(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

/// Split into maximal runs of ASCII digits and non-digits.
fn chunks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_digit: Option<bool> = None;

    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|p| p != digit) {
            out.push(&s[start..i]);
            start = i;
        }
        prev_digit = Some(digit);
    }

    if start < s.len() {
        out.push(&s[start..]);
    }

    out
}

fn compare_chunk(x: &str, y: &str) -> Ordering {
    let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if numeric(x) && numeric(y) {
        let xt = x.trim_start_matches('0');
        let yt = y.trim_start_matches('0');
        xt.len().cmp(&yt.len()).then_with(|| xt.cmp(yt))
    } else {
        x.cmp(y)
    }
}
