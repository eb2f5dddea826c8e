//! Level file name decoding.
//!
//! Level parameters live in the image file name:
//!
//! ```text
//! <label>_<label>_<start-inv>_<max-inv>_<start-pts>_<max-pts>_<time-limit>.png
//! ```
//!
//! The two leading labels are free-form and ignored. The five trailing
//! segments must all be unsigned base-10 integers.

use crate::error::{LvlError, Result};
use crate::types::LevelParams;

/// Number of leading free-form label segments.
const LABEL_SEGMENTS: usize = 2;

/// Number of trailing numeric segments.
const PARAM_SEGMENTS: usize = 5;

const PARAM_NAMES: [&str; PARAM_SEGMENTS] = [
    "start inventory",
    "max inventory",
    "start points",
    "max points",
    "time limit",
];

fn schema_help() -> Option<String> {
    Some(
        "Name level images <label>_<label>_<start-inv>_<max-inv>_<start-pts>_<max-pts>_<time-limit>.png"
            .to_string(),
    )
}

/// Decode the level parameters from a file name.
pub fn parse_level_filename(name: &str) -> Result<LevelParams> {
    let stem = strip_extension(name);
    let segments: Vec<&str> = stem.split('_').collect();

    let expected = LABEL_SEGMENTS + PARAM_SEGMENTS;
    if segments.len() != expected {
        return Err(LvlError::Parse {
            message: format!(
                "Level file name '{}' has {} underscore-separated segments, expected {}",
                name,
                segments.len(),
                expected
            ),
            help: schema_help(),
        });
    }

    let mut values = [0usize; PARAM_SEGMENTS];
    for (i, segment) in segments[LABEL_SEGMENTS..].iter().enumerate() {
        values[i] = segment.parse().map_err(|_| LvlError::Parse {
            message: format!(
                "Invalid {} '{}' in level file name '{}'",
                PARAM_NAMES[i], segment, name
            ),
            help: Some(format!("The {} must be a non-negative integer", PARAM_NAMES[i])),
        })?;
    }

    let [start_inventory, max_inventory, start_points, max_points, time_limit] = values;
    Ok(LevelParams {
        start_inventory,
        max_inventory,
        start_points,
        max_points,
        time_limit,
    })
}

/// Drop the final `.ext` from a file name, if any.
fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_name() {
        let params = parse_level_filename("intro_easy_0_5_0_100_60.png").unwrap();
        assert_eq!(
            params,
            LevelParams {
                start_inventory: 0,
                max_inventory: 5,
                start_points: 0,
                max_points: 100,
                time_limit: 60,
            }
        );
    }

    #[test]
    fn test_labels_are_free_form() {
        let params = parse_level_filename("01-Cave!_hard mode_3_6_3_6_30.png").unwrap();
        assert_eq!(params.start_inventory, 3);
        assert_eq!(params.time_limit, 30);
    }

    #[test]
    fn test_parse_without_extension() {
        let params = parse_level_filename("a_b_1_2_3_4_5").unwrap();
        assert_eq!(params.time_limit, 5);
    }

    #[test]
    fn test_four_trailing_segments_rejected() {
        let err = parse_level_filename("intro_easy_0_5_0_100.png").unwrap_err();
        assert!(matches!(err, LvlError::Parse { .. }));
        assert!(err.to_string().contains("expected 7"));
    }

    #[test]
    fn test_extra_segments_rejected() {
        assert!(parse_level_filename("a_b_c_1_2_3_4_5.png").is_err());
    }

    #[test]
    fn test_non_numeric_segment_rejected() {
        let err = parse_level_filename("intro_easy_0_five_0_100_60.png").unwrap_err();
        assert!(err.to_string().contains("max inventory"));
    }

    #[test]
    fn test_negative_segment_rejected() {
        assert!(parse_level_filename("intro_easy_0_5_-1_100_60.png").is_err());
    }

    #[test]
    fn test_empty_segment_rejected() {
        assert!(parse_level_filename("intro_easy_0__0_100_60.png").is_err());
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("a_b.png"), "a_b");
        assert_eq!(strip_extension("a_b"), "a_b");
        assert_eq!(strip_extension(".png"), ".png");
    }
}
