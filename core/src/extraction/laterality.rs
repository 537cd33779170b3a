use crate::types::Laterality;
use regex::Regex;
use std::sync::OnceLock;

/// Parses laterality from a DICOM ImageLaterality value
///
/// Handles the standard DICOM laterality codes:
/// - "L" → Left
/// - "R" → Right
/// - Otherwise → Unknown
pub fn parse_laterality_string(s: &str) -> Laterality {
    let s_lower = s.trim().to_lowercase();
    if s_lower == "l" {
        Laterality::Left
    } else if s_lower == "r" {
        Laterality::Right
    } else {
        Laterality::Unknown
    }
}

/// Parses the direction cosines of a Plane Orientation field
///
/// Accepts formats like:
/// - "[1, 0, 0, 0, -1, 0]"
/// - "['1', '0', '0', '0', '-1', '0']"
/// - "1\\0\\0\\0\\-1\\0"
///
/// Returns `None` unless at least four numbers are present.
pub fn parse_plane_orientation(s: &str) -> Option<Vec<f64>> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
    });

    let values: Vec<f64> = re
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    if values.len() >= 4 {
        Some(values)
    } else {
        None
    }
}

/// Derives laterality from plane orientation cosines
///
/// A row cosine whose y component truncates to 1 points to the right breast;
/// every other orientation is read as left.
pub fn laterality_from_orientation(cosines: &[f64]) -> Laterality {
    match cosines.get(1) {
        Some(y) if y.trunc() == 1.0 => Laterality::Right,
        Some(_) => Laterality::Left,
        None => Laterality::Unknown,
    }
}
