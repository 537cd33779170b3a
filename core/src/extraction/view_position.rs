use crate::io::ImagingRow;
use crate::types::{ViewPosition, ViewType};

use super::laterality::{
    laterality_from_orientation, parse_laterality_string, parse_plane_orientation,
};

// Pattern sets for view position matching
const CC_STRINGS: &[&str] = &["cranio-caudal", "caudal-cranial"];
const ML_STRINGS: &[&str] = &["medio-lateral", "medial-lateral"];
const LM_STRINGS: &[&str] = &["latero-medial", "lateral-medial"];

/// View codes searched for in series descriptions, most specific first
const SERIES_VIEW_CODES: [ViewPosition; 7] = [
    ViewPosition::Xccl,
    ViewPosition::Xccm,
    ViewPosition::Cc,
    ViewPosition::Mlo,
    ViewPosition::Lmo,
    ViewPosition::Ml,
    ViewPosition::Lm,
];

/// Series descriptions marking a second reconstruction that has no usable view
const SKIPPED_SERIES_MARKER: &str = "_R2";
const PROCESSED_2D_MARKER: &str = "2D_PROC";
const PREVIEW_MARKER: &str = "V-Preview";

/// Cosine above which a preview is read as cranio-caudal
const CC_ORIENTATION_THRESHOLD: f64 = 0.9;

/// Extracts the view type of an image row
///
/// # Algorithm
///
/// 1. Series descriptions containing `_R2` have no view type
/// 2. The first view code found in the series description, combined with
///    the ImageLaterality field
/// 3. `2D_PROC` series: ImageLaterality combined with the ViewPosition field
/// 4. `V-Preview` series: both parts derived from the plane orientation
///
/// Returns `None` when laterality or view position stays unknown.
pub fn extract_view_type(row: &ImagingRow) -> Option<ViewType> {
    let description = row.series_description.as_str();
    if description.contains(SKIPPED_SERIES_MARKER) {
        return None;
    }

    let view_type = if let Some(view) = SERIES_VIEW_CODES
        .iter()
        .find(|view| description.contains(view.code()))
    {
        ViewType::new(parse_laterality_string(&row.image_laterality), *view)
    } else if description.contains(PROCESSED_2D_MARKER) {
        ViewType::new(
            parse_laterality_string(&row.image_laterality),
            parse_view_position(&row.view_position),
        )
    } else if description.contains(PREVIEW_MARKER) {
        view_type_from_orientation(&row.plane_orientation)?
    } else {
        return None;
    };

    if view_type.laterality.is_unknown() || view_type.view.is_unknown() {
        return None;
    }
    Some(view_type)
}

/// Derives a preview's view type from its plane orientation
fn view_type_from_orientation(orientation: &str) -> Option<ViewType> {
    let cosines = parse_plane_orientation(orientation)?;
    let laterality = laterality_from_orientation(&cosines);
    let column_x = cosines[3].abs();

    let view = if column_x > 1.0 {
        return None;
    } else if column_x >= CC_ORIENTATION_THRESHOLD {
        ViewPosition::Cc
    } else {
        ViewPosition::Mlo
    };
    Some(ViewType::new(laterality, view))
}

/// Parses a ViewPosition field value
///
/// Accepts the view codes (`CC`, `MLO`, ...) and their descriptive names.
/// Anything else is `Unknown`.
pub fn parse_view_position(s: &str) -> ViewPosition {
    match_view_patterns(&s.trim().to_lowercase()).unwrap_or(ViewPosition::Unknown)
}

/// Matches exact patterns and descriptive names
fn match_view_patterns(s: &str) -> Option<ViewPosition> {
    if CC_STRINGS.contains(&s) || s == "cc" {
        return Some(ViewPosition::Cc);
    }

    // LMO - check before MLO (both contain "lateral" and "oblique")
    if matches_lmo(s) {
        return Some(ViewPosition::Lmo);
    }

    if matches_mlo(s) {
        return Some(ViewPosition::Mlo);
    }

    // LM - check before ML
    if LM_STRINGS.contains(&s) || s == "lm" {
        return Some(ViewPosition::Lm);
    }

    if ML_STRINGS.contains(&s) || s == "ml" {
        return Some(ViewPosition::Ml);
    }

    if s.contains("exaggerated laterally") || s == "xccl" {
        return Some(ViewPosition::Xccl);
    }

    if s.contains("exaggerated medially") || s == "xccm" {
        return Some(ViewPosition::Xccm);
    }

    None
}

fn matches_lmo(s: &str) -> bool {
    s == "lmo"
        || s == "latero-medial oblique"
        || s == "lateral-medial oblique"
        || (s.contains("oblique") && s.contains("latero"))
}

fn matches_mlo(s: &str) -> bool {
    s == "mlo"
        || s == "medio-lateral oblique"
        || s == "medial-lateral oblique"
        || (s.contains("oblique") && s.contains("medio"))
        || (s.contains("oblique") && s.contains("medial") && !s.contains("latero"))
}
