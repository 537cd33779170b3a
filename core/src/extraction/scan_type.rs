use crate::io::ImagingRow;
use crate::types::ScanType;

use super::dates::parse_count;

/// Extracts the scan type of an image row
///
/// # Algorithm
///
/// Rules are applied IN ORDER:
/// 1. Number of Frames > 1 → 3D
/// 2. Series description mentions "tomosynthesis" (any case) or
///    "ROUTINE3D_VOL" → 3D
/// 3. Series description mentions "preview" or "c-view" (any case) → S2D
/// 4. Window center or width missing → unused
/// 5. Default → 2D
pub fn extract_scan_type(row: &ImagingRow) -> ScanType {
    let num_frames = parse_count(&row.number_of_frames).unwrap_or(0);
    if num_frames > 1 {
        return ScanType::Tomo;
    }

    let description = row.series_description.as_str();
    let description_lower = description.to_lowercase();
    if description_lower.contains("tomosynthesis") || description.contains("ROUTINE3D_VOL") {
        return ScanType::Tomo;
    }

    if description_lower.contains("preview") || description_lower.contains("c-view") {
        return ScanType::Synth;
    }

    if row.window_center.trim().is_empty() || row.window_width.trim().is_empty() {
        return ScanType::Unused;
    }

    ScanType::Ffdm
}
