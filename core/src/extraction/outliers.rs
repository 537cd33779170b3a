use crate::io::ImagingRow;
use crate::types::FilterConfig;

use super::dates::parse_number;

/// Reason an imaging row was dropped by the outlier filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    ViewModifier,
    MalePatient,
    ForProcessing,
    Magnified,
    Implant,
    StudyDescription,
}

/// Checks an imaging row against the outlier filter
///
/// Returns the first matching exclusion, or `None` if the row is kept.
/// A blank or unreadable magnification factor counts as no magnification.
pub fn check_exclusion(row: &ImagingRow, filter: &FilterConfig) -> Option<Exclusion> {
    if filter.exclude_view_modifiers && !row.view_modifier_meaning.trim().is_empty() {
        return Some(Exclusion::ViewModifier);
    }

    if filter.exclude_male && row.sex.trim() == "M" {
        return Some(Exclusion::MalePatient);
    }

    if filter.exclude_for_processing && row.presentation_intent.trim() == "FOR PROCESSING" {
        return Some(Exclusion::ForProcessing);
    }

    if let Some(max) = filter.max_magnification {
        let factor = parse_number(&row.magnification_factor).unwrap_or(0.0);
        if factor >= max {
            return Some(Exclusion::Magnified);
        }
    }

    if filter.exclude_implants && row.implant_present.trim() == "YES" {
        return Some(Exclusion::Implant);
    }

    if filter
        .excluded_study_descriptions
        .iter()
        .any(|marker| row.study_description.contains(marker.as_str()))
    {
        return Some(Exclusion::StudyDescription);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screening_row() -> ImagingRow {
        ImagingRow {
            sex: "F".to_string(),
            presentation_intent: "FOR PRESENTATION".to_string(),
            magnification_factor: "1.1".to_string(),
            implant_present: "NO".to_string(),
            study_description: "MAMMO SCREENING BILATERAL".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_screening_row_is_kept() {
        assert_eq!(check_exclusion(&screening_row(), &FilterConfig::default()), None);
    }

    #[test]
    fn test_each_exclusion() {
        let filter = FilterConfig::default();

        let mut row = screening_row();
        row.view_modifier_meaning = "spot compression".to_string();
        assert_eq!(check_exclusion(&row, &filter), Some(Exclusion::ViewModifier));

        let mut row = screening_row();
        row.sex = "M".to_string();
        assert_eq!(check_exclusion(&row, &filter), Some(Exclusion::MalePatient));

        let mut row = screening_row();
        row.presentation_intent = "FOR PROCESSING".to_string();
        assert_eq!(check_exclusion(&row, &filter), Some(Exclusion::ForProcessing));

        let mut row = screening_row();
        row.magnification_factor = "1.5".to_string();
        assert_eq!(check_exclusion(&row, &filter), Some(Exclusion::Magnified));

        let mut row = screening_row();
        row.implant_present = "YES".to_string();
        assert_eq!(check_exclusion(&row, &filter), Some(Exclusion::Implant));

        let mut row = screening_row();
        row.study_description = "STEREOTACTIC BIOPSY".to_string();
        assert_eq!(
            check_exclusion(&row, &filter),
            Some(Exclusion::StudyDescription)
        );
    }

    #[test]
    fn test_blank_magnification_is_kept() {
        let mut row = screening_row();
        row.magnification_factor = String::new();
        assert_eq!(check_exclusion(&row, &FilterConfig::default()), None);
    }

    #[test]
    fn test_permissive_keeps_everything() {
        let mut row = screening_row();
        row.sex = "M".to_string();
        row.implant_present = "YES".to_string();
        row.magnification_factor = "1.8".to_string();
        row.study_description = "SPECIMEN".to_string();
        assert_eq!(check_exclusion(&row, &FilterConfig::permissive()), None);
    }
}
