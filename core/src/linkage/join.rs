use crate::extraction::{age_in_years, days_between};
use crate::linkage::biopsy::{BiopsySideLabel, PatientBiopsies};
use crate::linkage::radiology::RadiologyImpression;
use crate::selection::StudyUnit;
use crate::types::{Laterality, ScanType, SeverityLabel};
use chrono::NaiveDate;
use std::collections::HashMap;

/// One study unit with its biopsy and radiology context attached
#[derive(Debug, Clone, PartialEq)]
pub struct StudyRecord {
    pub unit: StudyUnit,
    /// Patient age at the study, in rounded 365-day years
    pub age: Option<i64>,
    pub left: Option<BiopsySideLabel>,
    pub right: Option<BiopsySideLabel>,
    /// Days from the study to the left biopsy; negative when the biopsy came first
    pub left_interval: Option<i64>,
    pub right_interval: Option<i64>,
    pub impression: Option<RadiologyImpression>,
}

impl StudyRecord {
    pub fn patient_id(&self) -> &str {
        &self.unit.patient_id
    }

    pub fn study_uid(&self) -> &str {
        &self.unit.key.study_uid
    }

    pub fn scan_type(&self) -> ScanType {
        self.unit.key.scan_type
    }

    pub fn study_date(&self) -> Option<NaiveDate> {
        self.unit.study_date
    }

    pub fn side(&self, laterality: Laterality) -> Option<&BiopsySideLabel> {
        match laterality {
            Laterality::Left => self.left.as_ref(),
            Laterality::Right => self.right.as_ref(),
            Laterality::Unknown => None,
        }
    }

    /// Untimed label of one breast
    pub fn side_label(&self, laterality: Laterality) -> Option<SeverityLabel> {
        self.side(laterality).map(|event| event.label)
    }

    pub fn side_interval(&self, laterality: Laterality) -> Option<i64> {
        match laterality {
            Laterality::Left => self.left_interval,
            Laterality::Right => self.right_interval,
            Laterality::Unknown => None,
        }
    }
}

/// Attaches biopsy and radiology context to every study unit
///
/// Biopsies join by patient regardless of date; impressions join by
/// study id. Units without a match keep empty fields.
pub fn join_records(
    units: Vec<StudyUnit>,
    biopsies: &HashMap<String, PatientBiopsies>,
    impressions: &HashMap<String, RadiologyImpression>,
) -> Vec<StudyRecord> {
    let records: Vec<StudyRecord> = units
        .into_iter()
        .map(|unit| {
            let patient = biopsies.get(&unit.patient_id);
            let left = patient.and_then(|p| p.left.clone());
            let right = patient.and_then(|p| p.right.clone());

            let interval = |event: &Option<BiopsySideLabel>| {
                days_between(unit.study_date, event.as_ref()?.completed_date)
            };
            let left_interval = interval(&left);
            let right_interval = interval(&right);

            StudyRecord {
                age: age_in_years(unit.birth_date, unit.study_date),
                impression: impressions.get(&unit.key.study_uid).cloned(),
                left,
                right,
                left_interval,
                right_interval,
                unit,
            }
        })
        .collect();

    log::info!(
        "Joined {} studies ({} with biopsy, {} with radiology)",
        records.len(),
        records
            .iter()
            .filter(|r| r.left.is_some() || r.right.is_some())
            .count(),
        records.iter().filter(|r| r.impression.is_some()).count()
    );

    records
}
