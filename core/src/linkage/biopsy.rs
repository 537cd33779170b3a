use crate::extraction::{parse_date, resolve_finding};
use crate::io::BiopsyRow;
use crate::types::{BiopsySide, Laterality, SeverityLabel};
use chrono::NaiveDate;
use std::collections::HashMap;

/// One resolved biopsy event attributed to one breast of one patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiopsySideLabel {
    pub patient_id: String,
    pub completed_date: Option<NaiveDate>,
    /// Side the source report named, before attribution
    pub source_side: BiopsySide,
    pub label: SeverityLabel,
}

impl BiopsySideLabel {
    /// Checks if this event outranks another for the same breast
    ///
    /// More severe labels win; among equally severe ones the most recent
    /// biopsy wins. A missing date loses to any date.
    pub fn is_preferred_to(&self, other: &BiopsySideLabel) -> bool {
        if self.label != other.label {
            return self.label > other.label;
        }
        self.completed_date > other.completed_date
    }
}

/// The best biopsy event per breast for one patient
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientBiopsies {
    pub left: Option<BiopsySideLabel>,
    pub right: Option<BiopsySideLabel>,
}

impl PatientBiopsies {
    pub fn side(&self, laterality: Laterality) -> Option<&BiopsySideLabel> {
        match laterality {
            Laterality::Left => self.left.as_ref(),
            Laterality::Right => self.right.as_ref(),
            Laterality::Unknown => None,
        }
    }

    fn offer(&mut self, laterality: Laterality, event: BiopsySideLabel) {
        let slot = match laterality {
            Laterality::Left => &mut self.left,
            Laterality::Right => &mut self.right,
            Laterality::Unknown => return,
        };
        match slot {
            Some(current) if !event.is_preferred_to(current) => {}
            _ => *slot = Some(event),
        }
    }
}

/// Resolves raw biopsy reports into the best event per patient and breast
///
/// Each report is resolved to a side and severity; reports with no side or
/// no severity are dropped. Undetermined sides count for both breasts.
pub fn resolve_biopsies(rows: &[BiopsyRow]) -> HashMap<String, PatientBiopsies> {
    let mut by_patient: HashMap<String, PatientBiopsies> = HashMap::new();
    let mut unusable = 0usize;

    for row in rows {
        let finding = resolve_finding(&row.report, &row.structured_finding);
        let (Some(side), Some(label)) = (finding.side, finding.label) else {
            unusable += 1;
            continue;
        };
        if row.patient_id.is_empty() {
            unusable += 1;
            continue;
        }

        let completed_date = parse_date(&row.completed_date);
        let entry = by_patient.entry(row.patient_id.clone()).or_default();
        for laterality in [Laterality::Left, Laterality::Right] {
            if side.covers(laterality) {
                entry.offer(
                    laterality,
                    BiopsySideLabel {
                        patient_id: row.patient_id.clone(),
                        completed_date,
                        source_side: side,
                        label,
                    },
                );
            }
        }
    }

    if unusable > 0 {
        log::debug!("Dropped {} biopsy reports without side or finding", unusable);
    }
    log::info!(
        "Resolved biopsy labels for {} patients from {} reports",
        by_patient.len(),
        rows.len()
    );

    by_patient
}
