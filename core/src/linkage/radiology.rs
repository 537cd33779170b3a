use crate::extraction::{extract_birads, extract_density};
use crate::io::RadiologyRow;
use crate::types::{Birads, Density};
use std::collections::HashMap;

/// The most actionable radiology impression of one study
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiologyImpression {
    pub study_uid: String,
    pub birads: Birads,
    pub density: Density,
    /// Lowercased report text
    pub report: String,
}

impl RadiologyImpression {
    /// Resolves one report; `None` unless both BIRADS and density are found
    pub fn from_row(row: &RadiologyRow, marker: &str) -> Option<Self> {
        let birads = extract_birads(&row.report)?;
        let density = extract_density(&row.report, marker)?;
        Some(Self {
            study_uid: row.study_uid.clone(),
            birads,
            density,
            report: row.report.to_lowercase(),
        })
    }

    /// Higher BIRADS wins, then higher density
    pub fn is_preferred_to(&self, other: &RadiologyImpression) -> bool {
        (self.birads, self.density) > (other.birads, other.density)
    }

    pub fn is_mammography(&self, marker: &str) -> bool {
        self.report.contains(marker)
    }
}

/// Reduces radiology reports to one impression per study
///
/// On a full tie the first report seen is kept.
pub fn resolve_impressions(
    rows: &[RadiologyRow],
    marker: &str,
) -> HashMap<String, RadiologyImpression> {
    let mut by_study: HashMap<String, RadiologyImpression> = HashMap::new();
    let mut unusable = 0usize;

    for row in rows {
        let Some(impression) = RadiologyImpression::from_row(row, marker) else {
            unusable += 1;
            continue;
        };
        match by_study.get(&impression.study_uid) {
            Some(current) if !impression.is_preferred_to(current) => {}
            _ => {
                by_study.insert(impression.study_uid.clone(), impression);
            }
        }
    }

    if unusable > 0 {
        log::debug!(
            "Dropped {} radiology reports without BIRADS or density",
            unusable
        );
    }
    log::info!(
        "Resolved radiology impressions for {} studies from {} reports",
        by_study.len(),
        rows.len()
    );

    by_study
}
