use crate::error::{MammolinkError, Result};
use crate::extraction::check_exclusion;
use crate::io::{read_rows, BiopsyRow, ImagingRow, RadiologyRow};
use crate::linkage::{
    classify_studies, join_records, resolve_biopsies, resolve_impressions, select_index,
    LinkedStudy,
};
use crate::selection::{build_study_units, ImageRecord};
use crate::types::{ExamType, LinkageConfig};
use std::path::{Path, PathBuf};

/// Main entry point for study linkage
///
/// Runs the full pipeline over the three input tables: image derivation and
/// outlier filtering, view slot selection, biopsy and radiology reduction,
/// classification and index selection.
///
/// # Example
///
/// ```
/// use mammolink_core::io::{read_rows_from, ImagingRow, RadiologyRow};
/// use mammolink_core::{LinkageConfig, StudyLinker};
///
/// let imaging: Vec<ImagingRow> = read_rows_from(
///     "Patient_ID,Study_Instance_UID,Study_Date,Series_Description,Image Laterality,Rows,Columns,Window Center,Window Width,Path\n\
///      P1,S1,20200101,L CC,L,3328,2560,2047,4096,/data/Group D/P1/1.dcm\n\
///      P1,S1,20200101,R CC,R,3328,2560,2047,4096,/data/Group D/P1/2.dcm\n"
///         .as_bytes(),
///     "imaging",
/// )
/// .unwrap();
/// let radiology: Vec<RadiologyRow> = read_rows_from(
///     "Study_Instance_UID,reports\nS1,MAMMO SCREENING: scattered fibroglandular. BIRADS: 1\n"
///         .as_bytes(),
///     "radiology",
/// )
/// .unwrap();
///
/// let linker = StudyLinker::new(LinkageConfig::default());
/// let outcome = linker.link(&imaging, &[], &radiology);
///
/// assert_eq!(outcome.studies.len(), 1);
/// assert_eq!(outcome.studies[0].exam_type.unwrap().to_string(), "index");
/// assert_eq!(outcome.studies[0].study.record.unit.view_count, 2);
/// ```
pub struct StudyLinker {
    config: LinkageConfig,
}

/// Counts collected while linking, used for the run summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkageStats {
    pub imaging_rows: usize,
    pub excluded_images: usize,
    pub images_without_view: usize,
    pub study_units: usize,
    pub biopsy_patients: usize,
    pub radiology_studies: usize,
    pub accepted_studies: usize,
    pub index_studies: usize,
}

/// Result of a linkage run
#[derive(Debug, Clone)]
pub struct LinkageOutcome {
    /// Accepted studies, grouped by patient and scan type
    pub studies: Vec<LinkedStudy>,
    pub stats: LinkageStats,
}

impl StudyLinker {
    pub fn new(config: LinkageConfig) -> Self {
        Self { config }
    }

    /// Filters outliers and derives image records from raw rows
    ///
    /// Returns the records and the number of rows excluded by the filter
    /// and dropped for lacking a usable view.
    pub fn derive_records(&self, rows: &[ImagingRow]) -> (Vec<ImageRecord>, usize, usize) {
        let mut records = Vec::with_capacity(rows.len());
        let mut excluded = 0usize;
        let mut without_view = 0usize;

        for row in rows {
            if let Some(reason) = check_exclusion(row, &self.config.filter) {
                log::debug!(
                    "Excluded image {} of study {}: {:?}",
                    row.sop_instance_uid,
                    row.study_uid,
                    reason
                );
                excluded += 1;
                continue;
            }
            match ImageRecord::from_row(row) {
                Some(record) => records.push(record),
                None => without_view += 1,
            }
        }

        log::info!(
            "Derived {} image records from {} rows ({} excluded, {} without a view)",
            records.len(),
            rows.len(),
            excluded,
            without_view
        );
        (records, excluded, without_view)
    }

    /// Links in-memory tables
    pub fn link(
        &self,
        imaging: &[ImagingRow],
        biopsies: &[BiopsyRow],
        reports: &[RadiologyRow],
    ) -> LinkageOutcome {
        let (records, excluded_images, images_without_view) = self.derive_records(imaging);
        let units = build_study_units(records);
        let study_units = units.len();

        let biopsies = resolve_biopsies(biopsies);
        let impressions = resolve_impressions(reports, &self.config.mammo_marker);

        let joined = join_records(units, &biopsies, &impressions);
        let accepted = classify_studies(joined, &self.config);
        let accepted_studies = accepted.len();
        let studies = select_index(accepted);

        let stats = LinkageStats {
            imaging_rows: imaging.len(),
            excluded_images,
            images_without_view,
            study_units,
            biopsy_patients: biopsies.len(),
            radiology_studies: impressions.len(),
            accepted_studies,
            index_studies: studies
                .iter()
                .filter(|s| s.exam_type == Some(ExamType::Index))
                .count(),
        };

        LinkageOutcome { studies, stats }
    }

    /// Reads the input tables from CSV files and links them
    ///
    /// Several biopsy files are concatenated in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input file is missing or is not valid CSV
    /// - The imaging table has no rows
    pub fn link_files(
        &self,
        imaging: &Path,
        biopsies: &[PathBuf],
        radiology: &Path,
    ) -> Result<LinkageOutcome> {
        let imaging_rows: Vec<ImagingRow> = read_rows(imaging)?;
        if imaging_rows.is_empty() {
            return Err(MammolinkError::InvalidInput(format!(
                "imaging table {} has no rows",
                imaging.display()
            )));
        }

        let mut biopsy_rows: Vec<BiopsyRow> = Vec::new();
        for path in biopsies {
            let rows: Vec<BiopsyRow> = read_rows(path)?;
            if rows.is_empty() {
                log::warn!("Biopsy table {} has no rows", path.display());
            }
            biopsy_rows.extend(rows);
        }

        let radiology_rows: Vec<RadiologyRow> = read_rows(radiology)?;
        if radiology_rows.is_empty() {
            log::warn!("Radiology table {} has no rows", radiology.display());
        }

        Ok(self.link(&imaging_rows, &biopsy_rows, &radiology_rows))
    }
}

impl Default for StudyLinker {
    fn default() -> Self {
        Self::new(LinkageConfig::default())
    }
}
