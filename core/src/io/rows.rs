//! Raw input rows as they arrive from the upstream tabular exports
//!
//! Every field is kept as text; interpretation happens in [`crate::extraction`].
//! Column aliases absorb the differing headers of the source exports, so
//! several biopsy files can be concatenated without renaming columns first.

use crate::error::{MammolinkError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One image/view with flat DICOM-derived fields
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImagingRow {
    #[serde(rename = "Patient_ID", alias = "patientId")]
    pub patient_id: String,
    #[serde(rename = "Study_Instance_UID", alias = "studyUID")]
    pub study_uid: String,
    #[serde(rename = "SOP Instance UID")]
    pub sop_instance_uid: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Manufacturer_Model_Name")]
    pub model: String,
    #[serde(rename = "Study_Date")]
    pub study_date: String,
    #[serde(rename = "Patient_Birth_Date")]
    pub birth_date: String,
    #[serde(rename = "Patient_Sex")]
    pub sex: String,
    #[serde(rename = "Series_Description")]
    pub series_description: String,
    #[serde(rename = "Study_Description")]
    pub study_description: String,
    #[serde(rename = "Image Laterality")]
    pub image_laterality: String,
    #[serde(rename = "View Position")]
    pub view_position: String,
    #[serde(rename = "Plane Orientation")]
    pub plane_orientation: String,
    #[serde(rename = "Rows")]
    pub rows: String,
    #[serde(rename = "Columns")]
    pub columns: String,
    #[serde(rename = "Number of Frames")]
    pub number_of_frames: String,
    #[serde(rename = "Window Center")]
    pub window_center: String,
    #[serde(rename = "Window Width")]
    pub window_width: String,
    #[serde(rename = "View Modifier Code Sequence Meaning")]
    pub view_modifier_meaning: String,
    #[serde(rename = "Presentation Intent Type")]
    pub presentation_intent: String,
    #[serde(rename = "Estimated Radiographic Magnification Factor")]
    pub magnification_factor: String,
    #[serde(rename = "Breast Implant Present")]
    pub implant_present: String,
    #[serde(rename = "Path")]
    pub path: String,
}

/// One biopsy report
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BiopsyRow {
    #[serde(rename = "patientId", alias = "Patient_ID", alias = "Patient ID")]
    pub patient_id: String,
    #[serde(
        rename = "studyUID",
        alias = "Representative_Study_Instance_UID",
        alias = "Index Exam Study UID"
    )]
    pub study_uid: String,
    #[serde(rename = "completedDate")]
    pub completed_date: String,
    #[serde(rename = "reports", alias = "bx_report")]
    pub report: String,
    /// Structured finding of the alternate source, which never states a side
    #[serde(rename = "Biopsy Finding (Negative, Benign, Malignant)")]
    pub structured_finding: String,
}

/// One radiology report
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RadiologyRow {
    #[serde(rename = "Study_Instance_UID", alias = "studyUID")]
    pub study_uid: String,
    #[serde(rename = "reports")]
    pub report: String,
}

/// Reads all rows of type `T` from a CSV file
pub fn read_rows<T>(path: &Path) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    if !path.is_file() {
        return Err(MammolinkError::MissingInput(path.display().to_string()));
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| MammolinkError::csv(path, e))?;
    collect_rows(reader, path)
}

/// Reads all rows of type `T` from an in-memory CSV source
pub fn read_rows_from<T, R>(source: R, name: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);
    collect_rows(reader, Path::new(name))
}

fn collect_rows<T, R>(mut reader: csv::Reader<R>, path: &Path) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result.map_err(|e| MammolinkError::csv(path, e))?);
    }
    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
