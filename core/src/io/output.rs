//! The classified study table
//!
//! One row per surviving study, with blank cells for unresolved values.

use crate::error::Result;
use crate::linkage::{BiopsySideLabel, LinkedStudy};
use crate::types::{SeverityLabel, ViewSlot};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One output row, in output column order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    #[serde(rename = "Patient_Age")]
    pub patient_age: String,
    #[serde(rename = "Study_Instance_UID")]
    pub study_uid: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Manufacturer_Model_Name")]
    pub model: String,
    #[serde(rename = "Study_Date")]
    pub study_date: String,
    #[serde(rename = "Scan_Type")]
    pub scan_type: String,
    #[serde(rename = "Exam_Type")]
    pub exam_type: String,
    #[serde(rename = "Interval_Days")]
    pub interval_days: String,
    #[serde(rename = "Interval_Category")]
    pub interval_category: String,
    #[serde(rename = "BIRADS")]
    pub birads: String,
    #[serde(rename = "Density")]
    pub density: String,
    #[serde(rename = "LCC_Path")]
    pub lcc_path: String,
    #[serde(rename = "LMLO_Path")]
    pub lmlo_path: String,
    #[serde(rename = "RCC_Path")]
    pub rcc_path: String,
    #[serde(rename = "RMLO_Path")]
    pub rmlo_path: String,
    #[serde(rename = "View_Count")]
    pub view_count: String,
    #[serde(rename = "Left_Label")]
    pub left_label: String,
    #[serde(rename = "Right_Label")]
    pub right_label: String,
    #[serde(rename = "Study_Label")]
    pub study_label: String,
}

/// Output column names, matching the serde renames of [`OutputRow`]
pub const OUTPUT_COLUMNS: [&str; 21] = [
    "Group",
    "Patient_ID",
    "Patient_Age",
    "Study_Instance_UID",
    "Manufacturer",
    "Manufacturer_Model_Name",
    "Study_Date",
    "Scan_Type",
    "Exam_Type",
    "Interval_Days",
    "Interval_Category",
    "BIRADS",
    "Density",
    "LCC_Path",
    "LMLO_Path",
    "RCC_Path",
    "RMLO_Path",
    "View_Count",
    "Left_Label",
    "Right_Label",
    "Study_Label",
];

fn text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Side label as reported; blank when the report never named a side
fn reported_label(event: Option<&BiopsySideLabel>) -> String {
    match event {
        Some(event) if !event.source_side.is_undetermined() => event.label.to_string(),
        _ => String::new(),
    }
}

impl OutputRow {
    pub fn from_linked(linked: &LinkedStudy) -> Self {
        let record = &linked.study.record;
        let classification = &linked.study.classification;
        let unit = &record.unit;
        let impression = record.impression.as_ref();
        let path = |slot: ViewSlot| unit.path(slot).unwrap_or_default().to_string();

        Self {
            group: text(classification.group),
            patient_id: unit.patient_id.clone(),
            patient_age: text(record.age),
            study_uid: unit.key.study_uid.clone(),
            manufacturer: unit.manufacturer.clone(),
            model: unit.key.model.clone(),
            study_date: text(unit.study_date.map(|d| d.format("%Y-%m-%d"))),
            scan_type: unit.key.scan_type.to_string(),
            exam_type: text(linked.exam_type),
            interval_days: text(linked.interval_days),
            interval_category: text(linked.interval_category),
            birads: text(impression.map(|i| i.birads)),
            density: text(impression.map(|i| i.density)),
            lcc_path: path(ViewSlot::Lcc),
            lmlo_path: path(ViewSlot::Lmlo),
            rcc_path: path(ViewSlot::Rcc),
            rmlo_path: path(ViewSlot::Rmlo),
            view_count: unit.view_count.to_string(),
            left_label: reported_label(record.left.as_ref()),
            right_label: reported_label(record.right.as_ref()),
            study_label: SeverityLabel::or_na(classification.study_label).to_string(),
        }
    }
}

/// Converts linked studies into output rows
pub fn to_output_rows(linked: &[LinkedStudy]) -> Vec<OutputRow> {
    linked.iter().map(OutputRow::from_linked).collect()
}

/// Writes rows as CSV with a header line
///
/// The header is written even when there are no rows.
pub fn write_csv<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        writer.write_record(OUTPUT_COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows as a pretty-printed JSON array
#[cfg(feature = "json")]
pub fn write_json<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, rows)?;
    Ok(())
}

/// Writes rows as CSV to a file, replacing it
pub fn write_csv_file(rows: &[OutputRow], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(rows, BufWriter::new(file))?;
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::join::tests::{make_event, make_impression, make_unit, ymd};
    use crate::linkage::{Classification, ClassifiedStudy, StudyRecord};
    use crate::types::{
        BiopsySide, Birads, Decision, ExamType, IndexEligibility, IntervalCategory, StudyGroup,
    };

    fn make_linked(left_side: BiopsySide) -> LinkedStudy {
        let record = StudyRecord {
            unit: make_unit("P1", "S1", ymd(2020, 1, 1), Some(StudyGroup::A), 2),
            age: Some(50),
            left: Some(make_event(
                "P1",
                ymd(2020, 1, 11),
                left_side,
                SeverityLabel::Malignant,
            )),
            right: None,
            left_interval: Some(10),
            right_interval: None,
            impression: Some(make_impression("S1", Birads::B4a)),
        };
        LinkedStudy {
            study: ClassifiedStudy {
                record,
                classification: Classification {
                    group: Some(StudyGroup::A),
                    study_label: Some(SeverityLabel::Malignant),
                    left_label: Some(SeverityLabel::Malignant),
                    right_label: None,
                    biopsy_result: Some(SeverityLabel::Malignant),
                    decision: Decision::Accept,
                    eligibility: IndexEligibility::Available,
                },
            },
            exam_type: Some(ExamType::Index),
            interval_days: Some(0),
            interval_category: Some(IntervalCategory::SameDay),
        }
    }

    #[test]
    fn test_output_row_fields() {
        let row = OutputRow::from_linked(&make_linked(BiopsySide::Left));
        assert_eq!(row.group, "A");
        assert_eq!(row.patient_age, "50");
        assert_eq!(row.study_date, "2020-01-01");
        assert_eq!(row.scan_type, "2D");
        assert_eq!(row.exam_type, "index");
        assert_eq!(row.interval_category, "0");
        assert_eq!(row.birads, "4a");
        assert_eq!(row.density, "B");
        assert_eq!(row.lcc_path, "/data/S1/0.dcm");
        assert_eq!(row.lmlo_path, "/data/S1/1.dcm");
        assert_eq!(row.rcc_path, "");
        assert_eq!(row.view_count, "2");
        assert_eq!(row.left_label, "malignant");
        assert_eq!(row.right_label, "");
        assert_eq!(row.study_label, "malignant");
    }

    #[test]
    fn test_undetermined_side_is_blanked() {
        let row = OutputRow::from_linked(&make_linked(BiopsySide::AltSourceUnknown));
        assert_eq!(row.left_label, "");
        assert_eq!(row.study_label, "malignant");
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linked.csv");
        let rows = to_output_rows(&[make_linked(BiopsySide::Left)]);

        write_csv_file(&rows, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("Group,Patient_ID,Patient_Age,Study_Instance_UID"));
        assert!(header.ends_with("Left_Label,Right_Label,Study_Label"));
        let data = lines.next().unwrap();
        assert!(data.starts_with("A,P1,50,S1,HOLOGIC,Selenia Dimensions,2020-01-01,2D,index,0,0,4a,B"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_header_matches_serialized_columns() {
        let rows = to_output_rows(&[make_linked(BiopsySide::Left)]);
        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, OUTPUT_COLUMNS.join(","));
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        assert!(content.starts_with("Group,Patient_ID,"));
        assert_eq!(content.lines().count(), 1);
        assert_eq!(content.trim_end(), OUTPUT_COLUMNS.join(","));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_write_json() {
        let rows = to_output_rows(&[make_linked(BiopsySide::Left)]);
        let mut buffer = Vec::new();
        write_json(&rows, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["Exam_Type"], "index");
        assert_eq!(value[0]["Study_Label"], "malignant");
    }
}
