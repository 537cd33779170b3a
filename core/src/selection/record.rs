use crate::extraction::dates::parse_count;
use crate::extraction::{extract_group, extract_scan_type, extract_view_type, parse_date};
use crate::io::ImagingRow;
use crate::types::{ScanType, StudyGroup, ViewSlot, ViewType};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// One usable image with its derived fields
///
/// Used for view slot selection. Only images with a recognised view type
/// that maps onto one of the four canonical slots become records.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub patient_id: String,
    pub study_uid: String,
    pub sop_instance_uid: String,
    pub manufacturer: String,
    pub model: String,
    pub study_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub scan_type: ScanType,
    pub view_type: ViewType,
    pub slot: ViewSlot,
    /// Rows + columns, the resolution score used to rank duplicates
    pub resolution: Option<u32>,
    pub number_of_frames: u32,
    pub group: Option<StudyGroup>,
    pub path: String,
}

impl ImageRecord {
    /// Creates a record from a raw imaging row
    ///
    /// Returns `None` when the row has no view type or no 4-view slot.
    pub fn from_row(row: &ImagingRow) -> Option<Self> {
        let view_type = extract_view_type(row)?;
        let slot = view_type.slot()?;

        let resolution = match (parse_count(&row.rows), parse_count(&row.columns)) {
            (Some(r), Some(c)) => Some(r.saturating_add(c)),
            _ => None,
        };

        Some(Self {
            patient_id: row.patient_id.clone(),
            study_uid: row.study_uid.clone(),
            sop_instance_uid: row.sop_instance_uid.clone(),
            manufacturer: row.manufacturer.clone(),
            model: row.model.clone(),
            study_date: parse_date(&row.study_date),
            birth_date: parse_date(&row.birth_date),
            scan_type: extract_scan_type(row),
            view_type,
            slot,
            resolution,
            number_of_frames: parse_count(&row.number_of_frames).unwrap_or(0),
            group: extract_group(&row.path),
            path: row.path.clone(),
        })
    }

    /// View priority: 2 for standard views, 1 for additional views
    pub fn priority(&self) -> u8 {
        self.view_type.priority()
    }

    /// Checks if this record is preferred over another for the same slot
    ///
    /// Priority order:
    /// 1. Standard views beat additional views
    /// 2. Higher resolution beats lower resolution
    /// 3. More frames beat fewer frames
    /// 4. Fallback to SOPInstanceUID comparison (for stable ordering)
    pub fn is_preferred_to(&self, other: &ImageRecord) -> bool {
        if self.priority() != other.priority() {
            return self.priority() > other.priority();
        }

        if self.resolution != other.resolution {
            return self.resolution.unwrap_or(0) > other.resolution.unwrap_or(0);
        }

        if self.number_of_frames != other.number_of_frames {
            return self.number_of_frames > other.number_of_frames;
        }

        self.sop_instance_uid < other.sop_instance_uid
    }
}

// Ord/PartialOrd for use with min/max: the preferred record sorts first
impl PartialEq for ImageRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ImageRecord {}

impl PartialOrd for ImageRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ImageRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_preferred_to(other) {
            Ordering::Less
        } else if other.is_preferred_to(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{Laterality, ViewPosition};

    pub(crate) fn make_test_record(
        study_uid: &str,
        view: ViewPosition,
        laterality: Laterality,
        resolution: Option<u32>,
        frames: u32,
        sop_uid: &str,
    ) -> ImageRecord {
        let view_type = ViewType::new(laterality, view);
        ImageRecord {
            patient_id: "P1".to_string(),
            study_uid: study_uid.to_string(),
            sop_instance_uid: sop_uid.to_string(),
            manufacturer: "HOLOGIC".to_string(),
            model: "Selenia Dimensions".to_string(),
            study_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            birth_date: NaiveDate::from_ymd_opt(1970, 1, 1),
            scan_type: ScanType::Ffdm,
            view_type,
            slot: view_type.slot().unwrap(),
            resolution,
            number_of_frames: frames,
            group: Some(StudyGroup::A),
            path: format!("/data/Group A/{}.dcm", sop_uid),
        }
    }

    #[test]
    fn test_from_row() {
        let row = ImagingRow {
            patient_id: "P1".to_string(),
            study_uid: "S1".to_string(),
            series_description: "L CC".to_string(),
            image_laterality: "L".to_string(),
            rows: "3328".to_string(),
            columns: "2560".to_string(),
            number_of_frames: "1".to_string(),
            window_center: "2047".to_string(),
            window_width: "4096".to_string(),
            study_date: "20200101".to_string(),
            path: "/data/Group B/P1/1.dcm".to_string(),
            ..Default::default()
        };

        let record = ImageRecord::from_row(&row).unwrap();
        assert_eq!(record.slot, ViewSlot::Lcc);
        assert_eq!(record.resolution, Some(5888));
        assert_eq!(record.scan_type, ScanType::Ffdm);
        assert_eq!(record.group, Some(StudyGroup::B));
        assert_eq!(record.study_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(record.priority(), 2);
    }

    #[test]
    fn test_from_row_without_view_type() {
        let row = ImagingRow {
            series_description: "Breast Tomosynthesis Image".to_string(),
            image_laterality: "L".to_string(),
            ..Default::default()
        };
        assert!(ImageRecord::from_row(&row).is_none());
    }

    #[test]
    fn test_is_preferred_to_standard_view() {
        let standard = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "1");
        let additional =
            make_test_record("S1", ViewPosition::Xccl, Laterality::Left, Some(6000), 1, "2");

        assert!(standard.is_preferred_to(&additional));
        assert!(!additional.is_preferred_to(&standard));
    }

    #[test]
    fn test_is_preferred_to_resolution() {
        let high_res = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(7000), 1, "2");
        let low_res = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4500), 1, "1");
        let missing = make_test_record("S1", ViewPosition::Cc, Laterality::Left, None, 1, "0");

        assert!(high_res.is_preferred_to(&low_res));
        assert!(low_res.is_preferred_to(&missing));
    }

    #[test]
    fn test_is_preferred_to_frames() {
        let more = make_test_record("S1", ViewPosition::Mlo, Laterality::Right, Some(5000), 2, "2");
        let fewer = make_test_record("S1", ViewPosition::Mlo, Laterality::Right, Some(5000), 1, "1");

        assert!(more.is_preferred_to(&fewer));
        assert!(!fewer.is_preferred_to(&more));
    }

    #[test]
    fn test_ord_implementation() {
        let better = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(7000), 1, "BBB");
        let worse = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "AAA");

        assert!(better < worse);
        assert_eq!(std::cmp::min(&better, &worse), &better);
    }

    #[test]
    fn test_sop_uid_fallback_is_stable() {
        let a = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "AAA");
        let b = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "BBB");
        assert!(a.is_preferred_to(&b));
        assert!(a < b);
    }
}
