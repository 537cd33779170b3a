use crate::selection::record::ImageRecord;
use crate::types::{ScanType, StudyGroup, ViewSlot};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Identity of a study unit: one study acquired with one scan type on one model
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudyUnitKey {
    pub study_uid: String,
    pub scan_type: ScanType,
    pub model: String,
}

impl StudyUnitKey {
    pub fn of(record: &ImageRecord) -> Self {
        Self {
            study_uid: record.study_uid.clone(),
            scan_type: record.scan_type,
            model: record.model.clone(),
        }
    }
}

/// A study unit with at most one selected image per 4-view slot
#[derive(Debug, Clone, PartialEq)]
pub struct StudyUnit {
    pub key: StudyUnitKey,
    pub patient_id: String,
    pub manufacturer: String,
    pub study_date: Option<NaiveDate>,
    pub birth_date: Option<NaiveDate>,
    pub group: Option<StudyGroup>,
    /// Selected image path per slot, indexed by [`ViewSlot::index`]
    pub paths: [Option<String>; 4],
    pub view_count: usize,
}

impl StudyUnit {
    pub fn path(&self, slot: ViewSlot) -> Option<&str> {
        self.paths[slot.index()].as_deref()
    }
}

/// Selects the preferred record for each of the 4 canonical slots
///
/// Candidates for a slot are the records whose view maps onto it; the most
/// preferred one (see [`ImageRecord::is_preferred_to`]) wins.
///
/// # Returns
///
/// HashMap mapping each slot to the selected record (or None if not found)
pub fn get_preferred_views(records: &[ImageRecord]) -> HashMap<ViewSlot, Option<ImageRecord>> {
    ViewSlot::ALL
        .iter()
        .map(|slot| {
            let selection = records
                .iter()
                .filter(|record| record.slot == *slot)
                .min()
                .cloned();
            (*slot, selection)
        })
        .collect()
}

/// Groups image records into study units and fills their view slots
///
/// Unit-level fields (patient, manufacturer, dates, group) come from the
/// selected record of the first occupied slot in LCC, LMLO, RCC, RMLO order.
/// Units are returned ordered by key.
pub fn build_study_units(records: Vec<ImageRecord>) -> Vec<StudyUnit> {
    let mut grouped: BTreeMap<StudyUnitKey, Vec<ImageRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(StudyUnitKey::of(&record)).or_default().push(record);
    }

    grouped
        .into_iter()
        .filter_map(|(key, records)| build_unit(key, &records))
        .collect()
}

fn build_unit(key: StudyUnitKey, records: &[ImageRecord]) -> Option<StudyUnit> {
    let mut preferred = get_preferred_views(records);

    let selected: Vec<Option<ImageRecord>> = ViewSlot::ALL
        .iter()
        .map(|slot| preferred.remove(slot).flatten())
        .collect();

    let representative = selected.iter().flatten().next()?.clone();

    let mut paths: [Option<String>; 4] = Default::default();
    for (i, record) in selected.iter().enumerate() {
        paths[i] = record.as_ref().map(|r| r.path.clone());
    }
    let view_count = paths.iter().filter(|p| p.is_some()).count();

    log::debug!(
        "Study unit {} ({}, {}): {} of 4 views",
        key.study_uid,
        key.scan_type,
        key.model,
        view_count
    );

    Some(StudyUnit {
        key,
        patient_id: representative.patient_id,
        manufacturer: representative.manufacturer,
        study_date: representative.study_date,
        birth_date: representative.birth_date,
        group: representative.group,
        paths,
        view_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::record::tests::make_test_record;
    use crate::types::{Laterality, ViewPosition};

    #[test]
    fn test_get_preferred_views_picks_best_per_slot() {
        let records = vec![
            make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "1"),
            make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(7000), 1, "2"),
            make_test_record("S1", ViewPosition::Xccl, Laterality::Left, Some(9000), 1, "3"),
            make_test_record("S1", ViewPosition::Ml, Laterality::Right, Some(4000), 1, "4"),
        ];

        let selections = get_preferred_views(&records);
        assert_eq!(selections.len(), 4);

        let lcc = selections[&ViewSlot::Lcc].as_ref().unwrap();
        assert_eq!(lcc.sop_instance_uid, "2");

        let rmlo = selections[&ViewSlot::Rmlo].as_ref().unwrap();
        assert_eq!(rmlo.sop_instance_uid, "4");

        assert!(selections[&ViewSlot::Lmlo].is_none());
        assert!(selections[&ViewSlot::Rcc].is_none());
    }

    #[test]
    fn test_build_study_units_view_count() {
        let records = vec![
            make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "1"),
            make_test_record("S1", ViewPosition::Mlo, Laterality::Left, Some(4000), 1, "2"),
            make_test_record("S1", ViewPosition::Cc, Laterality::Right, Some(4000), 1, "3"),
            make_test_record("S1", ViewPosition::Mlo, Laterality::Right, Some(4000), 1, "4"),
            make_test_record("S1", ViewPosition::Mlo, Laterality::Right, Some(3000), 1, "5"),
            make_test_record("S2", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "6"),
        ];

        let units = build_study_units(records);
        assert_eq!(units.len(), 2);

        assert_eq!(units[0].key.study_uid, "S1");
        assert_eq!(units[0].view_count, 4);
        assert_eq!(units[0].path(ViewSlot::Rmlo), Some("/data/Group A/4.dcm"));

        assert_eq!(units[1].key.study_uid, "S2");
        assert_eq!(units[1].view_count, 1);
        assert_eq!(units[1].path(ViewSlot::Lmlo), None);
    }

    #[test]
    fn test_units_split_by_scan_type_and_model() {
        let ffdm = make_test_record("S1", ViewPosition::Cc, Laterality::Left, Some(4000), 1, "1");
        let mut tomo = ffdm.clone();
        tomo.scan_type = ScanType::Tomo;
        tomo.sop_instance_uid = "2".to_string();
        let mut other_model = ffdm.clone();
        other_model.model = "Senographe".to_string();

        let units = build_study_units(vec![ffdm, tomo, other_model]);
        assert_eq!(units.len(), 3);
        assert!(units.iter().all(|u| u.view_count == 1));
    }

    #[test]
    fn test_representative_from_first_occupied_slot() {
        let mut rcc = make_test_record("S1", ViewPosition::Cc, Laterality::Right, Some(4000), 1, "1");
        rcc.group = Some(StudyGroup::C);
        let mut lmlo =
            make_test_record("S1", ViewPosition::Mlo, Laterality::Left, Some(4000), 1, "2");
        lmlo.group = Some(StudyGroup::B);

        let units = build_study_units(vec![rcc, lmlo]);
        assert_eq!(units[0].group, Some(StudyGroup::B));
    }
}
