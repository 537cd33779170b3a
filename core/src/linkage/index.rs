//! Index study selection
//!
//! Accepted studies are partitioned by patient and scan type. Within each
//! partition the best available study becomes the index study and every
//! sibling is tagged relative to it. Siblings that cannot be placed by date
//! fall back to the biopsy that labelled the patient.

use crate::extraction::days_between;
use crate::linkage::biopsy::BiopsySideLabel;
use crate::linkage::classify::ClassifiedStudy;
use crate::linkage::interval::categorize_interval;
use crate::types::{ExamType, IntervalCategory, ScanType, SeverityLabel, StudyGroup};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Partition key for index selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientGroupKey {
    pub patient_id: String,
    pub scan_type: ScanType,
}

impl PatientGroupKey {
    pub fn of(study: &ClassifiedStudy) -> Self {
        Self {
            patient_id: study.record.patient_id().to_string(),
            scan_type: study.record.scan_type(),
        }
    }
}

/// A classified study tagged relative to its partition's index study
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedStudy {
    pub study: ClassifiedStudy,
    /// `None` when the study could not be placed
    pub exam_type: Option<ExamType>,
    /// Days from the anchor (index study or biopsy) to this study
    pub interval_days: Option<i64>,
    pub interval_category: Option<IntervalCategory>,
}

/// Ordering used to pick the index study; the first element wins
///
/// Available studies first, then more views, then the most recent study.
/// Group and study id make the order total.
pub fn index_order(a: &ClassifiedStudy, b: &ClassifiedStudy) -> Ordering {
    let (ca, cb) = (&a.classification, &b.classification);
    cb.eligibility
        .is_available()
        .cmp(&ca.eligibility.is_available())
        .then_with(|| b.record.unit.view_count.cmp(&a.record.unit.view_count))
        .then_with(|| b.record.study_date().cmp(&a.record.study_date()))
        .then_with(|| ca.group.cmp(&cb.group))
        .then_with(|| a.record.study_uid().cmp(b.record.study_uid()))
        .then_with(|| a.record.unit.key.model.cmp(&b.record.unit.key.model))
}

/// Labels searched, in order, when placing a study against a biopsy
fn fallback_labels(group: Option<StudyGroup>) -> &'static [SeverityLabel] {
    match group {
        Some(StudyGroup::A) => &[SeverityLabel::Malignant],
        Some(StudyGroup::B) => &[SeverityLabel::Benign, SeverityLabel::HighRisk],
        _ => &[],
    }
}

/// Date of the biopsy a study is placed against when dates cannot resolve
///
/// When both breasts carry the searched label the later biopsy is used,
/// the left one on ties.
pub fn biopsy_anchor(study: &ClassifiedStudy) -> Option<NaiveDate> {
    let record = &study.record;
    fallback_labels(study.classification.group)
        .iter()
        .find_map(|target| {
            let dated = |event: &Option<BiopsySideLabel>| {
                event
                    .as_ref()
                    .filter(|e| e.label == *target)
                    .and_then(|e| e.completed_date)
            };
            match (dated(&record.left), dated(&record.right)) {
                (Some(left), Some(right)) if right > left => Some(right),
                (Some(left), _) => Some(left),
                (None, right) => right,
            }
        })
}

/// Places a study relative to a biopsy date
fn biopsy_exam_type(study_date: Option<NaiveDate>, anchor: Option<NaiveDate>) -> Option<ExamType> {
    match (study_date, anchor) {
        (Some(study), Some(biopsy)) if biopsy > study => Some(ExamType::PreBiopsy),
        (Some(_), Some(_)) => Some(ExamType::PostBiopsy),
        _ => None,
    }
}

/// Tags one non-index study of a partition
fn place_sibling(
    study: &ClassifiedStudy,
    index_date: Option<NaiveDate>,
) -> (Option<ExamType>, Option<i64>) {
    let study_date = study.record.study_date();
    match (index_date, study_date) {
        (Some(index), Some(date)) if date < index => {
            (Some(ExamType::PreIndex), days_between(index_date, study_date))
        }
        (Some(index), Some(date)) if date > index => {
            (Some(ExamType::PostIndex), days_between(index_date, study_date))
        }
        (Some(_), Some(_)) => {
            let exam_type = biopsy_exam_type(study_date, biopsy_anchor(study));
            (exam_type, exam_type.map(|_| 0))
        }
        _ => {
            let anchor = biopsy_anchor(study);
            (
                biopsy_exam_type(study_date, anchor),
                days_between(anchor, study_date),
            )
        }
    }
}

fn link(study: ClassifiedStudy, exam_type: Option<ExamType>, interval: Option<i64>) -> LinkedStudy {
    LinkedStudy {
        study,
        exam_type,
        interval_days: interval,
        interval_category: interval.map(categorize_interval),
    }
}

/// Selects one index study per partition and tags every study
///
/// Output is grouped by partition, each partition in selection order.
pub fn select_index(studies: Vec<ClassifiedStudy>) -> Vec<LinkedStudy> {
    let mut partitions: BTreeMap<PatientGroupKey, Vec<ClassifiedStudy>> = BTreeMap::new();
    for study in studies {
        partitions
            .entry(PatientGroupKey::of(&study))
            .or_default()
            .push(study);
    }

    let mut linked = Vec::new();
    let mut index_count = 0usize;
    for (key, mut members) in partitions {
        members.sort_by(index_order);

        let mut members = members.into_iter();
        let index_date = match members.next() {
            Some(first) if first.classification.eligibility.is_available() => {
                let index_date = first.record.study_date();
                index_count += 1;
                linked.push(link(first, Some(ExamType::Index), Some(0)));
                index_date
            }
            Some(first) => {
                log::debug!(
                    "No available index study for patient {} ({})",
                    key.patient_id,
                    key.scan_type
                );
                let (exam_type, interval) = place_sibling(&first, None);
                linked.push(link(first, exam_type, interval));
                None
            }
            None => continue,
        };

        for study in members {
            let (exam_type, interval) = place_sibling(&study, index_date);
            linked.push(link(study, exam_type, interval));
        }
    }

    log::info!(
        "Selected {} index studies across {} studies",
        index_count,
        linked.len()
    );
    linked
}
