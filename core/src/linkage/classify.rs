//! Per-study classification
//!
//! Each study is classified independently: group reclassification, the
//! untimed study label, the accept gate, the windowed biopsy result and
//! finally index eligibility.

use crate::linkage::join::StudyRecord;
use crate::types::{
    Decision, IndexEligibility, Laterality, LinkageConfig, SeverityLabel, StudyGroup,
};

/// Classification of one study
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Group after reclassification
    pub group: Option<StudyGroup>,
    /// Most severe untimed side label; `None` is reported as NA
    pub study_label: Option<SeverityLabel>,
    /// Side labels whose biopsy fell inside the confirmation window
    pub left_label: Option<SeverityLabel>,
    pub right_label: Option<SeverityLabel>,
    /// Most severe windowed side label
    pub biopsy_result: Option<SeverityLabel>,
    pub decision: Decision,
    pub eligibility: IndexEligibility,
}

/// A joined study together with its classification
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedStudy {
    pub record: StudyRecord,
    pub classification: Classification,
}

/// Moves group C studies with a benign BIRADS assessment (2 or 3) to group D
///
/// Applying it twice gives the same result as applying it once.
pub fn reclassify_group(record: &StudyRecord, group: Option<StudyGroup>) -> Option<StudyGroup> {
    let benign_assessment = record
        .impression
        .as_ref()
        .is_some_and(|impression| impression.birads.is_benign_assessment());
    match group {
        Some(StudyGroup::C) if benign_assessment => Some(StudyGroup::D),
        other => other,
    }
}

/// Most severe of the two untimed side labels
pub fn study_label(record: &StudyRecord) -> Option<SeverityLabel> {
    SeverityLabel::most_severe(
        record.side_label(Laterality::Left),
        record.side_label(Laterality::Right),
    )
}

/// Side label honoured only when its biopsy falls in the confirmation window
pub fn windowed_label(
    record: &StudyRecord,
    laterality: Laterality,
    config: &LinkageConfig,
) -> Option<SeverityLabel> {
    let interval = record.side_interval(laterality)?;
    if config.biopsy_in_window(interval) {
        record.side_label(laterality)
    } else {
        None
    }
}

/// Accept/reject gate on group and study label
///
/// A study is only accepted when its radiology report is a mammography report.
pub fn decide(
    record: &StudyRecord,
    group: Option<StudyGroup>,
    label: Option<SeverityLabel>,
    config: &LinkageConfig,
) -> Decision {
    let is_mammography = record
        .impression
        .as_ref()
        .is_some_and(|impression| impression.is_mammography(&config.mammo_marker));
    if !is_mammography {
        return Decision::Reject;
    }

    let accepted = match group {
        Some(StudyGroup::A) => label == Some(SeverityLabel::Malignant),
        Some(StudyGroup::B) => matches!(
            label,
            Some(SeverityLabel::Benign) | Some(SeverityLabel::HighRisk)
        ),
        Some(StudyGroup::C) => label.is_none(),
        Some(StudyGroup::D) => label != Some(SeverityLabel::Malignant),
        None => false,
    };

    if accepted {
        Decision::Accept
    } else {
        Decision::Reject
    }
}

/// Whether a study may serve as the index study of its partition
///
/// Groups A and B need a confirming biopsy inside the window; groups C and
/// D are judged on the untimed study label.
pub fn eligibility(
    group: Option<StudyGroup>,
    label: Option<SeverityLabel>,
    biopsy_result: Option<SeverityLabel>,
) -> IndexEligibility {
    let available = match group {
        Some(StudyGroup::A) => biopsy_result == Some(SeverityLabel::Malignant),
        Some(StudyGroup::B) => matches!(
            biopsy_result,
            Some(SeverityLabel::Benign) | Some(SeverityLabel::HighRisk)
        ),
        Some(StudyGroup::C) => label.is_none(),
        Some(StudyGroup::D) => label != Some(SeverityLabel::Malignant),
        None => false,
    };

    if available {
        IndexEligibility::Available
    } else {
        IndexEligibility::Unavailable
    }
}

/// Classifies one study
pub fn classify(record: &StudyRecord, config: &LinkageConfig) -> Classification {
    let group = reclassify_group(record, record.unit.group);
    let label = study_label(record);
    let decision = decide(record, group, label, config);

    let left_label = windowed_label(record, Laterality::Left, config);
    let right_label = windowed_label(record, Laterality::Right, config);
    let biopsy_result = SeverityLabel::most_severe(left_label, right_label);

    Classification {
        group,
        study_label: label,
        left_label,
        right_label,
        biopsy_result,
        decision,
        eligibility: eligibility(group, label, biopsy_result),
    }
}

/// Classifies every study and drops the rejected ones
pub fn classify_studies(records: Vec<StudyRecord>, config: &LinkageConfig) -> Vec<ClassifiedStudy> {
    let total = records.len();
    let accepted: Vec<ClassifiedStudy> = records
        .into_iter()
        .filter_map(|record| {
            let classification = classify(&record, config);
            if classification.decision.is_accept() {
                Some(ClassifiedStudy {
                    record,
                    classification,
                })
            } else {
                log::debug!(
                    "Rejected study {} (group {}, label {})",
                    record.study_uid(),
                    classification
                        .group
                        .map_or("none", |g| g.simple_name()),
                    SeverityLabel::or_na(classification.study_label)
                );
                None
            }
        })
        .collect();

    log::info!("Accepted {} of {} studies", accepted.len(), total);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::join::tests::{make_event, make_impression, make_unit, ymd};
    use crate::types::{BiopsySide, Birads};
    use rstest::rstest;

    fn make_record(
        group: StudyGroup,
        birads: Option<Birads>,
        left: Option<(SeverityLabel, i64)>,
        right: Option<(SeverityLabel, i64)>,
    ) -> StudyRecord {
        let study_date = ymd(2020, 1, 1);
        let event = |side: BiopsySide, (label, days): (SeverityLabel, i64)| {
            let date = study_date.map(|d| d + chrono::Duration::days(days));
            make_event("P1", date, side, label)
        };
        StudyRecord {
            unit: make_unit("P1", "S1", study_date, Some(group), 4),
            age: Some(50),
            left: left.map(|l| event(BiopsySide::Left, l)),
            right: right.map(|r| event(BiopsySide::Right, r)),
            left_interval: left.map(|(_, days)| days),
            right_interval: right.map(|(_, days)| days),
            impression: birads.map(|b| make_impression("S1", b)),
        }
    }

    #[rstest]
    #[case(StudyGroup::C, Birads::B2, StudyGroup::D)]
    #[case(StudyGroup::C, Birads::B3, StudyGroup::D)]
    #[case(StudyGroup::C, Birads::B4, StudyGroup::C)]
    #[case(StudyGroup::C, Birads::B1, StudyGroup::C)]
    #[case(StudyGroup::A, Birads::B2, StudyGroup::A)]
    #[case(StudyGroup::D, Birads::B3, StudyGroup::D)]
    fn test_reclassify_group(
        #[case] group: StudyGroup,
        #[case] birads: Birads,
        #[case] expected: StudyGroup,
    ) {
        let record = make_record(group, Some(birads), None, None);
        let once = reclassify_group(&record, Some(group));
        assert_eq!(once, Some(expected));
        assert_eq!(reclassify_group(&record, once), once);
    }

    #[test]
    fn test_study_label_takes_most_severe_side() {
        let record = make_record(
            StudyGroup::A,
            Some(Birads::B4),
            Some((SeverityLabel::Benign, 10)),
            Some((SeverityLabel::Malignant, 900)),
        );
        assert_eq!(study_label(&record), Some(SeverityLabel::Malignant));

        let record = make_record(StudyGroup::C, Some(Birads::B1), None, None);
        assert_eq!(study_label(&record), None);
    }

    #[rstest]
    #[case(0, true)]
    #[case(365, true)]
    #[case(-1, false)]
    #[case(366, false)]
    fn test_window_is_closed(#[case] days: i64, #[case] honoured: bool) {
        let record = make_record(
            StudyGroup::A,
            Some(Birads::B4),
            Some((SeverityLabel::Malignant, days)),
            None,
        );
        let config = LinkageConfig::default();
        assert_eq!(
            windowed_label(&record, Laterality::Left, &config).is_some(),
            honoured
        );
    }

    #[test]
    fn test_group_a_left_malignant_after_ten_days() {
        let record = make_record(
            StudyGroup::A,
            Some(Birads::B4),
            Some((SeverityLabel::Malignant, 10)),
            None,
        );
        let c = classify(&record, &LinkageConfig::default());
        assert_eq!(c.study_label, Some(SeverityLabel::Malignant));
        assert_eq!(c.left_label, Some(SeverityLabel::Malignant));
        assert_eq!(c.biopsy_result, Some(SeverityLabel::Malignant));
        assert_eq!(c.decision, Decision::Accept);
        assert_eq!(c.eligibility, IndexEligibility::Available);
    }

    #[test]
    fn test_group_a_malignant_outside_window_is_accepted_but_unavailable() {
        let record = make_record(
            StudyGroup::A,
            Some(Birads::B4),
            Some((SeverityLabel::Malignant, 500)),
            None,
        );
        let c = classify(&record, &LinkageConfig::default());
        assert_eq!(c.decision, Decision::Accept);
        assert_eq!(c.biopsy_result, None);
        assert_eq!(c.eligibility, IndexEligibility::Unavailable);
    }

    #[test]
    fn test_group_c_benign_assessment_becomes_d() {
        let record = make_record(StudyGroup::C, Some(Birads::B3), None, None);
        let c = classify(&record, &LinkageConfig::default());
        assert_eq!(c.group, Some(StudyGroup::D));
        assert_eq!(c.decision, Decision::Accept);
        assert_eq!(c.eligibility, IndexEligibility::Available);

        let record = make_record(
            StudyGroup::C,
            Some(Birads::B3),
            Some((SeverityLabel::Malignant, 30)),
            None,
        );
        let c = classify(&record, &LinkageConfig::default());
        assert_eq!(c.group, Some(StudyGroup::D));
        assert_eq!(c.decision, Decision::Reject);
        assert_eq!(c.eligibility, IndexEligibility::Unavailable);
    }

    #[rstest]
    #[case(StudyGroup::A, Some(SeverityLabel::Malignant), Decision::Accept)]
    #[case(StudyGroup::A, Some(SeverityLabel::Benign), Decision::Reject)]
    #[case(StudyGroup::A, None, Decision::Reject)]
    #[case(StudyGroup::B, Some(SeverityLabel::Benign), Decision::Accept)]
    #[case(StudyGroup::B, Some(SeverityLabel::HighRisk), Decision::Accept)]
    #[case(StudyGroup::B, Some(SeverityLabel::Malignant), Decision::Reject)]
    #[case(StudyGroup::C, None, Decision::Accept)]
    #[case(StudyGroup::C, Some(SeverityLabel::Benign), Decision::Reject)]
    #[case(StudyGroup::D, Some(SeverityLabel::HighRisk), Decision::Accept)]
    #[case(StudyGroup::D, Some(SeverityLabel::Malignant), Decision::Reject)]
    fn test_decision_table(
        #[case] group: StudyGroup,
        #[case] label: Option<SeverityLabel>,
        #[case] expected: Decision,
    ) {
        let record = make_record(group, Some(Birads::B4), None, None);
        assert_eq!(
            decide(&record, Some(group), label, &LinkageConfig::default()),
            expected
        );
    }

    #[test]
    fn test_non_mammography_report_is_rejected() {
        let mut record = make_record(StudyGroup::D, Some(Birads::B1), None, None);
        assert_eq!(
            classify(&record, &LinkageConfig::default()).decision,
            Decision::Accept
        );

        record.impression.as_mut().unwrap().report = "breast mri".to_string();
        assert_eq!(
            classify(&record, &LinkageConfig::default()).decision,
            Decision::Reject
        );

        record.impression = None;
        assert_eq!(
            classify(&record, &LinkageConfig::default()).decision,
            Decision::Reject
        );
    }

    #[test]
    fn test_classify_studies_drops_rejected() {
        let records = vec![
            make_record(StudyGroup::D, Some(Birads::B1), None, None),
            make_record(
                StudyGroup::B,
                Some(Birads::B4),
                Some((SeverityLabel::Malignant, 5)),
                None,
            ),
        ];
        let accepted = classify_studies(records, &LinkageConfig::default());
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].classification.group, Some(StudyGroup::D));
    }
}
