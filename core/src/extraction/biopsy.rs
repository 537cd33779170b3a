//! Biopsy report label resolution
//!
//! A report is resolved in two stages: [`split_report`] cuts the lowercased
//! text into an exam-description segment and an outcome segment, then
//! [`resolve_finding`] classifies the side from the exam segment and the
//! severity from the outcome segment.

use crate::types::{BiopsySide, Laterality, SeverityLabel};

const EXAM_START: &str = "exam:";
const EXAM_END: &str = "accession";
const OUTCOME_START: &str = "outcome section:";
const OUTCOME_END: &str = "pathology";

/// Lowercased segments of a biopsy report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSegments {
    /// Text between `exam:` and `accession`
    pub exam: String,
    /// Text between `outcome section:` and `pathology`
    pub outcome: String,
}

/// Side and severity resolved from one biopsy report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiopsyFinding {
    pub side: Option<BiopsySide>,
    pub label: Option<SeverityLabel>,
}

impl BiopsyFinding {
    /// Label this finding contributes to one breast
    pub fn label_for(&self, laterality: Laterality) -> Option<SeverityLabel> {
        match self.side {
            Some(side) if side.covers(laterality) => self.label,
            _ => None,
        }
    }
}

/// Splits a biopsy report into its exam and outcome segments
///
/// Missing delimiters yield empty segments.
pub fn split_report(report: &str) -> ReportSegments {
    let lower = report.to_lowercase();
    ReportSegments {
        exam: segment_between(&lower, EXAM_START, EXAM_END).to_string(),
        outcome: segment_between(&lower, OUTCOME_START, OUTCOME_END).to_string(),
    }
}

/// Returns the text after the first `start`, cut at the next `start` and
/// then at the first `end`
fn segment_between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(pos) = text.find(start) else {
        return "";
    };
    let rest = &text[pos + start.len()..];
    let rest = rest.find(start).map_or(rest, |p| &rest[..p]);
    let rest = rest.find(end).map_or(rest, |p| &rest[..p]);
    rest.trim()
}

/// Classifies text into a severity label by keyword
///
/// Keywords are tried in priority order malignant > high risk > benign.
pub fn classify_severity(text: &str) -> Option<SeverityLabel> {
    SeverityLabel::BY_PRIORITY
        .iter()
        .copied()
        .find(|label| text.contains(label.keyword()))
}

/// Resolves the biopsy side from the report segments
///
/// # Algorithm
///
/// 1. "bilateral", or both "left" and "right" → both
/// 2. "left" → lt, "right" → rt, then the abbreviations "lt" → lt, "rt" → rt
/// 3. Outcome carries a severity keyword → unknown
/// 4. A structured finding is present → ge_unknown
/// 5. Otherwise `None`; the record is unusable
pub fn resolve_side(segments: &ReportSegments, structured_finding: &str) -> Option<BiopsySide> {
    let exam = segments.exam.as_str();

    if exam.contains("bilateral") || (exam.contains("left") && exam.contains("right")) {
        Some(BiopsySide::Both)
    } else if exam.contains("left") {
        Some(BiopsySide::Left)
    } else if exam.contains("right") {
        Some(BiopsySide::Right)
    } else if exam.contains("lt") {
        Some(BiopsySide::Left)
    } else if exam.contains("rt") {
        Some(BiopsySide::Right)
    } else if classify_severity(&segments.outcome).is_some() {
        Some(BiopsySide::Unknown)
    } else if !structured_finding.trim().is_empty() {
        Some(BiopsySide::AltSourceUnknown)
    } else {
        None
    }
}

/// Resolves side and severity of one biopsy report
///
/// Alternate-source records take their severity from the structured finding;
/// all others from the outcome segment.
pub fn resolve_finding(report: &str, structured_finding: &str) -> BiopsyFinding {
    let segments = split_report(report);
    let side = resolve_side(&segments, structured_finding);

    let label = match side {
        Some(BiopsySide::AltSourceUnknown) => {
            classify_severity(&structured_finding.trim().to_lowercase())
        }
        Some(_) => classify_severity(&segments.outcome),
        None => None,
    };

    BiopsyFinding { side, label }
}
