use crate::api::LinkageOutcome;
use crate::types::{ExamType, StudyGroup};
use std::fmt;

/// Text report formatter for a linkage run
pub struct TextReport<'a> {
    outcome: &'a LinkageOutcome,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(outcome: &'a LinkageOutcome) -> Self {
        Self { outcome }
    }

    fn count_exam_type(&self, exam_type: Option<ExamType>) -> usize {
        self.outcome
            .studies
            .iter()
            .filter(|s| s.exam_type == exam_type)
            .count()
    }

    fn count_group(&self, group: StudyGroup) -> usize {
        self.outcome
            .studies
            .iter()
            .filter(|s| s.study.classification.group == Some(group))
            .count()
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.outcome.stats;

        writeln!(f, "Study Linkage Summary")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Imaging rows:       {}", stats.imaging_rows)?;
        writeln!(f, "Excluded images:    {}", stats.excluded_images)?;
        writeln!(f, "Images w/o view:    {}", stats.images_without_view)?;
        writeln!(f, "Study units:        {}", stats.study_units)?;
        writeln!(f, "Biopsy patients:    {}", stats.biopsy_patients)?;
        writeln!(f, "Radiology studies:  {}", stats.radiology_studies)?;
        writeln!(f, "Accepted studies:   {}", stats.accepted_studies)?;
        writeln!(f)?;

        writeln!(f, "Groups")?;
        writeln!(f, "------")?;
        for group in [StudyGroup::A, StudyGroup::B, StudyGroup::C, StudyGroup::D] {
            writeln!(f, "{}: {}", group, self.count_group(group))?;
        }
        writeln!(f)?;

        writeln!(f, "Exam Types")?;
        writeln!(f, "----------")?;
        for exam_type in [
            ExamType::Index,
            ExamType::PreIndex,
            ExamType::PostIndex,
            ExamType::PreBiopsy,
            ExamType::PostBiopsy,
        ] {
            writeln!(
                f,
                "{:<12} {}",
                exam_type.simple_name(),
                self.count_exam_type(Some(exam_type))
            )?;
        }
        writeln!(f, "{:<12} {}", "unplaced", self.count_exam_type(None))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LinkageStats;

    #[test]
    fn test_text_report_format() {
        let outcome = LinkageOutcome {
            studies: Vec::new(),
            stats: LinkageStats {
                imaging_rows: 12,
                excluded_images: 3,
                study_units: 2,
                ..Default::default()
            },
        };

        let output = format!("{}", TextReport::new(&outcome));

        assert!(output.contains("Study Linkage Summary"));
        assert!(output.contains("Imaging rows:       12"));
        assert!(output.contains("Excluded images:    3"));
        assert!(output.contains("Study units:        2"));
        assert!(output.contains("A: 0"));
        assert!(output.contains("index        0"));
        assert!(output.contains("unplaced     0"));
    }
}
