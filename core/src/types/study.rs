use std::fmt;

/// Clinical workflow group a study was collected under
///
/// - `A`: biopsy-confirmed cancer
/// - `B`: biopsy-confirmed benign or high-risk finding
/// - `C`: suspicious recall without biopsy
/// - `D`: benign surveillance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudyGroup {
    A,
    B,
    C,
    D,
}

impl StudyGroup {
    pub fn simple_name(&self) -> &'static str {
        match self {
            StudyGroup::A => "A",
            StudyGroup::B => "B",
            StudyGroup::C => "C",
            StudyGroup::D => "D",
        }
    }
}

impl fmt::Display for StudyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Outcome of the accept/reject gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Decision::Accept)
    }
}

/// Whether an accepted study may serve as its patient's index study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexEligibility {
    Available,
    Unavailable,
}

impl IndexEligibility {
    pub fn is_available(&self) -> bool {
        matches!(self, IndexEligibility::Available)
    }

    pub fn simple_name(&self) -> &'static str {
        match self {
            IndexEligibility::Available => "available",
            IndexEligibility::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for IndexEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Temporal relationship of a study to its patient's index study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExamType {
    Index,
    PreIndex,
    PostIndex,
    /// Study precedes the biopsy that labelled the patient
    PreBiopsy,
    /// Study follows (or coincides with) the biopsy that labelled the patient
    PostBiopsy,
}

impl ExamType {
    pub fn simple_name(&self) -> &'static str {
        match self {
            ExamType::Index => "index",
            ExamType::PreIndex => "pre_index",
            ExamType::PostIndex => "post_index",
            ExamType::PreBiopsy => "pre_biopsy",
            ExamType::PostBiopsy => "post_biopsy",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Yearly bucket of the distance between a study and its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntervalCategory {
    SameDay,
    /// 1 to 5; year `n` covers `365 * (n - 1) + 1 ..= 365 * n` days
    Year(u8),
    OverFiveYears,
}

impl fmt::Display for IntervalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalCategory::SameDay => write!(f, "0"),
            IntervalCategory::Year(n) => write!(f, "{}", n),
            IntervalCategory::OverFiveYears => write!(f, "5_over"),
        }
    }
}
