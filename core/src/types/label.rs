use super::Laterality;
use std::fmt;

/// Biopsy severity label, ordered by clinical severity
///
/// "No finding" is modelled as `Option::<SeverityLabel>::None`, which sorts
/// below every variant, so the full order is
/// `Some(Malignant) > Some(HighRisk) > Some(Benign) > None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeverityLabel {
    Benign,
    HighRisk,
    Malignant,
}

impl SeverityLabel {
    /// Keywords in match priority order (most severe first)
    pub const BY_PRIORITY: [SeverityLabel; 3] = [
        SeverityLabel::Malignant,
        SeverityLabel::HighRisk,
        SeverityLabel::Benign,
    ];

    /// Returns the keyword searched for in report text
    pub fn keyword(&self) -> &'static str {
        match self {
            SeverityLabel::Benign => "benign",
            SeverityLabel::HighRisk => "high risk",
            SeverityLabel::Malignant => "malignant",
        }
    }

    /// Returns the more severe of two optional labels
    pub fn most_severe(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        a.max(b)
    }

    /// Formats an optional label, using `NA` for no finding
    pub fn or_na(label: Option<Self>) -> &'static str {
        label.map(|l| l.keyword()).unwrap_or("NA")
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Side named by a biopsy report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiopsySide {
    Left,
    Right,
    Both,
    /// Side missing from the report but the outcome carries a finding
    Unknown,
    /// Alternate-source record that never states a side
    AltSourceUnknown,
}

impl BiopsySide {
    /// Returns the short token used in reports and output
    pub fn simple_name(&self) -> &'static str {
        match self {
            BiopsySide::Left => "lt",
            BiopsySide::Right => "rt",
            BiopsySide::Both => "both",
            BiopsySide::Unknown => "unknown",
            BiopsySide::AltSourceUnknown => "ge_unknown",
        }
    }

    /// Whether the source report could not name a side
    pub fn is_undetermined(&self) -> bool {
        matches!(self, BiopsySide::Unknown | BiopsySide::AltSourceUnknown)
    }

    /// Whether a finding with this side is attributed to the given breast
    ///
    /// Undetermined sides are attributed to both breasts.
    pub fn covers(&self, laterality: Laterality) -> bool {
        match self {
            BiopsySide::Left => laterality == Laterality::Left,
            BiopsySide::Right => laterality == Laterality::Right,
            BiopsySide::Both | BiopsySide::Unknown | BiopsySide::AltSourceUnknown => {
                !laterality.is_unknown()
            }
        }
    }
}

impl fmt::Display for BiopsySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// BIRADS assessment category, ordered from least to most actionable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Birads {
    B0,
    B1,
    B2,
    B3,
    B4,
    B4a,
    B4b,
    B4c,
    B5,
    B6,
}

impl Birads {
    pub fn simple_name(&self) -> &'static str {
        match self {
            Birads::B0 => "0",
            Birads::B1 => "1",
            Birads::B2 => "2",
            Birads::B3 => "3",
            Birads::B4 => "4",
            Birads::B4a => "4a",
            Birads::B4b => "4b",
            Birads::B4c => "4c",
            Birads::B5 => "5",
            Birads::B6 => "6",
        }
    }

    /// Parses a category token such as `3` or `4B`
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" => Some(Birads::B0),
            "1" => Some(Birads::B1),
            "2" => Some(Birads::B2),
            "3" => Some(Birads::B3),
            "4" => Some(Birads::B4),
            "4a" => Some(Birads::B4a),
            "4b" => Some(Birads::B4b),
            "4c" => Some(Birads::B4c),
            "5" => Some(Birads::B5),
            "6" => Some(Birads::B6),
            _ => None,
        }
    }

    /// Benign (2) or probably benign (3) assessment
    pub fn is_benign_assessment(&self) -> bool {
        matches!(self, Birads::B2 | Birads::B3)
    }
}

impl fmt::Display for Birads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Breast density category, A (fatty) to D (extremely dense)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Density {
    A,
    B,
    C,
    D,
}

impl Density {
    pub fn simple_name(&self) -> &'static str {
        match self {
            Density::A => "A",
            Density::B => "B",
            Density::C => "C",
            Density::D => "D",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
