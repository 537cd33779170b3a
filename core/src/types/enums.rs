use std::fmt;

/// Acquisition type of an image, as derived from frame count and series description
///
/// The display names match the scan-type tokens used in the output table
/// (`3D`, `S2D`, `2D`, `unused`), which also form half of the patient group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScanType {
    /// 2D image without windowing information, kept but never useful for reading
    Unused,
    /// Tomosynthesis volume
    Tomo,
    /// Synthesized 2D view reconstructed from a tomosynthesis volume
    Synth,
    /// Full-field digital 2D mammogram
    Ffdm,
}

impl ScanType {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ScanType::Unused => "unused",
            ScanType::Tomo => "3D",
            ScanType::Synth => "S2D",
            ScanType::Ffdm => "2D",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Image laterality (left/right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Laterality {
    Unknown,
    Left,
    Right,
}

impl Laterality {
    /// Returns whether this laterality is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, Laterality::Unknown)
    }

    /// Returns the single-letter code used as a view type prefix
    pub fn short_str(&self) -> &'static str {
        match self {
            Laterality::Left => "L",
            Laterality::Right => "R",
            Laterality::Unknown => "",
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Laterality::Left => "left",
            Laterality::Right => "right",
            Laterality::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// View position enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewPosition {
    Unknown,
    Xccl, // Cranio-caudal exaggerated laterally
    Xccm, // Cranio-caudal exaggerated medially
    Cc,   // Cranio-caudal
    Mlo,  // Medio-lateral oblique
    Ml,   // Medio-lateral
    Lmo,  // Latero-medial oblique
    Lm,   // Latero-medial
}

impl ViewPosition {
    /// Returns whether this view position is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, ViewPosition::Unknown)
    }

    /// Returns whether this is a standard view (CC or MLO)
    pub fn is_standard_view(&self) -> bool {
        matches!(self, ViewPosition::Cc | ViewPosition::Mlo)
    }

    /// Returns whether this is an MLO-like view
    pub fn is_mlo_like(&self) -> bool {
        matches!(
            self,
            ViewPosition::Mlo | ViewPosition::Ml | ViewPosition::Lmo | ViewPosition::Lm
        )
    }

    /// Returns whether this is a CC-like view
    pub fn is_cc_like(&self) -> bool {
        matches!(
            self,
            ViewPosition::Cc | ViewPosition::Xccl | ViewPosition::Xccm
        )
    }

    /// Returns the upper-case code used inside series descriptions and view types
    pub fn code(&self) -> &'static str {
        match self {
            ViewPosition::Unknown => "",
            ViewPosition::Xccl => "XCCL",
            ViewPosition::Xccm => "XCCM",
            ViewPosition::Cc => "CC",
            ViewPosition::Mlo => "MLO",
            ViewPosition::Ml => "ML",
            ViewPosition::Lmo => "LMO",
            ViewPosition::Lm => "LM",
        }
    }
}

impl fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
