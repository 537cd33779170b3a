use super::{Laterality, ViewPosition};
use std::fmt;

/// View type combining laterality and view position
///
/// Represents a parsed view such as "LCC", "RXCCL" or "LML".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewType {
    pub laterality: Laterality,
    pub view: ViewPosition,
}

impl ViewType {
    /// Creates a new ViewType
    pub fn new(laterality: Laterality, view: ViewPosition) -> Self {
        Self { laterality, view }
    }

    /// Checks if this is a standard mammography view (CC or MLO)
    pub fn is_standard_mammo_view(&self) -> bool {
        self.view.is_standard_view()
    }

    /// View priority used when several images compete for one slot
    ///
    /// Standard views rank 2, additional views (XCCL, ML, ...) rank 1.
    pub fn priority(&self) -> u8 {
        if self.is_standard_mammo_view() {
            2
        } else {
            1
        }
    }

    /// Maps the view onto one of the four canonical slots
    ///
    /// CC-like views land in the CC slot and MLO-like views in the MLO slot
    /// of their side. Returns `None` when laterality or position is unknown.
    pub fn slot(&self) -> Option<ViewSlot> {
        match (self.laterality, self.view.is_cc_like(), self.view.is_mlo_like()) {
            (Laterality::Left, true, _) => Some(ViewSlot::Lcc),
            (Laterality::Right, true, _) => Some(ViewSlot::Rcc),
            (Laterality::Left, _, true) => Some(ViewSlot::Lmlo),
            (Laterality::Right, _, true) => Some(ViewSlot::Rmlo),
            _ => None,
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.laterality.short_str(), self.view.code())
    }
}

/// One of the four canonical screening projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewSlot {
    Lcc,
    Lmlo,
    Rcc,
    Rmlo,
}

impl ViewSlot {
    /// All slots in output column order
    pub const ALL: [ViewSlot; 4] = [ViewSlot::Lcc, ViewSlot::Lmlo, ViewSlot::Rcc, ViewSlot::Rmlo];

    /// Position of this slot inside [`ViewSlot::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ViewSlot::Lcc => 0,
            ViewSlot::Lmlo => 1,
            ViewSlot::Rcc => 2,
            ViewSlot::Rmlo => 3,
        }
    }

    pub fn simple_name(&self) -> &'static str {
        match self {
            ViewSlot::Lcc => "LCC",
            ViewSlot::Lmlo => "LMLO",
            ViewSlot::Rcc => "RCC",
            ViewSlot::Rmlo => "RMLO",
        }
    }
}

impl fmt::Display for ViewSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
