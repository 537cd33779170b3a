//! Preferred view selection logic
//!
//! Turns flat imaging rows into comparable image records and assembles
//! them into study units with at most one image per 4-view slot.

mod record;
mod views;

pub use record::ImageRecord;
pub use views::{build_study_units, get_preferred_views, StudyUnit, StudyUnitKey};
