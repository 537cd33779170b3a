//! Study linkage pipeline
//!
//! Stages run strictly forward: biopsy and radiology reduction, the join
//! onto study units, per-study classification, index selection and the
//! interval buckets.

pub mod biopsy;
pub mod classify;
pub mod index;
pub mod interval;
pub mod join;
pub mod radiology;

pub use biopsy::{resolve_biopsies, BiopsySideLabel, PatientBiopsies};
pub use classify::{classify, classify_studies, Classification, ClassifiedStudy};
pub use index::{select_index, LinkedStudy, PatientGroupKey};
pub use interval::categorize_interval;
pub use join::{join_records, StudyRecord};
pub use radiology::{resolve_impressions, RadiologyImpression};
