pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod io;
pub mod linkage;
pub mod selection;
pub mod types;

pub use api::{LinkageOutcome, LinkageStats, StudyLinker};
pub use cli::report::TextReport;
pub use error::{MammolinkError, Result};
pub use linkage::{ClassifiedStudy, LinkedStudy, StudyRecord};
pub use selection::{ImageRecord, StudyUnit};
pub use types::*;
