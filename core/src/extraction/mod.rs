//! Field extraction from raw rows and report text
//!
//! Every function here is total: unreadable input becomes `None` or a
//! neutral value rather than an error.

pub mod biopsy;
pub mod dates;
pub mod group;
pub mod laterality;
pub mod outliers;
pub mod radiology;
pub mod scan_type;
pub mod view_position;

pub use biopsy::{classify_severity, resolve_finding, split_report, BiopsyFinding};
pub use dates::{age_in_years, days_between, parse_date};
pub use group::extract_group;
pub use laterality::parse_laterality_string;
pub use outliers::{check_exclusion, Exclusion};
pub use radiology::{extract_birads, extract_density};
pub use scan_type::extract_scan_type;
pub use view_position::extract_view_type;
