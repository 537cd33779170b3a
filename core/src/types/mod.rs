//! Core type definitions for study linkage
//!
//! This module provides the fundamental types used throughout the mammolink library:
//! - [`ScanType`]: Acquisition type (3D, S2D, 2D, unused)
//! - [`Laterality`] and [`ViewPosition`]: Parsed image orientation
//! - [`ViewType`] and [`ViewSlot`]: Parsed views and the four canonical slots
//! - [`SeverityLabel`], [`BiopsySide`]: Resolved biopsy findings
//! - [`Birads`], [`Density`]: Resolved radiology findings
//! - [`StudyGroup`], [`ExamType`], [`IntervalCategory`]: Study classification
//! - [`FilterConfig`], [`LinkageConfig`]: Run configuration

mod config;
mod enums;
mod filter;
mod label;
mod study;
mod view;

pub use config::{LinkageConfig, DEFAULT_BIOPSY_WINDOW_DAYS, DEFAULT_MAMMO_MARKER};
pub use enums::{Laterality, ScanType, ViewPosition};
pub use filter::FilterConfig;
pub use label::{BiopsySide, Birads, Density, SeverityLabel};
pub use study::{Decision, ExamType, IndexEligibility, IntervalCategory, StudyGroup};
pub use view::{ViewSlot, ViewType};
