use super::FilterConfig;

/// Default width of the biopsy confirmation window, in days after the study
pub const DEFAULT_BIOPSY_WINDOW_DAYS: i64 = 365;

/// Marker a radiology report must contain for its study to be accepted
pub const DEFAULT_MAMMO_MARKER: &str = "mammo";

/// Settings for a full linkage run
///
/// # Example
///
/// ```
/// use mammolink_core::{FilterConfig, LinkageConfig};
///
/// let config = LinkageConfig::default()
///     .with_filter(FilterConfig::permissive())
///     .with_biopsy_window_days(180);
///
/// assert_eq!(config.biopsy_window_days, 180);
/// assert!(config.biopsy_in_window(0));
/// assert!(config.biopsy_in_window(180));
/// assert!(!config.biopsy_in_window(181));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinkageConfig {
    /// Outlier filter applied to imaging rows
    pub filter: FilterConfig,

    /// A side label confirms a study only if its biopsy falls within
    /// `0..=biopsy_window_days` days after the study
    pub biopsy_window_days: i64,

    /// Lowercase marker identifying a mammography report
    pub mammo_marker: String,
}

impl Default for LinkageConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            biopsy_window_days: DEFAULT_BIOPSY_WINDOW_DAYS,
            mammo_marker: DEFAULT_MAMMO_MARKER.to_string(),
        }
    }
}

impl LinkageConfig {
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_biopsy_window_days(mut self, days: i64) -> Self {
        self.biopsy_window_days = days;
        self
    }

    pub fn with_mammo_marker(mut self, marker: impl Into<String>) -> Self {
        self.mammo_marker = marker.into().to_lowercase();
        self
    }

    /// Whether a biopsy `interval` days after the study confirms it
    pub fn biopsy_in_window(&self, interval: i64) -> bool {
        (0..=self.biopsy_window_days).contains(&interval)
    }
}
