/// Configuration for dropping imaging rows that cannot belong to a screening study
///
/// All filters use hard exclusion - rows that match are removed before any
/// view selection takes place.
///
/// # Example
///
/// ```
/// use mammolink_core::FilterConfig;
///
/// let filter = FilterConfig::default()
///     .exclude_implants(false)
///     .with_max_magnification(Some(2.0));
///
/// assert!(!filter.exclude_implants);
/// assert_eq!(filter.max_magnification, Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Exclude images carrying any view modifier (spot, magnification, ...)
    pub exclude_view_modifiers: bool,

    /// Exclude images of male patients
    pub exclude_male: bool,

    /// Exclude "FOR PROCESSING" images
    pub exclude_for_processing: bool,

    /// Exclude images whose estimated magnification factor reaches this value
    pub max_magnification: Option<f64>,

    /// Exclude images with a breast implant present
    pub exclude_implants: bool,

    /// Exclude studies whose description contains any of these markers
    pub excluded_study_descriptions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_view_modifiers: true,
            exclude_male: true,
            exclude_for_processing: true,
            max_magnification: Some(1.5),
            exclude_implants: true,
            excluded_study_descriptions: vec!["STEREOTACTIC".to_string(), "SPECIMEN".to_string()],
        }
    }
}

impl FilterConfig {
    /// Creates a new FilterConfig with all filters disabled
    ///
    /// # Example
    ///
    /// ```
    /// use mammolink_core::FilterConfig;
    ///
    /// let permissive = FilterConfig::permissive();
    /// assert!(!permissive.exclude_for_processing);
    /// assert!(permissive.max_magnification.is_none());
    /// assert!(permissive.excluded_study_descriptions.is_empty());
    /// ```
    pub fn permissive() -> Self {
        Self {
            exclude_view_modifiers: false,
            exclude_male: false,
            exclude_for_processing: false,
            max_magnification: None,
            exclude_implants: false,
            excluded_study_descriptions: Vec::new(),
        }
    }

    /// Builder: Exclude images with view modifiers
    pub fn exclude_view_modifiers(mut self, exclude: bool) -> Self {
        self.exclude_view_modifiers = exclude;
        self
    }

    /// Builder: Exclude male patients
    pub fn exclude_male(mut self, exclude: bool) -> Self {
        self.exclude_male = exclude;
        self
    }

    /// Builder: Exclude FOR PROCESSING
    pub fn exclude_for_processing(mut self, exclude: bool) -> Self {
        self.exclude_for_processing = exclude;
        self
    }

    /// Builder: Set the magnification cut-off
    pub fn with_max_magnification(mut self, max: Option<f64>) -> Self {
        self.max_magnification = max;
        self
    }

    /// Builder: Exclude implants
    pub fn exclude_implants(mut self, exclude: bool) -> Self {
        self.exclude_implants = exclude;
        self
    }

    /// Builder: Set the study description markers that exclude a study
    ///
    /// # Example
    ///
    /// ```
    /// use mammolink_core::FilterConfig;
    ///
    /// let filter = FilterConfig::permissive().with_excluded_study_descriptions(["SPECIMEN"]);
    /// assert_eq!(filter.excluded_study_descriptions, vec!["SPECIMEN".to_string()]);
    /// ```
    pub fn with_excluded_study_descriptions<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_study_descriptions = markers.into_iter().map(Into::into).collect();
        self
    }
}
