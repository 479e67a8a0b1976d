/// Configuration for shape searches.
///
/// # Example
/// ```
/// use figsearch::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.enable_parallel, false);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Split the scan across threads with rayon (default: false).
    ///
    /// Results are reduced in scan order, so both modes return the same shape.
    pub enable_parallel: bool,
}

impl SearchConfig {
    /// Creates a new `SearchConfig`.
    ///
    /// # Example
    /// ```
    /// use figsearch::SearchConfig;
    ///
    /// let config = SearchConfig::new(true);
    /// assert_eq!(config.enable_parallel, true);
    /// ```
    pub fn new(enable_parallel: bool) -> Self {
        Self { enable_parallel }
    }
}
