//! Query parameters for record fetching
//!
//! Defines the parameters identifying one page of records and their
//! validation rules.

// == Limits ==
/// Maximum number of results a single page may request.
pub const MAX_PAGE_RESULTS: u32 = 5000;

// == Record Query Structure ==
/// Parameters identifying one page of records.
///
/// # Fields
/// - `page`: 1-based page number
/// - `results`: number of records per page
/// - `seed`: optional seed making server-side generation deterministic
#[derive(Debug, Clone)]
pub struct RecordQuery {
    /// 1-based page number
    pub page: u32,
    /// Number of records per page
    pub results: u32,
    /// Optional generation seed
    pub seed: Option<String>,
}

impl RecordQuery {
    /// Creates a query without a seed.
    pub fn new(page: u32, results: u32) -> Self {
        Self {
            page,
            results,
            seed: None,
        }
    }

    /// Creates a query pinned to a generation seed.
    pub fn with_seed(page: u32, results: u32, seed: impl Into<String>) -> Self {
        Self {
            page,
            results,
            seed: Some(seed.into()),
        }
    }

    /// Validates the query parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page == 0 {
            return Some("Page must be at least 1".to_string());
        }
        if self.results == 0 {
            return Some("Results per page must be at least 1".to_string());
        }
        if self.results > MAX_PAGE_RESULTS {
            return Some(format!(
                "Results per page exceeds maximum of {}",
                MAX_PAGE_RESULTS
            ));
        }
        None
    }
}
