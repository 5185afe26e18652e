//! Cache Key Module
//!
//! Derives the canonical on-disk key for a record query.

use std::fmt;

use crate::models::RecordQuery;

// == Cache Key Structure ==
/// Canonical cache key for one page of records.
///
/// The key is derived from the query parameters alone, so the store and the
/// fetch client can never disagree about where a page lives on disk. Shape:
/// `<seed or "noseed">_p<page>_r<results>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for a query.
    ///
    /// # Arguments
    /// * `query` - The record query the key identifies
    ///
    /// # Returns
    /// The canonical key, e.g. `seed-xyz_p1_r1` or `noseed_p2_r25`.
    pub fn for_query(query: &RecordQuery) -> Self {
        let seed = query.seed.as_deref().unwrap_or("noseed");
        Self(format!("{}_p{}_r{}", seed, query.page, query.results))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name of the file backing this key on disk.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_with_seed() {
        let query = RecordQuery::with_seed(1, 1, "seed-xyz");
        let key = CacheKey::for_query(&query);
        assert_eq!(key.as_str(), "seed-xyz_p1_r1");
    }

    #[test]
    fn test_key_without_seed() {
        let query = RecordQuery::new(2, 25);
        let key = CacheKey::for_query(&query);
        assert_eq!(key.as_str(), "noseed_p2_r25");
    }

    #[test]
    fn test_key_file_name() {
        let query = RecordQuery::with_seed(1, 10, "abc");
        let key = CacheKey::for_query(&query);
        assert_eq!(key.file_name(), "abc_p1_r10.json");
    }

    #[test]
    fn test_key_display_matches_as_str() {
        let query = RecordQuery::new(3, 50);
        let key = CacheKey::for_query(&query);
        assert_eq!(key.to_string(), key.as_str());
    }

    #[test]
    fn test_identical_queries_share_a_key() {
        let a = CacheKey::for_query(&RecordQuery::with_seed(1, 25, "s"));
        let b = CacheKey::for_query(&RecordQuery::with_seed(1, 25, "s"));
        assert_eq!(a, b);
    }
}
