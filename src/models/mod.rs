//! Query and response models for the record API
//!
//! This module defines the query parameters sent to the record API and the
//! typed model its JSON responses decode into.

pub mod query;
pub mod records;

// Re-export commonly used types
pub use query::{RecordQuery, MAX_PAGE_RESULTS};
pub use records::{LoginInfo, PageInfo, PictureSet, RecordName, RecordPage, UserRecord};
