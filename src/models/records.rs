//! Record page response model
//!
//! Mirrors the JSON schema of the record API. Unknown fields in the server
//! response are ignored during decoding.

use serde::{Deserialize, Serialize};

// == Record Page Structure ==
/// One decoded page of records.
///
/// # Fields
/// - `results`: the records on this page
/// - `info`: pagination metadata echoed by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPage {
    /// Records on this page
    pub results: Vec<UserRecord>,
    /// Pagination metadata echoed by the server
    pub info: PageInfo,
}

/// Pagination metadata echoed by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// Seed the server used to generate this page
    pub seed: String,
    /// Number of records in the page
    pub results: u32,
    /// 1-based page number
    pub page: u32,
    /// API version string
    pub version: String,
}

/// A single user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Gender string as reported by the API
    pub gender: String,
    /// Name components
    pub name: RecordName,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Login identifiers
    pub login: LoginInfo,
    /// Portrait URLs
    pub picture: PictureSet,
    /// Nationality code
    pub nat: String,
}

impl UserRecord {
    /// Returns the record's display name as "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

/// Name components of a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordName {
    /// Honorific title
    pub title: String,
    /// Given name
    pub first: String,
    /// Family name
    pub last: String,
}

/// Login identifiers of a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInfo {
    /// Stable unique identifier
    pub uuid: String,
    /// Generated username
    pub username: String,
}

/// Portrait URLs at the three sizes the API provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PictureSet {
    /// Large portrait URL
    pub large: String,
    /// Medium portrait URL
    pub medium: String,
    /// Thumbnail portrait URL
    pub thumbnail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page_json() -> &'static str {
        r#"{
            "results": [
                {
                    "gender": "female",
                    "name": {"title": "Miss", "first": "Jennie", "last": "Nichols"},
                    "email": "jennie.nichols@example.com",
                    "phone": "(272) 790-0888",
                    "login": {"uuid": "7a7a1e3a-5596-45b4-a2e2-68a3e2a1fd33", "username": "yellowpeacock117"},
                    "picture": {
                        "large": "https://example.com/portraits/women/75.jpg",
                        "medium": "https://example.com/portraits/med/women/75.jpg",
                        "thumbnail": "https://example.com/portraits/thumb/women/75.jpg"
                    },
                    "nat": "US",
                    "registered": {"date": "2007-07-09T05:51:59.390Z", "age": 14}
                }
            ],
            "info": {"seed": "56d27f4a53bd5441", "results": 1, "page": 1, "version": "1.4"}
        }"#
    }

    #[test]
    fn test_record_page_deserialize() {
        let page: RecordPage = serde_json::from_str(sample_page_json()).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.info.seed, "56d27f4a53bd5441");
        assert_eq!(page.info.page, 1);
        assert_eq!(page.info.results, 1);
    }

    #[test]
    fn test_record_fields_decoded() {
        let page: RecordPage = serde_json::from_str(sample_page_json()).unwrap();
        let record = &page.results[0];
        assert_eq!(record.gender, "female");
        assert_eq!(record.email, "jennie.nichols@example.com");
        assert_eq!(record.login.username, "yellowpeacock117");
        assert_eq!(record.nat, "US");
        assert!(record.picture.thumbnail.contains("thumb"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        // the sample carries a "registered" object the model does not track
        let page: Result<RecordPage, _> = serde_json::from_str(sample_page_json());
        assert!(page.is_ok());
    }

    #[test]
    fn test_full_name() {
        let page: RecordPage = serde_json::from_str(sample_page_json()).unwrap();
        assert_eq!(page.results[0].full_name(), "Jennie Nichols");
    }

    #[test]
    fn test_record_page_reserialize() {
        let page: RecordPage = serde_json::from_str(sample_page_json()).unwrap();
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("yellowpeacock117"));
        assert!(json.contains("56d27f4a53bd5441"));
    }
}
