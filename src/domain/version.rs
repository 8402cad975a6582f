//! Version records produced from forge releases

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One downloadable version of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Normalized version string (e.g., "2.3.1")
    pub version: String,
    /// When the release was published
    pub date: DateTime<Utc>,
    /// Size of the binary in bytes
    pub size: u64,
    /// Direct download URL of the binary
    #[serde(rename = "downloadURL")]
    pub download_url: String,
}

impl VersionRecord {
    /// Create a new VersionRecord
    pub fn new(
        version: impl Into<String>,
        date: DateTime<Utc>,
        size: u64,
        download_url: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            date,
            size,
            download_url: download_url.into(),
        }
    }
}

/// Turn a release tag into a version string by dropping one leading `v`
pub fn normalize_version(tag: &str) -> String {
    tag.strip_prefix('v').unwrap_or(tag).to_string()
}
