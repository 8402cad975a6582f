//! Release-hosting service access
//!
//! This module provides:
//! - HTTP client shared foundation (timeout, User-Agent, optional token)
//! - GitHub release-listing adapter
//! - ReleaseFetcher turning raw releases into version records

mod client;
mod fetcher;
mod github;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use fetcher::{AssetPattern, ReleaseFetcher};
pub use github::{GithubReleases, GITHUB_API_URL};

use crate::error::ForgeError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tagged publication on the forge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A binary attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub size: u64,
    pub browser_download_url: String,
}

impl Release {
    /// Drafts and prereleases are never offered to clients
    pub fn is_stable(&self) -> bool {
        !self.draft && !self.prerelease
    }

    /// Publish date, falling back to creation date for unpublished releases
    pub fn release_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

/// Trait for release-listing backends
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the service name
    fn service_name(&self) -> &'static str;

    /// List the most recent releases of `owner/repo`, newest first, one page
    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<Release>, ForgeError>;
}
