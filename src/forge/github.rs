//! GitHub release-listing adapter
//!
//! Lists releases of a repository.
//! API endpoint: {api}/repos/{owner}/{repo}/releases?per_page={n}

use crate::error::ForgeError;
use crate::forge::{HttpClient, Release, ReleaseSource};
use async_trait::async_trait;

/// Public GitHub REST API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Largest page size accepted by the listing endpoint
const MAX_PER_PAGE: u32 = 100;

/// GitHub releases adapter
pub struct GithubReleases {
    client: HttpClient,
    api_url: String,
}

impl GithubReleases {
    /// Create an adapter for the public GitHub API
    pub fn new(client: HttpClient) -> Self {
        Self::with_api_url(client, GITHUB_API_URL)
    }

    /// Create an adapter for another API root (e.g. GitHub Enterprise)
    pub fn with_api_url(client: HttpClient, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Build the release-listing URL for a repository
    fn build_url(&self, owner: &str, repo: &str, per_page: u32) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.api_url,
            owner,
            repo,
            per_page.clamp(1, MAX_PER_PAGE)
        )
    }
}

#[async_trait]
impl ReleaseSource for GithubReleases {
    fn service_name(&self) -> &'static str {
        "GitHub"
    }

    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<Release>, ForgeError> {
        let url = self.build_url(owner, repo, per_page);
        let slug = format!("{}/{}", owner, repo);
        if per_page > MAX_PER_PAGE {
            log::warn!(
                "{}: maxVersions {} exceeds the GitHub page limit, requesting {}",
                slug,
                per_page,
                MAX_PER_PAGE
            );
        }
        log::debug!("GET {}", url);

        self.client.get_json(&url, &slug).await
    }
}
