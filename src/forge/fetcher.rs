//! Release filtering and normalization
//!
//! Turns one page of forge releases into newest-first version records:
//! drafts and prereleases are dropped, releases without a matching asset are
//! skipped with a warning, and the list is capped at `maxVersions`.

use crate::domain::{normalize_version, GithubSource, VersionRecord};
use crate::error::ForgeError;
use crate::forge::{Release, ReleaseAsset, ReleaseSource};
use regex::Regex;

/// Asset-name matcher built from a wildcard pattern.
///
/// Only the first `*` becomes `.*`; everything else is handed to the regex
/// engine untouched and the match is unanchored. So `app.ipa` also matches
/// `appXipa`, and `*.ipa` matches `MyApp.ipa.zip`. Existing descriptors rely
/// on this loose behaviour.
#[derive(Debug, Clone)]
pub struct AssetPattern {
    pattern: String,
    regex: Regex,
}

impl AssetPattern {
    /// Compile a wildcard pattern
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&pattern.replacen('*', ".*", 1))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written in the descriptor
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether an asset file name matches
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// First asset whose name matches
    pub fn find<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        assets.iter().find(|asset| self.matches(&asset.name))
    }
}

/// Fetches and normalizes the versions of one application
pub struct ReleaseFetcher {
    source: Box<dyn ReleaseSource>,
}

impl ReleaseFetcher {
    /// Create a fetcher backed by a release source
    pub fn new(source: Box<dyn ReleaseSource>) -> Self {
        Self { source }
    }

    /// Name of the backing service
    pub fn service_name(&self) -> &'static str {
        self.source.service_name()
    }

    /// Fetch up to `max_versions` usable versions, newest first
    pub async fn fetch_versions(
        &self,
        github: &GithubSource,
    ) -> Result<Vec<VersionRecord>, ForgeError> {
        if github.owner.trim().is_empty() || github.repo.trim().is_empty() {
            return Err(ForgeError::MissingCoordinates {
                repo: github.slug(),
            });
        }

        let pattern = AssetPattern::new(&github.asset_pattern).map_err(|source| {
            ForgeError::InvalidAssetPattern {
                repo: github.slug(),
                pattern: github.asset_pattern.clone(),
                source,
            }
        })?;

        let releases = self
            .source
            .list_releases(&github.owner, &github.repo, github.max_versions)
            .await?;

        Ok(select_versions(
            &github.slug(),
            releases,
            &pattern,
            github.max_versions as usize,
        ))
    }
}

/// Apply the release filters in received order
fn select_versions(
    slug: &str,
    releases: Vec<Release>,
    pattern: &AssetPattern,
    max_versions: usize,
) -> Vec<VersionRecord> {
    let mut versions = Vec::new();

    for release in releases {
        if versions.len() >= max_versions {
            break;
        }

        if !release.is_stable() {
            log::debug!("{}: skipping draft/prerelease {}", slug, release.tag_name);
            continue;
        }

        let Some(asset) = pattern.find(&release.assets) else {
            log::warn!(
                "{}: no asset matching '{}' in release {}",
                slug,
                pattern.as_str(),
                release.tag_name
            );
            continue;
        };

        versions.push(VersionRecord::new(
            normalize_version(&release.tag_name),
            release.release_date(),
            asset.size,
            asset.browser_download_url.clone(),
        ));
    }

    versions
}
