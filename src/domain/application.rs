//! Application descriptors and assembled application records

use crate::domain::VersionRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default asset pattern selecting the distributable binary
pub const DEFAULT_ASSET_PATTERN: &str = "*.ipa";

/// Default number of versions listed per application
pub const DEFAULT_MAX_VERSIONS: u32 = 5;

/// Free-form permission map (e.g. entitlements, privacy usage strings)
pub type Permissions = BTreeMap<String, serde_json::Value>;

/// Where an application's releases are hosted on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSource {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Wildcard pattern selecting the release asset (a single `*` is expanded)
    #[serde(default = "default_asset_pattern")]
    pub asset_pattern: String,
    /// Upper bound on versions listed for this application
    #[serde(default = "default_max_versions")]
    pub max_versions: u32,
}

fn default_asset_pattern() -> String {
    DEFAULT_ASSET_PATTERN.to_string()
}

fn default_max_versions() -> u32 {
    DEFAULT_MAX_VERSIONS
}

impl GithubSource {
    /// Create a source with the default asset pattern and version limit
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            asset_pattern: default_asset_pattern(),
            max_versions: default_max_versions(),
        }
    }

    /// `owner/repo` slug used in messages
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Static descriptor of one application, loaded from `apps/*.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    pub name: String,
    pub bundle_identifier: String,
    pub developer_name: String,
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    pub localized_description: String,
    pub subtitle: String,
    pub tint_color: String,
    #[serde(rename = "screenshotURLs", default)]
    pub screenshot_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_permissions: Option<Permissions>,
    pub github: GithubSource,
}

/// An application as it appears in the repository document
///
/// The top-level `version`, `versionDate`, `size` and `downloadURL` always
/// mirror `versions[0]`. [`ApplicationRecord::from_versions`] refuses an
/// empty version list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub name: String,
    pub bundle_identifier: String,
    pub developer_name: String,
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    pub localized_description: String,
    pub subtitle: String,
    pub tint_color: String,
    pub versions: Vec<VersionRecord>,
    pub app_permissions: Permissions,
    #[serde(rename = "screenshotURLs")]
    pub screenshot_urls: Vec<String>,
    pub version: String,
    pub version_date: DateTime<Utc>,
    pub size: u64,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
}

impl ApplicationRecord {
    /// Build a record from a descriptor and its newest-first versions.
    ///
    /// Returns `None` when `versions` is empty.
    pub fn from_versions(config: ApplicationConfig, versions: Vec<VersionRecord>) -> Option<Self> {
        let latest = versions.first()?.clone();

        Some(Self {
            name: config.name,
            bundle_identifier: config.bundle_identifier,
            developer_name: config.developer_name,
            icon_url: config.icon_url,
            localized_description: config.localized_description,
            subtitle: config.subtitle,
            tint_color: config.tint_color,
            versions,
            app_permissions: config.app_permissions.unwrap_or_default(),
            screenshot_urls: config.screenshot_urls,
            version: latest.version,
            version_date: latest.date,
            size: latest.size,
            download_url: latest.download_url,
        })
    }

    /// The newest version (mirrored by the top-level fields)
    pub fn latest(&self) -> Option<&VersionRecord> {
        self.versions.first()
    }
}
