//! Repository-level descriptor and the assembled output document

use crate::domain::ApplicationRecord;
use serde::{Deserialize, Serialize};

/// Repository descriptor loaded from `repo-config.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConfig {
    /// Display name of the repository
    pub name: String,
    /// Unique identifier (reverse-DNS style)
    pub identifier: String,
    /// Icon shown by the catalog client
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    /// Website of the repository
    pub website: String,
    /// Optional news entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<Vec<NewsItem>>,
}

/// A news entry shown by the catalog client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub identifier: String,
    pub caption: String,
    pub tint_color: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// Kept verbatim; clients accept both dates and full timestamps
    pub date: String,
    pub url: String,
    pub notify: bool,
}

/// The repository feed written at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryDocument {
    pub name: String,
    pub identifier: String,
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    pub website: String,
    pub apps: Vec<ApplicationRecord>,
    pub news: Vec<NewsItem>,
}

impl RepositoryDocument {
    /// Wrap assembled application records with the repository metadata
    pub fn new(config: RepositoryConfig, apps: Vec<ApplicationRecord>) -> Self {
        Self {
            name: config.name,
            identifier: config.identifier,
            icon_url: config.icon_url,
            website: config.website,
            apps,
            news: config.news.unwrap_or_default(),
        }
    }
}
