//! Repository assembly
//!
//! This module provides:
//! - Per-application fetch → record building, in configuration order
//! - Error isolation: a failing or empty application is skipped, never fatal
//! - The final RepositoryDocument plus a list of skipped applications

use crate::domain::{ApplicationConfig, ApplicationRecord, RepositoryConfig, RepositoryDocument};
use crate::forge::ReleaseFetcher;
use std::fmt;

/// Reason why an application was left out of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Listing releases failed
    FetchFailed(String),
    /// No stable release carried a matching asset
    NoVersions,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FetchFailed(msg) => write!(f, "fetch failed: {}", msg),
            SkipReason::NoVersions => write!(f, "no valid releases found"),
        }
    }
}

/// An application that did not make it into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedApp {
    pub name: String,
    pub repo: String,
    pub reason: SkipReason,
}

/// Result of assembling a repository
#[derive(Debug)]
pub struct AssembleOutcome {
    /// The document to serialize
    pub document: RepositoryDocument,
    /// Applications excluded from `document.apps`
    pub skipped: Vec<SkippedApp>,
}

impl AssembleOutcome {
    /// Number of applications included
    pub fn included(&self) -> usize {
        self.document.apps.len()
    }
}

/// Builds the repository document from descriptors and fetched releases
pub struct Assembler {
    fetcher: ReleaseFetcher,
}

impl Assembler {
    /// Create an assembler using the given fetcher
    pub fn new(fetcher: ReleaseFetcher) -> Self {
        Self { fetcher }
    }

    /// Fetch every application in order and wrap the results
    pub async fn assemble(
        &self,
        repo_config: RepositoryConfig,
        app_configs: Vec<ApplicationConfig>,
    ) -> AssembleOutcome {
        log::info!(
            "Found {} app(s), fetching releases from {}...",
            app_configs.len(),
            self.fetcher.service_name()
        );

        let mut apps = Vec::new();
        let mut skipped = Vec::new();

        for app_config in app_configs {
            log::info!("Processing {}...", app_config.name);
            let name = app_config.name.clone();
            let repo = app_config.github.slug();

            let versions = match self.fetcher.fetch_versions(&app_config.github).await {
                Ok(v) => v,
                Err(e) => {
                    log::error!("Failed to process {}: {}", name, e);
                    skipped.push(SkippedApp {
                        name,
                        repo,
                        reason: SkipReason::FetchFailed(e.to_string()),
                    });
                    continue;
                }
            };

            let count = versions.len();
            match ApplicationRecord::from_versions(app_config, versions) {
                Some(record) => {
                    log::info!(
                        "Added {} version(s) of {}, latest: {}",
                        count,
                        record.name,
                        record.version
                    );
                    apps.push(record);
                }
                None => {
                    log::warn!("No valid releases found for {} ({})", name, repo);
                    skipped.push(SkippedApp {
                        name,
                        repo,
                        reason: SkipReason::NoVersions,
                    });
                }
            }
        }

        AssembleOutcome {
            document: RepositoryDocument::new(repo_config, apps),
            skipped,
        }
    }
}
