//! Core domain models for appfeed
//!
//! This module contains the types that flow through a generation run:
//! - Repository-level descriptor and news items
//! - Application descriptors and their GitHub coordinates
//! - Version records fetched from releases
//! - Assembled application records and the final repository document

mod application;
mod repository;
mod version;

pub use application::{ApplicationConfig, ApplicationRecord, GithubSource, Permissions};
pub use repository::{NewsItem, RepositoryConfig, RepositoryDocument};
pub use version::{normalize_version, VersionRecord};
