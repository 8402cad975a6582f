//! appfeed - App-catalog repository feed generator library
//!
//! This library provides the pieces of a generation run:
//! - Loading repository and application descriptors (YAML)
//! - Listing GitHub releases and turning them into versions
//! - Assembling and writing the repository document (JSON)
//! - Scaffolding new application descriptors from templates

pub mod assembler;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod forge;
pub mod output;
pub mod scaffold;
