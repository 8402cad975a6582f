//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with repository or application descriptors (fatal)
//! - ForgeError: Issues with the release-hosting service (scoped to one app)
//! - OutputError: Failures writing the repository document (fatal)
//! - ScaffoldError: Failures of the `new` subcommand

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Release-hosting service related errors
    #[error(transparent)]
    Forge(#[from] ForgeError),

    /// Output related errors
    #[error(transparent)]
    Output(#[from] OutputError),

    /// Scaffolding related errors
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// Terminal output errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors related to loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read configuration file
    #[error("failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the applications directory
    #[error("failed to read applications directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {source}")]
    YamlParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Parsed successfully but the values are unusable
    #[error("invalid configuration in {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Errors related to the release-hosting service
#[derive(Error, Debug)]
pub enum ForgeError {
    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientError { message: String },

    /// Descriptor does not name a repository yet
    #[error("failed to fetch releases for {repo}: github.owner and github.repo must be set")]
    MissingCoordinates { repo: String },

    /// Repository does not exist or is not visible with the current credentials
    #[error("failed to fetch releases for {repo}: repository not found")]
    RepositoryNotFound { repo: String },

    /// Network request failed
    #[error("failed to fetch releases for {repo}: {message}")]
    NetworkError { repo: String, message: String },

    /// Service answered with a non-success status
    #[error("failed to fetch releases for {repo}: HTTP {status}")]
    HttpStatus { repo: String, status: u16 },

    /// Timeout
    #[error("failed to fetch releases for {repo}: request timed out")]
    Timeout { repo: String },

    /// Response body could not be decoded
    #[error("invalid release listing for {repo}: {message}")]
    InvalidResponse { repo: String, message: String },

    /// Asset pattern does not compile to a regular expression
    #[error("invalid asset pattern '{pattern}' for {repo}: {source}")]
    InvalidAssetPattern {
        repo: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors related to writing the repository document
#[derive(Error, Debug)]
pub enum OutputError {
    /// Could not create the parent directories of the output path
    #[error("failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be serialized
    #[error("failed to serialize repository document: {source}")]
    SerializeError {
        #[source]
        source: serde_json::Error,
    },

    /// Could not write the output file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the scaffold generator
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No application name was given
    #[error("app name is required")]
    MissingName,

    /// An application descriptor already exists at the target path
    #[error("app configuration already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// Selected template file is missing
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Failed to read the template file
    #[error("failed to read template {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the new descriptor
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        ConfigError::YamlParseError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Invalid error
    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ForgeError {
    /// Creates a new NetworkError
    pub fn network_error(repo: impl Into<String>, message: impl Into<String>) -> Self {
        ForgeError::NetworkError {
            repo: repo.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(repo: impl Into<String>, message: impl Into<String>) -> Self {
        ForgeError::InvalidResponse {
            repo: repo.into(),
            message: message.into(),
        }
    }

    /// Returns the `owner/repo` this error refers to, if any
    pub fn repo(&self) -> Option<&str> {
        match self {
            ForgeError::ClientError { .. } => None,
            ForgeError::MissingCoordinates { repo }
            | ForgeError::RepositoryNotFound { repo }
            | ForgeError::NetworkError { repo, .. }
            | ForgeError::HttpStatus { repo, .. }
            | ForgeError::Timeout { repo }
            | ForgeError::InvalidResponse { repo, .. }
            | ForgeError::InvalidAssetPattern { repo, .. } => Some(repo),
        }
    }
}

impl OutputError {
    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::WriteError {
            path: path.into(),
            source,
        }
    }
}
