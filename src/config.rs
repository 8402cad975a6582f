//! Loading of the repository descriptor and application descriptors
//!
//! Features:
//! - Parses `repo-config.yaml` into a RepositoryConfig
//! - Discovers every `.yaml` / `.yml` file in the applications directory
//! - Any malformed application file aborts the whole load

use crate::domain::{ApplicationConfig, RepositoryConfig};
use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as configuration files
pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Load the repository descriptor
pub fn load_repository_config(path: &Path) -> Result<RepositoryConfig, ConfigError> {
    read_yaml(path)
}

/// Load every application descriptor in `dir`, in file-name order
pub fn load_app_configs(dir: &Path) -> Result<Vec<ApplicationConfig>, ConfigError> {
    let mut configs = Vec::new();

    for path in find_config_files(dir)? {
        let config: ApplicationConfig = read_yaml(&path)?;
        validate_app_config(&path, &config)?;
        log::debug!("Loaded {} from {}", config.name, path.display());
        configs.push(config);
    }

    Ok(configs)
}

/// List configuration files directly inside `dir`, sorted by file name
pub fn find_config_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::not_found(dir));
    }

    let entries = fs::read_dir(dir).map_err(|source| ConfigError::DirectoryError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConfigError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_config_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Whether the path carries one of the recognized extensions
pub fn is_config_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::yaml_parse_error(path, e))
}

fn validate_app_config(path: &Path, config: &ApplicationConfig) -> Result<(), ConfigError> {
    if config.github.max_versions == 0 {
        return Err(ConfigError::invalid(path, "github.maxVersions must be at least 1"));
    }

    Ok(())
}
