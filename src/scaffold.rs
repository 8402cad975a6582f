//! Scaffolding of new application descriptors
//!
//! Copies the `basic` or `full` template into the applications directory,
//! replacing every `{{APP_NAME}}` with the application name. Existing files
//! are never overwritten.

use crate::error::ScaffoldError;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Token replaced with the application name
pub const NAME_PLACEHOLDER: &str = "{{APP_NAME}}";

/// Extension of generated descriptors
const DESCRIPTOR_EXTENSION: &str = "yaml";

/// Which template to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKind {
    /// Required fields only
    #[default]
    Basic,
    /// Every supported field, including permissions
    Full,
}

impl TemplateKind {
    /// Select the template from the `--full` flag
    pub fn from_full_flag(full: bool) -> Self {
        if full {
            TemplateKind::Full
        } else {
            TemplateKind::Basic
        }
    }

    /// File name of the template inside the templates directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic.yaml",
            TemplateKind::Full => "full.yaml",
        }
    }
}

/// Derive the descriptor file name: `"My App"` → `"my-app.yaml"`
pub fn descriptor_file_name(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}.{}", slug, DESCRIPTOR_EXTENSION)
}

/// Writes new application descriptors from templates
#[derive(Debug, Clone)]
pub struct Scaffold {
    apps_dir: PathBuf,
    templates_dir: PathBuf,
}

impl Scaffold {
    /// Create a scaffold writing into `apps_dir`, reading from `templates_dir`
    pub fn new(apps_dir: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
            templates_dir: templates_dir.into(),
        }
    }

    /// Path a descriptor for `name` would be written to
    pub fn target_path(&self, name: &str) -> PathBuf {
        self.apps_dir.join(descriptor_file_name(name))
    }

    /// Create a descriptor for `name` and return its path
    pub fn create(&self, name: Option<&str>, kind: TemplateKind) -> Result<PathBuf, ScaffoldError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ScaffoldError::MissingName)?;

        let target = self.target_path(name);
        if target.exists() {
            return Err(ScaffoldError::AlreadyExists { path: target });
        }

        let template_path = self.templates_dir.join(kind.file_name());
        let template = read_template(&template_path)?;
        let content = template.replace(NAME_PLACEHOLDER, name);

        fs::create_dir_all(&self.apps_dir).map_err(|source| ScaffoldError::WriteError {
            path: self.apps_dir.clone(),
            source,
        })?;
        write_new(&target, &content)?;
        log::debug!("Created {} from {}", target.display(), template_path.display());

        Ok(target)
    }
}

fn read_template(path: &Path) -> Result<String, ScaffoldError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ScaffoldError::TemplateNotFound {
            path: path.to_path_buf(),
        },
        _ => ScaffoldError::ReadError {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Write `content` to a file that must not exist yet
fn write_new(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => ScaffoldError::WriteError {
                path: path.to_path_buf(),
                source,
            },
        })?;

    file.write_all(content.as_bytes())
        .map_err(|source| ScaffoldError::WriteError {
            path: path.to_path_buf(),
            source,
        })
}
