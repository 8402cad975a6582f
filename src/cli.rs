//! CLI argument parsing module for appfeed

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;

    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }

    Ok(Duration::from_secs(secs))
}

/// App-catalog repository feed generator
#[derive(Parser, Debug, Clone)]
#[command(
    name = "appfeed",
    version,
    about = "Builds an app-catalog repository feed from GitHub releases"
)]
pub struct CliArgs {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch releases and write the repository document
    Generate(GenerateArgs),

    /// Create a new application descriptor from a template
    New(NewArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory containing one descriptor per application
    #[arg(long, default_value = "apps")]
    pub apps_dir: PathBuf,

    /// Repository descriptor
    #[arg(long, default_value = "repo-config.yaml")]
    pub repo_config: PathBuf,

    /// Where to write the repository document
    #[arg(short, long, default_value = "output/app-repo.json")]
    pub output: PathBuf,

    /// GitHub token (anonymous access when unset)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = crate::forge::GITHUB_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30")]
    pub timeout: Duration,
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Display name of the application
    pub name: Option<String>,

    /// Start from the full template instead of the basic one
    #[arg(long)]
    pub full: bool,

    /// Directory the descriptor is written to
    #[arg(long, default_value = "apps")]
    pub apps_dir: PathBuf,

    /// Directory holding basic.yaml and full.yaml
    #[arg(long, default_value = "templates")]
    pub templates_dir: PathBuf,
}

impl CliArgs {
    /// Log level implied by --verbose / --quiet
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}
