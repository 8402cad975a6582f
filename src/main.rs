//! appfeed - App-catalog repository feed generator
//!
//! Reads application descriptors, lists their GitHub releases and writes a
//! single repository document for catalog clients.

use anyhow::Context;
use appfeed::assembler::Assembler;
use appfeed::cli::{CliArgs, Command, GenerateArgs, NewArgs};
use appfeed::config::{load_app_configs, load_repository_config};
use appfeed::error::AppError;
use appfeed::forge::{GithubReleases, HttpClient, ReleaseFetcher, DEFAULT_USER_AGENT};
use appfeed::output::{write_document, SummaryFormatter};
use appfeed::scaffold::{Scaffold, TemplateKind};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = match &args.command {
        Command::Generate(generate) => run_generate(generate, args.quiet)
            .await
            .context("failed to generate repository document"),
        Command::New(new) => run_new(new).context("failed to create app configuration"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Load → fetch → assemble → write
async fn run_generate(args: &GenerateArgs, quiet: bool) -> Result<(), AppError> {
    log::info!("Loading repository configuration...");
    let repo_config = load_repository_config(&args.repo_config)?;

    log::info!("Loading app configurations...");
    let app_configs = load_app_configs(&args.apps_dir)?;

    let client = HttpClient::with_config(
        args.timeout,
        DEFAULT_USER_AGENT,
        args.github_token.clone(),
    )?;
    if !client.is_authenticated() {
        log::debug!("No GitHub token configured, using anonymous access");
    }
    let source = GithubReleases::with_api_url(client, args.api_url.clone());
    let assembler = Assembler::new(ReleaseFetcher::new(Box::new(source)));

    let outcome = assembler.assemble(repo_config, app_configs).await;

    log::info!("Writing output to {}...", args.output.display());
    write_document(&outcome.document, &args.output)?;

    if !quiet {
        let mut stdout = io::stdout().lock();
        SummaryFormatter::new().format(&outcome, &args.output, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

/// Write a new application descriptor
fn run_new(args: &NewArgs) -> Result<(), AppError> {
    let scaffold = Scaffold::new(&args.apps_dir, &args.templates_dir);
    let path = scaffold.create(args.name.as_deref(), TemplateKind::from_full_flag(args.full))?;

    println!(
        "{} Created new app configuration: {}",
        "✓".green(),
        path.display()
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit {} with your app details", path.display());
    println!("  2. Fill in the GitHub owner and repo");
    println!("  3. Run `appfeed generate` to test");

    Ok(())
}
