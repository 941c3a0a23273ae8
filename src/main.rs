mod art_page;
mod config;
mod error;
mod listing;
mod publish;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::error::SiteError;

#[derive(Parser, Debug)]
#[command(name = "site", about = "Maintenance commands for the personal site")]
struct Cli {
    /// Log filter directive; overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the subfolders of the images directory.
    Dirs(DirsArgs),
    /// Regenerate the portfolio listing in the art page.
    Art(ArtArgs),
    /// Stage, commit and push all changes.
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
struct DirsArgs {
    #[arg(long, env = "SITE_IMAGES_DIR", default_value = config::DEFAULT_IMAGES_DIR)]
    images_dir: PathBuf,

    /// Print a JSON array instead of one name per line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ArtArgs {
    #[arg(long, env = "SITE_ART_HTML", default_value = config::DEFAULT_ART_HTML)]
    art_html: PathBuf,

    #[arg(long, env = "SITE_PORTFOLIO_DIR", default_value = config::DEFAULT_PORTFOLIO_DIR)]
    portfolio_dir: PathBuf,
}

#[derive(Args, Debug)]
struct PublishArgs {
    #[arg(short, long, default_value = config::DEFAULT_COMMIT_MESSAGE)]
    message: String,

    #[arg(long, env = "SITE_REPO_DIR", default_value = config::DEFAULT_REPO_DIR)]
    repo_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(cli.log_level.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli.command);
    match &result {
        Ok(output) => print!("{output}"),
        Err(e) => tracing::error!(error = %e, "command failed"),
    }
    ExitCode::from(exit_status(&result))
}

/// Process exit status for a command outcome.
fn exit_status<T>(result: &Result<T, SiteError>) -> u8 {
    u8::from(result.is_err())
}

/// Run one command and return what it prints to stdout.
fn run(command: Command) -> Result<String, SiteError> {
    match command {
        Command::Dirs(args) => {
            let dirs = listing::list_subdirectories(&args.images_dir);
            tracing::info!(path = %args.images_dir.display(), count = dirs.len(), ?dirs, "image folders");
            render_dirs(&dirs, args.json)
        }
        Command::Art(args) => {
            art_page::update_art_page(&args.art_html, &args.portfolio_dir)?;
            Ok(String::new())
        }
        Command::Publish(args) => {
            let mut runner = publish::SystemRunner::new(&args.repo_dir);
            publish::publish(&mut runner, &args.message)?;
            Ok(String::new())
        }
    }
}

/// Folder names one per line, or a single JSON array line.
fn render_dirs(dirs: &[String], json: bool) -> Result<String, SiteError> {
    if json {
        return Ok(serde_json::to_string(dirs)? + "\n");
    }
    Ok(dirs.iter().map(|dir| format!("{dir}\n")).collect())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
