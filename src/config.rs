//! Defaults for the site maintenance commands and logging setup.
//!
//! Every path can be overridden on the command line or through the matching
//! `SITE_*` environment variable (see `main.rs`).

use tracing_subscriber::EnvFilter;

pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_PORTFOLIO_DIR: &str = "images/portfolio";
pub const DEFAULT_ART_HTML: &str = "art.html";
pub const DEFAULT_REPO_DIR: &str = ".";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update site";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Pick the log directive: an explicit flag wins over `RUST_LOG`, which wins
/// over the default. Blank values count as unset.
pub fn resolve_log_directive(flag: Option<&str>, env: Option<&str>) -> String {
    [flag, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_owned()
}

/// Build the subscriber filter, falling back to the default on a bad directive.
pub fn log_filter(flag: Option<&str>) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_log_directive(flag, env.as_deref());
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
