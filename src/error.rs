//! Error type shared by the site maintenance commands.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{} not found", .0.display())]
    ArtPageNotFound(PathBuf),
    #[error("could not find a <main> tag in {}", .0.display())]
    MissingMainTag(PathBuf),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {}", .code.map_or_else(|| "a signal".to_owned(), |c| format!("status {c}")))]
    CommandFailed { command: String, code: Option<i32> },
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
