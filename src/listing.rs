//! Directory enumeration for the site's image folders.
//!
//! Listing is best effort: an unreadable or missing folder yields an empty
//! list and a warning rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

/// Extensions (lowercase) accepted as portfolio files.
pub const PORTFOLIO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "pdf"];

/// Names of the immediate subdirectories of `dir`, in enumeration order.
pub fn list_subdirectories(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %dir.display(), error = %err, "cannot read directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(path = %dir.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

/// All-digit subdirectories of `base`, sorted by year ascending.
///
/// Symlinked folders count when their target is a directory.
pub fn find_year_dirs(base: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(base) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %base.display(), error = %err, "cannot read portfolio directory");
            return Vec::new();
        }
    };

    let mut years: Vec<(String, PathBuf)> = entries
        .flatten()
        .map(|entry| (entry.file_name().to_string_lossy().into_owned(), entry.path()))
        .filter(|(name, path)| is_year_name(name) && path.is_dir())
        .collect();
    years.sort_by(|(a, _), (b, _)| year_key(a).cmp(&year_key(b)));
    years.into_iter().map(|(_, path)| path).collect()
}

fn is_year_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric ordering of a digit string of any length.
fn year_key(name: &str) -> (usize, &str) {
    let digits = name.trim_start_matches('0');
    (digits.len(), digits)
}

/// Portfolio files directly inside `dir`, sorted by name.
///
/// Symlinks to files are included. Hidden files and unsupported extensions
/// are skipped.
pub fn list_year_files(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %dir.display(), error = %err, "cannot read year directory");
            return Vec::new();
        }
    };

    let mut files: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.') && has_portfolio_extension(name))
        .collect();
    files.sort();
    files
}

fn has_portfolio_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PORTFOLIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
