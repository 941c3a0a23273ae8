//! Regenerates the portfolio listing inside `art.html`.
//!
//! Each all-digit folder under the portfolio directory becomes a year heading
//! followed by a list of links. The generated block sits between two marker
//! comments so reruns replace it in place.

use std::fs;
use std::path::Path;

use regex::RegexBuilder;

use crate::error::SiteError;
use crate::listing::{find_year_dirs, list_year_files};

pub const BEGIN_MARK: &str = "<!-- BEGIN AUTO-GENERATED ART -->";
pub const END_MARK: &str = "<!-- END AUTO-GENERATED ART -->";

/// URL prefix of portfolio files relative to the page.
const HREF_BASE: &str = "images/portfolio";

/// HTML for one year: heading plus an unstyled link list.
pub fn build_year_block(year: &str, files: &[String]) -> String {
    let mut lines = Vec::with_capacity(files.len() + 3);
    lines.push(format!("\t\t\t\t<h2>{year}</h2>"));
    lines.push("\t\t\t\t<ul style=\"list-style-type: none; padding: 0;\">".to_owned());
    for name in files {
        let href = format!("{HREF_BASE}/{year}/{}", urlencoding::encode(name));
        lines.push(format!("\t\t\t\t\t<li><a href=\"{href}\">{}</a></li>", escape_html(name)));
    }
    lines.push("\t\t\t\t</ul>".to_owned());
    lines.join("\n")
}

/// Blocks for every year with at least one file; empty when there are none.
pub fn generate_all_blocks(portfolio_dir: &Path) -> String {
    let blocks: Vec<String> = find_year_dirs(portfolio_dir)
        .into_iter()
        .filter_map(|dir| {
            let year = dir.file_name()?.to_string_lossy().into_owned();
            let files = list_year_files(&dir);
            if files.is_empty() {
                tracing::debug!(%year, "no portfolio files; skipping year");
                return None;
            }
            Some(build_year_block(&year, &files))
        })
        .collect();

    if blocks.is_empty() {
        String::new()
    } else {
        blocks.join("\n\n") + "\n"
    }
}

/// Place `payload` into the page.
///
/// An existing marker block is replaced; otherwise a new one is inserted
/// right after the first `<main>` tag. An empty payload leaves the page as is.
pub fn inject(html: &str, payload: &str, page: &Path) -> Result<String, SiteError> {
    if payload.is_empty() {
        return Ok(html.to_owned());
    }

    if html.contains(BEGIN_MARK) && html.contains(END_MARK) {
        return Ok(replace_marked_block(html, payload));
    }

    let main_open = RegexBuilder::new(r"<main\b[^>]*>").case_insensitive(true).build()?;
    let Some(tag) = main_open.find(html) else {
        return Err(SiteError::MissingMainTag(page.to_path_buf()));
    };

    let (before, after) = html.split_at(tag.end());
    Ok(format!("{before}\n{BEGIN_MARK}\n{payload}{END_MARK}\n{after}"))
}

/// Swap the first BEGIN..END span; an END that only precedes BEGIN is no match.
fn replace_marked_block(html: &str, payload: &str) -> String {
    let Some(start) = html.find(BEGIN_MARK) else {
        return html.to_owned();
    };
    let search_from = start + BEGIN_MARK.len();
    let Some(end_rel) = html[search_from..].find(END_MARK) else {
        return html.to_owned();
    };
    let end = search_from + end_rel + END_MARK.len();
    format!("{}{BEGIN_MARK}\n{payload}{END_MARK}{}", &html[..start], &html[end..])
}

/// Rewrite `art_html` with the current portfolio listing.
///
/// Returns whether any generated content was written.
pub fn update_art_page(art_html: &Path, portfolio_dir: &Path) -> Result<bool, SiteError> {
    if !art_html.is_file() {
        return Err(SiteError::ArtPageNotFound(art_html.to_path_buf()));
    }

    let payload = generate_all_blocks(portfolio_dir);
    let original = fs::read_to_string(art_html)?;
    let updated = inject(&original, &payload, art_html)?;
    fs::write(art_html, updated)?;

    let with_content = !payload.is_empty();
    tracing::info!(page = %art_html.display(), with_content, "updated art page");
    Ok(with_content)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "art_page_test.rs"]
mod tests;
