//! Local UI chrome state.

use crate::util::theme::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the page chrome.
///
/// Provided as `RwSignal<UiState>` from `App`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Glyph for the theme toggle: the theme a click switches to.
    pub fn toggle_glyph(&self) -> &'static str {
        if self.theme.is_dark() { "☀" } else { "☾" }
    }

    pub fn toggle_title(&self) -> &'static str {
        if self.theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
    }
}
