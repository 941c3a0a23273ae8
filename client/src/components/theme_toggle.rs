//! Button flipping the site between the default and dark themes.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::browser::page_preference;
use crate::util::theme::{PreferenceStore, ThemePreference, ThemeTarget};

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Toggle the preference and mirror the result into UI state.
pub fn apply_toggle<S: PreferenceStore, T: ThemeTarget>(pref: &ThemePreference<S, T>, ui: &mut UiState) {
    ui.theme = pref.toggle();
}

/// Theme toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let pref = page_preference();
                ui.update(|u| apply_toggle(&pref, u));
            }
            title=move || ui.get().toggle_title()
        >
            {move || ui.get().toggle_glyph()}
        </button>
    }
}
