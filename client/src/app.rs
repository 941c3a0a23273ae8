//! Root component mounted into the static page.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::browser::page_preference;

/// Root application component.
///
/// Seeds `UiState` from whatever theme the document shows, which is the
/// restored preference once `start` has run.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::with_theme(page_preference().current()));
    provide_context(ui);

    view! { <ThemeToggle/> }
}
