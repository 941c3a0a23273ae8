//! Browser-backed theme capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorage` wraps `window.localStorage` and `DocumentRoot` wraps
//! `document.documentElement`. Both are looked up on every call, so they hold
//! no handles across page lifetimes. Outside the `csr` build they are inert:
//! reads return `None` and writes are dropped.

use super::theme::{PreferenceStore, ThemePreference, ThemeTarget};
#[cfg(feature = "csr")]
use super::theme::THEME_ATTR;

/// Persistent storage of the current origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// The `<html>` element of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

#[cfg(feature = "csr")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match storage()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("reading `{key}` from localStorage failed: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("writing `{key}` to localStorage failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

impl ThemeTarget for DocumentRoot {
    fn theme_attr(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            root_element()?.get_attribute(THEME_ATTR)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set_theme_attr(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(el) = root_element() else {
                log::warn!("no document root; `{THEME_ATTR}` not applied");
                return;
            };
            if let Err(err) = el.set_attribute(THEME_ATTR, value) {
                log::warn!("setting `{THEME_ATTR}` failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }
}

/// Theme preference wired to the live page.
pub fn page_preference() -> ThemePreference<LocalStorage, DocumentRoot> {
    ThemePreference::new(LocalStorage, DocumentRoot)
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;
