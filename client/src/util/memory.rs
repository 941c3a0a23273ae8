//! In-memory stand-ins for browser storage and the document root.

use std::cell::RefCell;
use std::collections::HashMap;

use super::theme::{PreferenceStore, ThemeTarget};

/// `localStorage` replacement backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    /// Drop every entry, as a user clearing site data would.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Document root replacement holding one optional attribute value.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    attr: RefCell<Option<String>>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(value: &str) -> Self {
        Self { attr: RefCell::new(Some(value.to_owned())) }
    }
}

impl ThemeTarget for MemoryRoot {
    fn theme_attr(&self) -> Option<String> {
        self.attr.borrow().clone()
    }

    fn set_theme_attr(&self, value: &str) {
        *self.attr.borrow_mut() = Some(value.to_owned());
    }
}
