//! Theme preference: a two-valued flag kept in sync between persistent
//! storage and the `data-theme` attribute on the document root.
//!
//! DESIGN
//! ======
//! `ThemePreference` never touches browser globals. It is handed a
//! `PreferenceStore` and a `ThemeTarget`; the browser adapters live in
//! `util::browser` and the in-memory ones in `util::memory`.
//!
//! The stylesheet only keys off `[data-theme="dark"]`, so the default theme is
//! written as the empty string at the storage/DOM boundary. Inside the crate
//! the default is always `Theme::Default`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

/// Storage key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root read by the stylesheet.
pub const THEME_ATTR: &str = "data-theme";

const DARK: &str = "dark";

/// Visual theme of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light theme; no attribute selector matches.
    #[default]
    Default,
    Dark,
}

impl Theme {
    /// Decode an attribute or stored value. Anything but `"dark"` is the default.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some(DARK) => Self::Dark,
            _ => Self::Default,
        }
    }

    /// Encoding used for both the DOM attribute and the stored value.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Dark => DARK,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Default => Self::Dark,
            Self::Dark => Self::Default,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Durable client-side key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Holder of the live theme attribute (the document root in a browser).
pub trait ThemeTarget {
    fn theme_attr(&self) -> Option<String>;
    fn set_theme_attr(&self, value: &str);
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

impl<P: ThemeTarget + ?Sized> ThemeTarget for &P {
    fn theme_attr(&self) -> Option<String> {
        (**self).theme_attr()
    }

    fn set_theme_attr(&self, value: &str) {
        (**self).set_theme_attr(value);
    }
}

/// Synchronizes the stored preference with the document attribute.
pub struct ThemePreference<S, T> {
    store: S,
    target: T,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemePreference<S, T> {
    pub fn new(store: S, target: T) -> Self {
        Self { store, target }
    }

    /// Theme currently shown by the target.
    pub fn current(&self) -> Theme {
        Theme::from_attr(self.target.theme_attr().as_deref())
    }

    /// Flip the theme on the target and persist the new value.
    ///
    /// The attribute and the stored value always receive the same string.
    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.target.set_theme_attr(next.as_attr());
        self.store.set(STORAGE_KEY, next.as_attr());
        next
    }

    /// Re-apply the persisted value after a page load.
    ///
    /// An absent or empty stored value leaves the attribute untouched. A
    /// non-empty one is copied verbatim.
    pub fn restore_on_load(&self) -> Theme {
        match self.store.get(STORAGE_KEY) {
            Some(stored) if !stored.is_empty() => {
                self.target.set_theme_attr(&stored);
                Theme::from_attr(Some(&stored))
            }
            _ => self.current(),
        }
    }
}
