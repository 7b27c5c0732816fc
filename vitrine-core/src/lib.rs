//! Vitrine Theme Engine
//!
//! Platform-agnostic theme selection for the Vitrine site enhancements.
//! This crate owns the theme model and the selector state machine; the
//! browser crate plugs in `localStorage` and the live DOM through the traits
//! defined here.

pub mod boot;
pub mod config;
pub mod indicator;
pub mod selector;
pub mod testing;
pub mod theme;
pub mod trigger;

// Re-export commonly used types
pub use boot::{Enhancement, EnhancementError, InstallReport, install_all};
pub use config::{ConfigError, SiteConfig};
pub use indicator::{IndicatorUpdate, OptionState, announcement_text};
pub use selector::{Selection, ThemeSelector};
pub use theme::{ParseThemeError, Theme, ThemeMeta, resolve_active};
pub use trigger::{KeyChord, Trigger};

/// Trait for abstracting the persistent key-value store
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be accessed.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be accessed.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Trait for the page the selector paints
pub trait ThemeDocument {
    type Error: std::error::Error + 'static;

    /// Write the theme id to the root element
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is unavailable.
    fn set_theme(&self, theme: Theme) -> Result<(), Self::Error>;

    /// Mark the page as transitioning between palettes for a short while
    ///
    /// # Errors
    ///
    /// Returns an error if the transition class or its timer cannot be set.
    fn begin_transition(&self) -> Result<(), Self::Error>;

    /// Reflect the active theme in the picker
    ///
    /// # Errors
    ///
    /// Returns an error if the picker elements are missing.
    fn update_indicator(&self, update: &IndicatorUpdate) -> Result<(), Self::Error>;

    /// Read `message` out to assistive technology
    ///
    /// # Errors
    ///
    /// Returns an error if the announcement node cannot be inserted.
    fn announce(&self, message: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStore, RecordingDocument};

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::default();
        assert_eq!(store.read("k"), Ok(None));
        store.write("k", "dark").expect("write");
        assert_eq!(store.read("k"), Ok(Some("dark".to_string())));
        store.remove("k").expect("remove");
        assert!(store.is_empty());
    }

    #[test]
    fn failing_store_reports_errors() {
        let store = MemoryStore::failing();
        assert!(store.read("k").is_err());
        assert!(store.write("k", "v").is_err());
        assert!(store.remove("k").is_err());
    }

    #[test]
    fn detached_document_rejects_indicator_updates() {
        let doc = RecordingDocument::detached();
        assert!(doc.set_theme(Theme::Dark).is_ok());
        assert!(
            doc.update_indicator(&IndicatorUpdate::for_theme(Theme::Dark))
                .is_err()
        );
        assert_eq!(doc.attribute(), Some(Theme::Dark));
    }
}
