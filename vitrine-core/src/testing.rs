//! In-memory collaborators for exercising the selector without a browser.

use crate::indicator::IndicatorUpdate;
use crate::theme::Theme;
use crate::{PreferenceStore, ThemeDocument};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FakeError {
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("element `{0}` not present")]
    MissingElement(&'static str),
}

/// Key-value store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    broken: bool,
}

impl MemoryStore {
    /// A store whose every operation fails, like a disabled `localStorage`.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    type Error = FakeError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.broken {
            return Err(FakeError::StorageUnavailable);
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.broken {
            return Err(FakeError::StorageUnavailable);
        }
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        if self.broken {
            return Err(FakeError::StorageUnavailable);
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
struct PageState {
    attribute: Option<Theme>,
    label: Option<String>,
    icon: Option<String>,
    active_options: Vec<&'static str>,
    announcements: Vec<String>,
    transitions: usize,
    writes: usize,
}

/// Document stand-in that records every mutation.
#[derive(Debug, Default)]
pub struct RecordingDocument {
    page: RefCell<PageState>,
    without_indicator: bool,
}

impl RecordingDocument {
    /// A page that has the root element but no picker markup.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            without_indicator: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn attribute(&self) -> Option<Theme> {
        self.page.borrow().attribute
    }

    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.page.borrow().label.clone()
    }

    #[must_use]
    pub fn icon(&self) -> Option<String> {
        self.page.borrow().icon.clone()
    }

    #[must_use]
    pub fn active_options(&self) -> Vec<&'static str> {
        self.page.borrow().active_options.clone()
    }

    #[must_use]
    pub fn announcements(&self) -> Vec<String> {
        self.page.borrow().announcements.clone()
    }

    #[must_use]
    pub fn transitions(&self) -> usize {
        self.page.borrow().transitions
    }

    /// Total number of mutations applied to the page.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.page.borrow().writes
    }
}

impl ThemeDocument for RecordingDocument {
    type Error = FakeError;

    fn set_theme(&self, theme: Theme) -> Result<(), Self::Error> {
        let mut page = self.page.borrow_mut();
        page.attribute = Some(theme);
        page.writes += 1;
        Ok(())
    }

    fn begin_transition(&self) -> Result<(), Self::Error> {
        let mut page = self.page.borrow_mut();
        page.transitions += 1;
        page.writes += 1;
        Ok(())
    }

    fn update_indicator(&self, update: &IndicatorUpdate) -> Result<(), Self::Error> {
        if self.without_indicator {
            return Err(FakeError::MissingElement("current-theme"));
        }
        let mut page = self.page.borrow_mut();
        page.label = Some(update.label.to_string());
        page.icon = Some(update.icon.to_string());
        page.active_options = update
            .options
            .iter()
            .filter(|option| option.active)
            .map(|option| option.id)
            .collect();
        page.writes += 1;
        Ok(())
    }

    fn announce(&self, message: &str) -> Result<(), Self::Error> {
        let mut page = self.page.borrow_mut();
        page.announcements.push(message.to_string());
        page.writes += 1;
        Ok(())
    }
}
