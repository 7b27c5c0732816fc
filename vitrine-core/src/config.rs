//! Site-wide settings for the theme selector and its DOM contract.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMBEDDED: Lazy<SiteConfig> = Lazy::new(SiteConfig::load_from_static);
static DEFAULTS: Lazy<SiteConfig> = Lazy::new(SiteConfig::default);

/// Errors raised when a configuration breaks the selector's assumptions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be greater than zero")]
    ZeroDelay { field: &'static str },
    #[error("option attribute `{0}` must start with `data-`")]
    OptionAttribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// localStorage key holding the explicit preference.
    pub storage_key: String,
    /// Attribute on `<html>` carrying the active theme id.
    pub theme_attribute: String,
    /// Class present on `<html>` while colors animate.
    pub transition_class: String,
    pub transition_ms: u32,
    /// Whether selections are announced to assistive technology.
    pub announce: bool,
    pub announce_ms: u32,
    pub label_id: String,
    pub toggle_id: String,
    pub option_class: String,
    pub option_attribute: String,
    pub active_class: String,
    /// Class of the dropdown list holding the options; Escape inside it
    /// returns focus to the toggle.
    pub menu_class: String,
    pub live_region_id: String,
    /// Persist themes derived from OS preference changes as explicit choices.
    pub persist_system_changes: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "preferred-theme".to_string(),
            theme_attribute: "data-bs-theme".to_string(),
            transition_class: "theme-transitioning".to_string(),
            transition_ms: 300,
            announce: true,
            announce_ms: 1000,
            label_id: "current-theme".to_string(),
            toggle_id: "themeDropdown".to_string(),
            option_class: "theme-option".to_string(),
            option_attribute: "data-theme".to_string(),
            active_class: "active".to_string(),
            menu_class: "dropdown-menu".to_string(),
            live_region_id: "live-region".to_string(),
            persist_system_changes: false,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configuration shipped with the site assets.
    #[must_use]
    pub fn load_from_static() -> Self {
        match Self::from_json(include_str!("../../vitrine-web/static/site.json")) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("embedded site config unreadable, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Shared parsed copy of the embedded configuration.
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// `self` when it validates, otherwise the built-in defaults.
    #[must_use]
    pub fn validated_or_default(&'static self) -> &'static Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("site config rejected, using defaults: {err}");
                &DEFAULTS
            }
        }
    }

    /// Check the invariants the DOM adapters rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("option_attribute", &self.option_attribute),
            ("active_class", &self.active_class),
            ("menu_class", &self.menu_class),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        if !self.option_attribute.starts_with("data-") {
            return Err(ConfigError::OptionAttribute(self.option_attribute.clone()));
        }
        if self.announce && self.announce_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "announce_ms",
            });
        }
        Ok(())
    }

    /// CSS selector matching every theme option element.
    #[must_use]
    pub fn option_selector(&self) -> String {
        format!(".{}[{}]", self.option_class, self.option_attribute)
    }

    /// CSS selector matching the dropdown list.
    #[must_use]
    pub fn menu_selector(&self) -> String {
        format!(".{}", self.menu_class)
    }
}
