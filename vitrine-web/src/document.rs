//! Live-DOM implementation of [`ThemeDocument`].

use crate::{a11y, dom};
use vitrine_core::{IndicatorUpdate, SiteConfig, Theme, ThemeDocument};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("element `{0}` not found")]
    Missing(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for DocumentError {
    fn from(value: JsValue) -> Self {
        Self::Dom(dom::js_error_message(&value))
    }
}

/// Paints themes onto the current page using the ids and classes in [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct DomThemeDocument {
    config: SiteConfig,
}

impl DomThemeDocument {
    #[must_use]
    pub const fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    fn root(&self) -> Result<Element, DocumentError> {
        dom::root_element().ok_or_else(|| DocumentError::Missing("html".to_string()))
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        dom::document().and_then(|doc| doc.get_element_by_id(id))
    }

    fn options(&self) -> Vec<Element> {
        let Some(doc) = dom::document() else {
            return Vec::new();
        };
        let Ok(list) = doc.query_selector_all(&self.config.option_selector()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|idx| list.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl ThemeDocument for DomThemeDocument {
    type Error = DocumentError;

    fn set_theme(&self, theme: Theme) -> Result<(), Self::Error> {
        self.root()?
            .set_attribute(&self.config.theme_attribute, theme.as_str())?;
        Ok(())
    }

    fn begin_transition(&self) -> Result<(), Self::Error> {
        let root = self.root()?;
        let class = self.config.transition_class.clone();
        let classes = root.class_list();
        // Removal is scheduled first so a failed timer never strands the class.
        dom::set_timeout(self.config.transition_ms, move || {
            let _ = root.class_list().remove_1(&class);
        })?;
        classes.add_1(&self.config.transition_class)?;
        Ok(())
    }

    fn update_indicator(&self, update: &IndicatorUpdate) -> Result<(), Self::Error> {
        let mut found = false;

        if let Some(label) = self.by_id(&self.config.label_id) {
            label.set_text_content(Some(update.label));
            found = true;
        }

        if let Some(toggle) = self.by_id(&self.config.toggle_id)
            && let Ok(Some(icon)) = toggle.query_selector("i")
        {
            let classes = icon.class_list();
            for stale in &update.stale_icons {
                classes.remove_1(stale)?;
            }
            classes.add_1(update.icon)?;
            found = true;
        }

        for option in self.options() {
            let id = option
                .get_attribute(&self.config.option_attribute)
                .unwrap_or_default();
            let classes = option.class_list();
            if update.is_active(&id) {
                classes.add_1(&self.config.active_class)?;
                option.set_attribute("aria-checked", "true")?;
            } else {
                classes.remove_1(&self.config.active_class)?;
                option.set_attribute("aria-checked", "false")?;
            }
            found = true;
        }

        if found {
            Ok(())
        } else {
            Err(DocumentError::Missing(self.config.label_id.clone()))
        }
    }

    fn announce(&self, message: &str) -> Result<(), Self::Error> {
        a11y::announce(message, self.config.announce_ms)?;
        Ok(())
    }
}
