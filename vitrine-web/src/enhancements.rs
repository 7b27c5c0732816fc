//! Page enhancements installed at startup.

use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{Enhancement, EnhancementError, SiteConfig, ThemeSelector};

use crate::components::theme_menu::{Props as ThemeMenuProps, ThemeMenu};
use crate::document::DomThemeDocument;
use crate::listeners::{self, Shared};
use crate::storage::LocalPreferenceStore;
use crate::{a11y, dom, system};

pub type WebSelector = ThemeSelector<LocalPreferenceStore, DomThemeDocument>;

fn script_error(value: &wasm_bindgen::JsValue) -> EnhancementError {
    EnhancementError::Script(dom::js_error_message(value))
}

/// Build the browser-backed selector for `config`.
#[must_use]
pub fn web_selector(config: SiteConfig) -> Shared<LocalPreferenceStore, DomThemeDocument> {
    let document = DomThemeDocument::new(config.clone());
    Rc::new(RefCell::new(ThemeSelector::new(
        LocalPreferenceStore,
        document,
        config,
    )))
}

pub struct Styles;

impl Enhancement for Styles {
    fn name(&self) -> &'static str {
        "styles"
    }

    fn install(&mut self) -> Result<(), EnhancementError> {
        a11y::inject_styles().map_err(|e| script_error(&e))
    }
}

pub struct LiveRegion {
    pub id: String,
}

impl Enhancement for LiveRegion {
    fn name(&self) -> &'static str {
        "live-region"
    }

    fn install(&mut self) -> Result<(), EnhancementError> {
        a11y::ensure_live_region(&self.id)
            .map(|_| ())
            .map_err(|e| script_error(&e))
    }
}

/// Initializes the selector, wires clicks and the shortcut, and follows the OS scheme.
pub struct ThemeSwitcher {
    pub selector: Shared<LocalPreferenceStore, DomThemeDocument>,
}

impl Enhancement for ThemeSwitcher {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn install(&mut self) -> Result<(), EnhancementError> {
        let theme = self.selector.borrow_mut().initialize(system::prefers_dark());
        log::info!("initial theme `{theme}`");

        listeners::install(&self.selector).map_err(|e| script_error(&e))?;

        let shared = Rc::clone(&self.selector);
        if let Err(err) = system::watch(move |dark| {
            if let Ok(mut selector) = shared.try_borrow_mut() {
                selector.system_preference_changed(dark);
            }
        }) {
            log::info!("system color scheme not observable: {}", dom::js_error_message(&err));
        }
        Ok(())
    }
}

/// Renders [`ThemeMenu`] into a placeholder element when the page has one.
///
/// Pages that ship their own picker markup simply omit the placeholder.
pub struct ThemeMenuMount {
    pub host_id: String,
    pub config: &'static SiteConfig,
    pub selector: Shared<LocalPreferenceStore, DomThemeDocument>,
}

impl Enhancement for ThemeMenuMount {
    fn name(&self) -> &'static str {
        "theme-menu"
    }

    fn install(&mut self) -> Result<(), EnhancementError> {
        let doc = dom::document().ok_or(EnhancementError::Unsupported("document"))?;
        let Some(host) = doc.get_element_by_id(&self.host_id) else {
            log::debug!("no #{} placeholder, keeping static picker markup", self.host_id);
            return Ok(());
        };
        let props = ThemeMenuProps {
            active: self.selector.borrow().active(),
            config: self.config,
            class: yew::Classes::new(),
        };
        yew::Renderer::<ThemeMenu>::with_root_and_props(host, props).render();
        Ok(())
    }
}
