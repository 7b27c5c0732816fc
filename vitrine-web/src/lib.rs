#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod components;
pub mod document;
pub mod dom;
pub mod enhancements;
pub mod listeners;
pub mod logging;
pub mod storage;
pub mod system;

/// Placeholder element the theme picker is rendered into, when present.
pub const THEME_MENU_HOST: &str = "theme-menu";

/// Install every enhancement for `config`, isolating failures.
///
/// A config that fails validation is replaced by the defaults so the page
/// still gets a theme.
pub fn boot(config: &'static vitrine_core::SiteConfig) -> vitrine_core::InstallReport {
    use enhancements::{LiveRegion, Styles, ThemeMenuMount, ThemeSwitcher};
    use vitrine_core::Enhancement;

    let config = config.validated_or_default();
    let selector = enhancements::web_selector(config.clone());
    let items: Vec<Box<dyn Enhancement>> = vec![
        Box::new(Styles),
        Box::new(LiveRegion {
            id: config.live_region_id.clone(),
        }),
        Box::new(ThemeSwitcher {
            selector: selector.clone(),
        }),
        Box::new(ThemeMenuMount {
            host_id: THEME_MENU_HOST.to_string(),
            config,
            selector,
        }),
    ];
    vitrine_core::install_all(items)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let report = boot(vitrine_core::SiteConfig::embedded());
    if !report.is_clean() {
        dom::console_error(&format!(
            "{} enhancement(s) failed to install",
            report.failed.len()
        ));
    }
}
