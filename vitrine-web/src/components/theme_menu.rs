use vitrine_core::{SiteConfig, Theme};
use yew::prelude::*;
use yew::virtual_dom::VTag;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: Theme,
    /// Ids, classes and the option attribute the listeners and document
    /// adapter were built with.
    #[prop_or(SiteConfig::embedded())]
    pub config: &'static SiteConfig,
    #[prop_or_default]
    pub class: Classes,
}

/// One option link, tagged through the configured attribute name.
fn option_link(cfg: &'static SiteConfig, theme: Theme, selected: bool) -> Html {
    let mut class = vec!["dropdown-item", cfg.option_class.as_str()];
    if selected {
        class.push(cfg.active_class.as_str());
    }
    let mut link = VTag::new("a");
    link.add_attribute("href", "#");
    link.add_attribute("role", "menuitemradio");
    link.add_attribute("class", class.join(" "));
    link.add_attribute(cfg.option_attribute.as_str(), theme.as_str());
    link.add_attribute("aria-checked", if selected { "true" } else { "false" });
    link.add_child(html! {
        <>
            <i class={classes!("bi", theme.icon())} aria-hidden="true"></i>
            { " " }{ theme.label() }
        </>
    });
    link.into()
}

/// Theme picker markup matching the DOM contract of the selector.
///
/// Clicks and Escape are handled by the document-level listeners, so the
/// component carries no callbacks.
#[function_component(ThemeMenu)]
pub fn theme_menu(p: &Props) -> Html {
    let cfg = p.config;
    let active = p.active;
    let options = Theme::ALL.iter().map(|&theme| {
        html! { <li>{ option_link(cfg, theme, theme == active) }</li> }
    });
    html! {
        <div class={classes!("dropdown", "theme-menu", p.class.clone())}>
            <button id={cfg.toggle_id.clone()} class="btn dropdown-toggle" type="button" aria-haspopup="true" aria-label="Theme selector">
                <i class={classes!("bi", active.icon())} aria-hidden="true"></i>
                { " " }
                <span id={cfg.label_id.clone()}>{ active.label() }</span>
            </button>
            <ul class={cfg.menu_class.clone()} role="menu">
                { for options }
            </ul>
        </div>
    }
}
