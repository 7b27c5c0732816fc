use futures::executor::block_on;
use vitrine_core::{SiteConfig, Theme};
use vitrine_web::components::theme_menu::{Props, ThemeMenu};
use yew::{Classes, LocalServerRenderer, classes};

fn render_with(active: Theme, config: &'static SiteConfig, class: Classes) -> String {
    block_on(
        LocalServerRenderer::<ThemeMenu>::with_props(Props {
            active,
            config,
            class,
        })
        .render(),
    )
}

fn render(active: Theme, class: Classes) -> String {
    render_with(active, SiteConfig::embedded(), class)
}

#[test]
fn theme_menu_marks_only_the_active_option() {
    let html = render(Theme::HighContrast, Classes::new());
    assert_eq!(html.matches("aria-checked=\"true\"").count(), 1);
    assert_eq!(html.matches("aria-checked=\"false\"").count(), 2);
    assert!(html.contains(">High Contrast</span>"));
    assert!(html.contains("bi-circle-half"));
    assert!(html.contains("class=\"dropdown-item theme-option active\""));
}

#[test]
fn theme_menu_accepts_extra_classes() {
    let html = render(Theme::Light, classes!("ms-auto"));
    assert!(html.contains("ms-auto"));
    assert!(html.contains("theme-menu"));
}

#[test]
fn theme_menu_uses_configured_ids() {
    let cfg = SiteConfig::embedded();
    let html = render(Theme::Light, Classes::new());
    assert!(html.contains(&format!("id=\"{}\"", cfg.toggle_id)));
    assert!(html.contains(&format!("id=\"{}\"", cfg.label_id)));
}

#[test]
fn theme_menu_follows_custom_markup_contract() {
    let cfg: &'static SiteConfig = Box::leak(Box::new(SiteConfig {
        option_attribute: "data-mode".to_string(),
        option_class: "mode-option".to_string(),
        label_id: "mode-label".to_string(),
        toggle_id: "modeToggle".to_string(),
        menu_class: "mode-menu".to_string(),
        ..SiteConfig::default()
    }));
    let html = render_with(Theme::Dark, cfg, Classes::new());

    for theme in Theme::ALL {
        assert!(html.contains(&format!("data-mode=\"{}\"", theme.as_str())));
    }
    assert!(!html.contains("data-theme="));
    assert_eq!(html.matches("mode-option").count(), Theme::ALL.len());
    assert!(html.contains("id=\"mode-label\""));
    assert!(html.contains("id=\"modeToggle\""));
    assert!(html.contains("class=\"mode-menu\""));
    assert!(!html.contains("current-theme"));
}
