#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vitrine_core::testing::MemoryStore;
use vitrine_core::{SiteConfig, Theme, ThemeDocument, ThemeSelector};
use vitrine_web::document::DomThemeDocument;
use vitrine_web::{dom, listeners};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const PICKER: &str = r##"
<button id="themeDropdown"><i class="bi bi-sun"></i><span id="current-theme">Light</span></button>
<ul class="dropdown-menu">
  <li><a href="#" class="theme-option" data-theme="light">Light</a></li>
  <li><a href="#" class="theme-option" data-theme="dark">Dark</a></li>
  <li><a href="#" class="theme-option" data-theme="high-contrast">High Contrast</a></li>
</ul>
"##;

fn mount_picker() {
    let doc = dom::document().expect("document");
    let host = match doc.get_element_by_id("picker") {
        Some(host) => host,
        None => {
            let host = doc.create_element("div").expect("create host");
            host.set_id("picker");
            doc.body()
                .expect("document body")
                .append_child(&host)
                .expect("append host");
            host
        }
    };
    host.set_inner_html(PICKER);
}

fn key_event(code: &str, ctrl: bool, shift: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_code(code);
    init.set_ctrl_key(ctrl);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event")
}

fn selector() -> ThemeSelector<MemoryStore, DomThemeDocument> {
    ThemeSelector::new(
        MemoryStore::default(),
        DomThemeDocument::new(SiteConfig::default()),
        SiteConfig::default(),
    )
}

fn root_theme() -> Option<String> {
    dom::root_element().and_then(|root| root.get_attribute("data-bs-theme"))
}

#[wasm_bindgen_test]
fn initialize_paints_attribute_and_indicator() {
    mount_picker();
    let mut sel = selector();
    sel.initialize(Some(true));
    assert_eq!(root_theme().as_deref(), Some("dark"));
    let doc = dom::document().expect("document");
    let label = doc.get_element_by_id("current-theme").expect("label");
    assert_eq!(label.text_content().as_deref(), Some("Dark"));
    let icon = doc
        .query_selector("#themeDropdown i")
        .expect("query icon")
        .expect("icon");
    assert!(icon.class_list().contains("bi-moon"));
    assert!(!icon.class_list().contains("bi-sun"));
    let active = doc
        .query_selector(".theme-option.active")
        .expect("query active")
        .expect("active option");
    assert_eq!(active.get_attribute("data-theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn clicking_an_option_selects_it() {
    mount_picker();
    let shared = Rc::new(RefCell::new(selector()));
    shared.borrow_mut().initialize(Some(false));
    listeners::install(&shared).expect("listeners");
    let option: HtmlElement = dom::document()
        .expect("document")
        .query_selector("[data-theme='high-contrast']")
        .expect("query option")
        .expect("option")
        .dyn_into()
        .expect("html element");
    option.click();
    assert_eq!(shared.borrow().active(), Theme::HighContrast);
    assert_eq!(root_theme().as_deref(), Some("high-contrast"));
    assert_eq!(
        shared.borrow().store().get("preferred-theme").as_deref(),
        Some("high-contrast")
    );
}

#[wasm_bindgen_test]
fn shortcut_cycles_theme() {
    mount_picker();
    let shared = Rc::new(RefCell::new(selector()));
    shared.borrow_mut().initialize(Some(false));
    listeners::install(&shared).expect("listeners");
    let event = key_event("KeyT", true, true);
    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch");
    assert_eq!(shared.borrow().active(), Theme::Dark);
}

#[wasm_bindgen_test]
fn escape_in_menu_clicks_and_focuses_toggle() {
    mount_picker();
    let shared = Rc::new(RefCell::new(selector()));
    shared.borrow_mut().initialize(Some(false));
    listeners::install(&shared).expect("listeners");

    let doc = dom::document().expect("document");
    let toggle = doc.get_element_by_id("themeDropdown").expect("toggle");
    let clicks = Rc::new(Cell::new(0));
    let on_click = {
        let clicks = Rc::clone(&clicks);
        Closure::<dyn FnMut()>::new(move || clicks.set(clicks.get() + 1))
    };
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .expect("toggle listener");
    on_click.forget();

    let option = doc
        .query_selector(".dropdown-menu [data-theme='dark']")
        .expect("query option")
        .expect("option");
    option
        .dispatch_event(&key_event("Escape", false, false))
        .expect("dispatch");

    assert_eq!(clicks.get(), 1);
    let focused = doc.active_element().expect("focused element");
    assert_eq!(focused.id(), "themeDropdown");
    assert_eq!(shared.borrow().active(), Theme::Light);
}

#[wasm_bindgen_test]
fn transition_class_is_applied_once_removal_is_scheduled() {
    let document = DomThemeDocument::new(SiteConfig::default());
    document.begin_transition().expect("transition");
    let root = dom::root_element().expect("root");
    assert!(root.class_list().contains("theme-transitioning"));
}
