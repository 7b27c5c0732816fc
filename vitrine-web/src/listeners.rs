//! Delegated document-level listeners feeding the theme selector.
//!
//! One `click` and one `keydown` listener cover every theme option on the
//! page, including options rendered after startup. The `keydown` listener
//! also closes dropdown menus on Escape.

use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{KeyChord, PreferenceStore, ThemeDocument, ThemeSelector, Trigger};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use crate::dom;

pub type Shared<S, D> = Rc<RefCell<ThemeSelector<S, D>>>;

#[must_use]
pub fn chord_from_event(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        code: event.code(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    }
}

/// Theme tag of the option enclosing `target`, if any.
fn option_tag(
    target: Option<web_sys::EventTarget>,
    selector: &str,
    attribute: &str,
) -> Option<Option<String>> {
    let element = target?.dyn_into::<Element>().ok()?;
    let option = element.closest(selector).ok().flatten()?;
    Some(option.get_attribute(attribute))
}

/// Click and focus the toggle preceding the menu that contains `target`.
fn dismiss_menu(target: Option<web_sys::EventTarget>, menu_selector: &str) {
    let Some(toggle) = target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(menu_selector).ok().flatten())
        .and_then(|menu| menu.previous_element_sibling())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    toggle.click();
    if let Err(err) = toggle.focus() {
        log::debug!("menu toggle not focusable: {}", dom::js_error_message(&err));
    }
}

fn run<S, D>(shared: &Shared<S, D>, trigger: &Trigger)
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    match shared.try_borrow_mut() {
        Ok(mut selector) => {
            selector.dispatch(trigger);
        }
        Err(_) => log::warn!("theme selector busy, dropped {trigger:?}"),
    }
}

/// Attach the click and keyboard listeners for `shared`.
///
/// # Errors
/// Returns an error if the document is unavailable or a listener cannot be attached.
pub fn install<S, D>(shared: &Shared<S, D>) -> Result<(), JsValue>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
{
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let (option_selector, option_attribute, menu_selector) = {
        let selector = shared.borrow();
        let cfg = selector.config();
        (
            cfg.option_selector(),
            cfg.option_attribute.clone(),
            cfg.menu_selector(),
        )
    };

    let on_click = {
        let shared = Rc::clone(shared);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(tag) = option_tag(event.target(), &option_selector, &option_attribute) else {
                return;
            };
            event.prevent_default();
            if let Some(trigger) = Trigger::from_option(tag.as_deref()) {
                run(&shared, &trigger);
            }
        })
    };
    doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let on_key = {
        let shared = Rc::clone(shared);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let chord = chord_from_event(&event);
            if chord.is_dismiss() {
                dismiss_menu(event.target(), &menu_selector);
                return;
            }
            if let Some(trigger) = Trigger::from_key(&chord) {
                event.prevent_default();
                run(&shared, &trigger);
            }
        })
    };
    doc.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}
