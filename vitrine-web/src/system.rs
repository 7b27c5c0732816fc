//! OS color-scheme signal via `matchMedia`.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_query() -> Option<MediaQueryList> {
    dom::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Current OS preference, `None` when the browser cannot report it.
#[must_use]
pub fn prefers_dark() -> Option<bool> {
    dark_query().map(|list| list.matches())
}

/// Call `on_change` with the new value whenever the OS preference flips.
///
/// The listener lives for the rest of the page.
///
/// # Errors
/// Returns an error if `matchMedia` is unsupported or the listener cannot be attached.
pub fn watch(on_change: impl FnMut(bool) + 'static) -> Result<(), JsValue> {
    let list = dark_query().ok_or_else(|| JsValue::from_str("matchMedia unsupported"))?;
    let mut on_change = on_change;
    let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        on_change(event.matches());
    });
    list.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
