// Accessibility helpers

use crate::dom;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// CSS for theme transitions and screen reader utilities
///
/// Injected once at startup. `.theme-transitioning` animates palette changes,
/// `.sr-only` hides announcement nodes visually, and reduced-motion users get
/// effectively instant transitions.
#[must_use]
pub const fn site_css() -> &'static str {
    ".theme-transitioning *{transition:color .3s ease,background-color .3s ease,border-color .3s ease !important} \
     .sr-only{position:absolute !important;width:1px !important;height:1px !important;padding:0 !important;margin:-1px !important;overflow:hidden !important;clip:rect(0,0,0,0) !important;white-space:nowrap !important;border:0 !important} \
     @media (prefers-reduced-motion: reduce){*{animation-duration:.01ms !important;animation-iteration-count:1 !important;transition-duration:.01ms !important}}"
}

/// Append a `<style>` element carrying [`site_css`] to `<head>`.
///
/// # Errors
/// Returns an error if the document or its head is unavailable.
pub fn inject_styles() -> Result<(), JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let head = doc
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    let style = doc.create_element("style")?;
    style.set_attribute("data-vitrine", "site")?;
    style.set_text_content(Some(site_css()));
    head.append_child(&style)?;
    Ok(())
}

/// Make sure a polite live region with `id` exists in `<body>`.
///
/// # Errors
/// Returns an error if the document body is unavailable or the node cannot be created.
pub fn ensure_live_region(id: &str) -> Result<Element, JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    if let Some(existing) = doc.get_element_by_id(id) {
        return Ok(existing);
    }
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    let region = doc.create_element("div")?;
    region.set_id(id);
    region.set_class_name("sr-only");
    region.set_attribute("aria-live", "polite")?;
    region.set_attribute("aria-atomic", "true")?;
    body.append_child(&region)?;
    Ok(region)
}

/// Announce `message` through a transient status node
///
/// The node is removed after `linger_ms`; removing an already detached node
/// is harmless.
///
/// # Errors
/// Returns an error if the node cannot be inserted or its removal scheduled.
pub fn announce(message: &str, linger_ms: u32) -> Result<(), JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
    let node = doc.create_element("div")?;
    node.set_attribute("role", "status")?;
    node.set_attribute("aria-live", "polite")?;
    node.set_class_name("sr-only");
    node.set_text_content(Some(message));
    body.append_child(&node)?;
    dom::set_timeout(linger_ms, move || node.remove())
}
