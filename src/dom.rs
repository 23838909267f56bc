use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order. Invalid selectors
/// yield an empty list.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

pub fn add_listener(target: &web::EventTarget, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_window_listener(event: &str, handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        add_listener(&window, event, handler);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    );
    closure.forget();
}

/// Run `f` every `ms` milliseconds. Returns the handle for `clear_interval`.
pub fn set_interval(ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok();
    closure.forget();
    id
}

#[inline]
pub fn clear_interval(id: i32) {
    if let Some(window) = web::window() {
        window.clear_interval_with_handle(id);
    }
}

#[inline]
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}
