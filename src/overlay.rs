use crate::dom;
use crate::loading::{LoadingParams, LoadingProgress, LoadingTick};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1("hidden")
    } else {
        cl.remove_1("hidden")
    };
}

#[inline]
fn set_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

fn render_tick(document: &web::Document, tick: LoadingTick) {
    if let Some(fill) = dom::query_one(document, ".progress-fill") {
        dom::set_style(&fill, "width", &format!("{}%", tick.percent));
    }
    if let Some(label) = dom::query_one(document, ".progress-percentage") {
        label.set_text_content(Some(&format!("{}%", tick.label)));
    }
}

/// Hide the loading screen and give the page back to the reader.
pub fn finish(document: &web::Document) {
    if let Some(screen) = dom::query_one(document, ".loading-screen") {
        set_hidden(&screen, true);
    }
    if let Some(nav) = dom::query_one(document, ".navbar") {
        set_hidden(&nav, false);
    }
    set_scroll_locked(document, false);
    log::info!("[loading] complete");
}

/// Run the loading screen: lock scrolling, tick the bar to 100, then
/// `finish` after the grace delay.
pub fn run(document: &web::Document, params: LoadingParams) {
    if let Some(nav) = dom::query_one(document, ".navbar") {
        set_hidden(&nav, true);
    }
    set_scroll_locked(document, true);

    let progress = Rc::new(RefCell::new(LoadingProgress::new(&params)));
    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let doc = document.clone();
    let interval_tick = interval.clone();
    let grace_ms = params.grace_ms;
    let id = dom::set_interval(params.tick_ms, move || {
        let tick = progress.borrow_mut().tick();
        render_tick(&doc, tick);
        if tick.completed {
            if let Some(id) = interval_tick.take() {
                dom::clear_interval(id);
            }
            let doc = doc.clone();
            dom::set_timeout(grace_ms, move || finish(&doc));
        }
    });
    if id.is_none() {
        log::warn!("[loading] could not start progress timer");
        finish(document);
    }
    interval.set(id);
}
