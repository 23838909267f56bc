use crate::constants::*;
use crate::dom;
use crate::effects::{self, ParticleParams, ParticleSpec, Typewriter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fade cards and timeline items in as they scroll into view.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                dom::set_style(&target, "opacity", "1");
                dom::set_style(&target, "transform", "translateY(0)");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_intersect.forget();

    for el in dom::query_all(document, ".skill-card, .project-card, .timeline-item") {
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", &effects::card_hidden_transform());
        dom::set_style(&el, "transition", "opacity 0.6s ease, transform 0.6s ease");
        observer.observe(&el);
    }
    // Timeline items override the card slide with alternating sides.
    for (i, el) in dom::query_all(document, ".timeline-item").iter().enumerate() {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", &effects::timeline_hidden_transform(i));
        dom::set_style(el, "transition", "opacity 0.8s ease, transform 0.8s ease");
        observer.observe(el);
    }
    Ok(())
}

fn type_next(el: web::Element, writer: Rc<RefCell<Typewriter>>) {
    let Some(c) = writer.borrow_mut().next_char() else {
        return;
    };
    let mut text = el.text_content().unwrap_or_default();
    text.push(c);
    el.set_text_content(Some(&text));
    if writer.borrow().is_done() {
        return;
    }
    dom::set_timeout(TYPING_CHAR_MS, move || type_next(el, writer));
}

/// Clear the hero tagline and type it back in.
pub fn start_typing(document: &web::Document) {
    let Some(tagline) = dom::query_one(document, ".hero-tagline") else {
        return;
    };
    let text = tagline.text_content().unwrap_or_default();
    tagline.set_text_content(Some(""));
    let writer = Rc::new(RefCell::new(Typewriter::new(&text)));
    dom::set_timeout(TYPING_START_DELAY_MS, move || type_next(tagline, writer));
}

fn spawn_particle(document: &web::Document, container: &web::Element, params: &ParticleParams) {
    let spec = ParticleSpec::random(&mut rand::thread_rng(), params);
    let Ok(particle) = document.create_element("div") else {
        return;
    };
    _ = particle.set_attribute("style", &spec.css());
    if container.append_child(&particle).is_err() {
        return;
    }
    dom::set_timeout(PARTICLE_LIFETIME_MS, move || particle.remove());
}

/// Periodically release a floating particle into `.particles`.
pub fn start_particles(document: &web::Document, params: ParticleParams) {
    let Some(container) = dom::query_one(document, ".particles") else {
        return;
    };
    let doc = document.clone();
    if dom::set_interval(PARTICLE_SPAWN_MS, move || spawn_particle(&doc, &container, &params))
        .is_none()
    {
        log::warn!("[particles] could not start spawner");
    }
}

/// Fill each skill bar to its `data-width`.
pub fn show_skill_bars(document: &web::Document) {
    let bars = dom::query_all(document, ".skill-progress");
    log::info!("[skills] found {} skill bars", bars.len());
    for (i, bar) in bars.iter().enumerate() {
        if let Some(width) = bar.get_attribute("data-width") {
            log::debug!("[skills] bar {}: width {}", i, width);
            dom::set_style(bar, "width", &width);
        }
    }
}
