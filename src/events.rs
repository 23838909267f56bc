use crate::constants::NAV_SECTION_OFFSET_PX;
use crate::dom;
use crate::effects;
use crate::scroll;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hamburger toggles the mobile menu; following any nav link closes it.
pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        dom::query_one(document, ".hamburger"),
        dom::query_one(document, ".nav-menu"),
    ) else {
        return;
    };
    {
        let hamburger_c = hamburger.clone();
        let menu_c = menu.clone();
        dom::add_listener(&hamburger, "click", move || {
            _ = hamburger_c.class_list().toggle("active");
            _ = menu_c.class_list().toggle("active");
        });
    }
    for link in dom::query_all(document, ".nav-link") {
        let hamburger_c = hamburger.clone();
        let menu_c = menu.clone();
        dom::add_listener(&link, "click", move || {
            _ = hamburger_c.class_list().remove_1("active");
            _ = menu_c.class_list().remove_1("active");
        });
    }
}

fn update_active_nav(sections: &[web::HtmlElement], links: &[web::Element], scroll_y: f64) {
    let ids: Vec<String> = sections.iter().map(|s| s.id()).collect();
    let bounds: Vec<(&str, f64)> = ids
        .iter()
        .zip(sections)
        .map(|(id, s)| (id.as_str(), s.offset_top() as f64))
        .collect();
    let current = scroll::active_section(scroll_y, &bounds, NAV_SECTION_OFFSET_PX);
    for link in links {
        let on = match (current, link.get_attribute("href")) {
            (Some(id), Some(href)) => scroll::link_targets(&href, id),
            _ => false,
        };
        _ = link.class_list().toggle_with_force("active", on);
    }
}

fn update_gradient(document: &web::Document, window: &web::Window, overlay: &web::Element) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let scroll_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let inner_height = dom::viewport_size().map(|(_, h)| h).unwrap_or(0.0);
    let hue = scroll::gradient_hue(scroll::scroll_fraction(scroll_y, scroll_height, inner_height));
    dom::set_style(overlay, "background", &scroll::gradient_css(hue));
}

/// Scroll-driven nav highlight, hero parallax and background tint.
pub fn wire_scroll_effects(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let sections: Vec<web::HtmlElement> = dom::query_all(document, "section")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let links = dom::query_all(document, ".nav-link");
    let hero_content = dom::query_one(document, ".hero-content");
    let overlay = dom::query_one(document, ".gradient-overlay");

    update_active_nav(&sections, &links, window.scroll_y().unwrap_or(0.0));

    let doc = document.clone();
    let win = window.clone();
    dom::add_window_listener("scroll", move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        update_active_nav(&sections, &links, scroll_y);
        if let Some(hero) = &hero_content {
            dom::set_style(hero, "transform", &scroll::parallax_transform(scroll_y));
        }
        if let Some(overlay) = &overlay {
            update_gradient(&doc, &win, overlay);
        }
    });
}

/// Brighten call-to-action buttons while hovered.
pub fn wire_button_glow(document: &web::Document) {
    for button in dom::query_all(
        document,
        ".btn-primary, .btn-secondary, .contact-btn, .project-btn",
    ) {
        let enter = button.clone();
        dom::add_listener(&button, "mouseenter", move || {
            dom::set_style(&enter, "filter", &effects::glow_filter(true));
        });
        let leave = button.clone();
        dom::add_listener(&button, "mouseleave", move || {
            dom::set_style(&leave, "filter", &effects::glow_filter(false));
        });
    }
}
