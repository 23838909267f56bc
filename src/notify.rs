use crate::constants::*;
use crate::contact::{ContactMessage, NotificationKind, NOTIFICATION_STYLE};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Toast in the top-right corner; slides out and is removed after a few
/// seconds.
pub fn show(document: &web::Document, message: &str, kind: NotificationKind) {
    let (Ok(note), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    note.set_class_name(kind.class_name());
    note.set_text_content(Some(message));
    _ = note.set_attribute("style", NOTIFICATION_STYLE);
    if body.append_child(&note).is_err() {
        return;
    }
    dom::set_timeout(NOTIFICATION_VISIBLE_MS, move || {
        dom::set_style(&note, "animation", "slideOut 0.3s ease");
        dom::set_timeout(NOTIFICATION_EXIT_MS, move || note.remove());
    });
}

fn read_message(form: &web::HtmlFormElement) -> anyhow::Result<ContactMessage> {
    let data = web::FormData::new_with_form(form).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactMessage {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    })
}

/// Turn contact form submissions into a pre-filled `mailto:` link.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let form_c = form.clone();
    let on_submit = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let message = match read_message(&form_c) {
            Ok(m) => m,
            Err(e) => {
                log::error!("[contact] could not read form: {:?}", e);
                return;
            }
        };
        let link = message.mailto(CONTACT_RECIPIENT);
        if let Some(window) = web::window() {
            if let Err(e) = window.location().set_href(&link) {
                log::error!("[contact] could not open mail client: {:?}", e);
                return;
            }
        }
        show(
            &doc,
            "Email client opened! Please send your message.",
            NotificationKind::Success,
        );
        form_c.reset();
    }) as Box<dyn FnMut(web::Event)>);
    _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}
