#![cfg(target_arch = "wasm32")]
use crate::avatar::{AvatarLoop, AvatarParams};
use crate::constants::*;
use crate::effects::ParticleParams;
use crate::frame::{FrameLoop, LoopSet};
use crate::loading::LoadingParams;
use crate::shader::ShaderLoop;
use crate::three::ThreeScene;
use crate::webgl::WebGlBackend;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod avatar;
mod constants;
mod contact;
mod decor;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod loading;
mod notify;
mod overlay;
mod scroll;
mod shader;
mod three;
mod webgl;

const WELCOME: &str = "\n\
🚀 Welcome to Keshav Jaiswal's Portfolio!\n\
💻 Built with Rust + WebAssembly\n\
✨ Featuring modern animations and responsive design\n\
🎨 Dark theme with neon glow effects\n\n\
Feel free to explore the code and get in touch!\n";

thread_local! {
    // Running render loops; dropping a handle halts its loop.
    static LOOPS: RefCell<LoopSet<FrameLoop>> = RefCell::new(LoopSet::default());
    static AVATAR: RefCell<Option<Rc<RefCell<AvatarLoop<ThreeScene>>>>> = RefCell::new(None);
}

/// Avatar model state: "idle" before the viewer starts, then "loading",
/// "ready" or "failed: <reason>".
#[wasm_bindgen]
pub fn avatar_status() -> String {
    AVATAR.with(|slot| match slot.borrow().as_ref() {
        Some(avatar) => avatar.borrow().status().to_string(),
        None => "idle".to_string(),
    })
}

fn animations_stopped() -> bool {
    LOOPS.with(|loops| loops.borrow().is_closed())
}

fn keep_loop(frame: FrameLoop) {
    if let Err(late) = LOOPS.with(|loops| loops.borrow_mut().admit(frame)) {
        log::info!("animations already stopped; dropping late loop");
        drop(late);
    }
}

/// Halt every running render loop and refuse any started later (page
/// teardown).
#[wasm_bindgen]
pub fn stop_animations() {
    let loops = LOOPS.with(|loops| loops.borrow_mut().close());
    let running = loops.iter().filter(|l| l.is_running()).count();
    log::info!("stopping {} render loop(s)", running);
    drop(loops);
}

fn fit_shader_canvas(canvas: &web::HtmlCanvasElement, shader: &ShaderLoop<WebGlBackend>) {
    if let Some((w, h)) = dom::viewport_size() {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        shader.resize(canvas.width(), canvas.height());
    }
}

fn start_shader(document: &web::Document) {
    if animations_stopped() {
        return;
    }
    let Some(canvas) = dom::canvas_by_id(document, SHADER_CANVAS_ID) else {
        log::info!("[shader] no #{}; background disabled", SHADER_CANVAS_ID);
        return;
    };
    let shader = match WebGlBackend::from_canvas(&canvas).and_then(ShaderLoop::new) {
        Ok(s) => Rc::new(s),
        Err(e) => {
            log::error!("[shader] {}", e);
            return;
        }
    };

    fit_shader_canvas(&canvas, &shader);
    {
        let canvas_resize = canvas.clone();
        let shader_resize = shader.clone();
        dom::add_window_listener("resize", move || {
            fit_shader_canvas(&canvas_resize, &shader_resize);
        });
    }

    let started = Instant::now();
    keep_loop(FrameLoop::start("shader", move |_ts| {
        shader.draw(
            started.elapsed().as_secs_f32(),
            canvas.width(),
            canvas.height(),
        );
    }));
}

fn wire_avatar_pointer(
    canvas: &web::HtmlCanvasElement,
    avatar: &Rc<RefCell<AvatarLoop<ThreeScene>>>,
) {
    let canvas_move = canvas.clone();
    let avatar_move = avatar.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(ndc) = input::pointer_canvas_ndc(&ev, &canvas_move) {
            avatar_move.borrow_mut().set_pointer(ndc);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn start_avatar(document: &web::Document) {
    if animations_stopped() {
        log::info!("[avatar] animations stopped before start; skipping");
        return;
    }
    let Some(canvas) = dom::canvas_by_id(document, AVATAR_CANVAS_ID) else {
        log::info!("[avatar] no #{}; viewer disabled", AVATAR_CANVAS_ID);
        return;
    };
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let scene = match ThreeScene::new(&canvas, dpr) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[avatar] scene init error: {:?}", e);
            return;
        }
    };
    let avatar = Rc::new(RefCell::new(AvatarLoop::new(scene, AvatarParams::default())));
    AVATAR.with(|slot| *slot.borrow_mut() = Some(avatar.clone()));
    three::load_model(AVATAR_MODEL_URL, avatar.clone());
    wire_avatar_pointer(&canvas, &avatar);
    {
        let avatar_resize = avatar.clone();
        dom::add_window_listener("resize", move || {
            if let Some((w, _)) = dom::viewport_size() {
                avatar_resize.borrow_mut().resize(w as f32);
            }
        });
    }

    let mut last: Option<Instant> = None;
    keep_loop(FrameLoop::start("avatar", move |_ts| {
        let now = Instant::now();
        let dt = last.map(|t| (now - t).as_secs_f32()).unwrap_or(0.0);
        last = Some(now);
        avatar.borrow_mut().step(dt, js_sys::Date::now());
    }));
}

fn boot(document: &web::Document) {
    overlay::run(document, LoadingParams::default());
    start_shader(document);
    {
        let doc = document.clone();
        dom::set_timeout(AVATAR_START_DELAY_MS, move || start_avatar(&doc));
    }

    events::wire_mobile_menu(document);
    events::wire_scroll_effects(document);
    if let Err(e) = decor::wire_reveal(document) {
        log::error!("[reveal] observer unavailable: {:?}", e);
    }
    decor::start_typing(document);
    decor::start_particles(document, ParticleParams::default());
    events::wire_button_glow(document);
    notify::wire_contact_form(document);
    decor::show_skill_bars(document);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("{}", WELCOME);

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move || boot(&doc));
    } else {
        boot(&document);
    }
    Ok(())
}
