//! three.js scene backend for the avatar viewer.
//!
//! The page loads three.js (with `GLTFLoader`) as a classic script, so the
//! bindings target the `THREE` global namespace.

use crate::avatar::{AvatarLoop, AvatarScene, LoadedModel, Pose};
use crate::constants::*;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(js_namespace = THREE)]
extern "C" {
    pub type Object3D;
    #[wasm_bindgen(method, getter)]
    fn position(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    fn rotation(this: &Object3D) -> Euler;
    #[wasm_bindgen(method, getter)]
    fn scale(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method)]
    fn add(this: &Object3D, child: &Object3D);
    #[wasm_bindgen(method, js_name = lookAt)]
    fn look_at(this: &Object3D, x: f32, y: f32, z: f32);

    type Vector3;
    #[wasm_bindgen(method)]
    fn set(this: &Vector3, x: f32, y: f32, z: f32);
    #[wasm_bindgen(method, setter = y)]
    fn set_y(this: &Vector3, y: f32);

    type Euler;
    #[wasm_bindgen(method, setter = x)]
    fn set_x(this: &Euler, x: f32);
    #[wasm_bindgen(method, setter = y)]
    fn set_y(this: &Euler, y: f32);

    #[wasm_bindgen(extends = Object3D)]
    type Scene;
    #[wasm_bindgen(constructor)]
    fn new() -> Scene;

    #[wasm_bindgen(extends = Object3D)]
    type PerspectiveCamera;
    #[wasm_bindgen(constructor)]
    fn new(fov: f32, aspect: f32, near: f32, far: f32) -> PerspectiveCamera;

    #[wasm_bindgen(extends = Object3D)]
    type AmbientLight;
    #[wasm_bindgen(constructor)]
    fn new(color: u32, intensity: f32) -> AmbientLight;

    #[wasm_bindgen(extends = Object3D)]
    type DirectionalLight;
    #[wasm_bindgen(constructor)]
    fn new(color: u32, intensity: f32) -> DirectionalLight;

    #[wasm_bindgen(js_name = WebGLRenderer)]
    type WebGlRenderer;
    #[wasm_bindgen(constructor, catch, js_class = "WebGLRenderer")]
    fn new(params: &js_sys::Object) -> Result<WebGlRenderer, JsValue>;
    #[wasm_bindgen(method, js_class = "WebGLRenderer", js_name = setSize)]
    fn set_size(this: &WebGlRenderer, width: f32, height: f32);
    #[wasm_bindgen(method, js_class = "WebGLRenderer", js_name = setPixelRatio)]
    fn set_pixel_ratio(this: &WebGlRenderer, ratio: f64);
    #[wasm_bindgen(method, js_class = "WebGLRenderer")]
    fn render(this: &WebGlRenderer, scene: &Scene, camera: &PerspectiveCamera);

    #[wasm_bindgen(js_name = GLTFLoader)]
    type GltfLoader;
    #[wasm_bindgen(constructor, js_class = "GLTFLoader")]
    fn new() -> GltfLoader;
    #[wasm_bindgen(method, js_class = "GLTFLoader")]
    fn load(
        this: &GltfLoader,
        url: &str,
        on_load: &js_sys::Function,
        on_progress: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    pub type AnimationMixer;
    #[wasm_bindgen(constructor)]
    fn new(root: &Object3D) -> AnimationMixer;
    #[wasm_bindgen(method, js_name = clipAction)]
    fn clip_action(this: &AnimationMixer, clip: &JsValue) -> AnimationAction;
    #[wasm_bindgen(method)]
    fn update(this: &AnimationMixer, dt: f32);

    type AnimationAction;
    #[wasm_bindgen(method)]
    fn play(this: &AnimationAction) -> AnimationAction;
}

#[wasm_bindgen]
extern "C" {
    /// Result object handed to the `GLTFLoader` load callback.
    type Gltf;
    #[wasm_bindgen(method, getter)]
    fn scene(this: &Gltf) -> Object3D;
    #[wasm_bindgen(method, getter)]
    fn animations(this: &Gltf) -> JsValue;

    type LoadProgress;
    #[wasm_bindgen(method, getter)]
    fn loaded(this: &LoadProgress) -> f64;
    #[wasm_bindgen(method, getter)]
    fn total(this: &LoadProgress) -> f64;
}

fn three_has(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("THREE"))
        .ok()
        .filter(|three| !three.is_undefined())
        .and_then(|three| js_sys::Reflect::has(&three, &JsValue::from_str(name)).ok())
        .unwrap_or(false)
}

pub struct ThreeScene {
    scene: Scene,
    camera: PerspectiveCamera,
    renderer: WebGlRenderer,
}

impl ThreeScene {
    pub fn new(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) -> anyhow::Result<Self> {
        if !three_has("WebGLRenderer") {
            return Err(anyhow!("three.js is not loaded"));
        }
        let scene = Scene::new();
        let camera = PerspectiveCamera::new(CAMERA_FOV_DEG, 1.0, CAMERA_NEAR, CAMERA_FAR);

        let params = js_sys::Object::new();
        for (key, value) in [
            ("canvas", JsValue::from(canvas.clone())),
            ("alpha", JsValue::TRUE),
            ("antialias", JsValue::TRUE),
        ] {
            js_sys::Reflect::set(&params, &JsValue::from_str(key), &value)
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        let renderer = WebGlRenderer::new(&params).map_err(|e| anyhow!("{:?}", e))?;
        renderer.set_pixel_ratio(pixel_ratio);

        scene.add(&AmbientLight::new(AMBIENT_COLOR, AMBIENT_INTENSITY));
        let key = DirectionalLight::new(KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY);
        let [x, y, z] = KEY_LIGHT_POS;
        key.position().set(x, y, z);
        scene.add(&key);
        let accent = DirectionalLight::new(ACCENT_LIGHT_COLOR, ACCENT_LIGHT_INTENSITY);
        let [x, y, z] = ACCENT_LIGHT_POS;
        accent.position().set(x, y, z);
        scene.add(&accent);

        let [x, y, z] = CAMERA_EYE;
        camera.position().set(x, y, z);
        let [x, y, z] = CAMERA_LOOK_AT;
        camera.look_at(x, y, z);

        Ok(Self {
            scene,
            camera,
            renderer,
        })
    }
}

impl AvatarScene for ThreeScene {
    type Model = Object3D;
    type Mixer = AnimationMixer;

    fn add_model(&mut self, model: &Object3D, scale: f32, y: f32) {
        model.scale().set(scale, scale, scale);
        model.position().set(0.0, y, 0.0);
        self.scene.add(model);
    }

    fn apply_pose(&mut self, model: &Object3D, pose: Pose) {
        let rotation = model.rotation();
        rotation.set_y(pose.yaw);
        rotation.set_x(pose.pitch);
        model.position().set_y(pose.y);
    }

    fn advance_mixer(&mut self, mixer: &AnimationMixer, dt_sec: f32) {
        mixer.update(dt_sec);
    }

    fn render(&mut self) {
        self.renderer.render(&self.scene, &self.camera);
    }

    fn set_surface_size(&mut self, size_px: f32) {
        self.renderer.set_size(size_px, size_px);
    }
}

/// Start the asynchronous model download; results land on `avatar`.
pub fn load_model(url: &str, avatar: Rc<RefCell<AvatarLoop<ThreeScene>>>) {
    if !three_has("GLTFLoader") {
        avatar
            .borrow_mut()
            .on_model_failed("THREE.GLTFLoader is not available");
        return;
    }

    let avatar_ok = avatar.clone();
    let on_load = Closure::wrap(Box::new(move |value: JsValue| {
        let gltf: Gltf = value.unchecked_into();
        let model = gltf.scene();
        let mixer = gltf
            .animations()
            .dyn_into::<js_sys::Array>()
            .ok()
            .filter(|clips| clips.length() > 0)
            .map(|clips| {
                let mixer = AnimationMixer::new(&model);
                mixer.clip_action(&clips.get(0)).play();
                mixer
            });
        avatar_ok
            .borrow_mut()
            .on_model_loaded(LoadedModel { model, mixer });
    }) as Box<dyn FnMut(JsValue)>);

    let on_progress = Closure::wrap(Box::new(move |value: JsValue| {
        let progress: LoadProgress = value.unchecked_into();
        if let Some(pct) = crate::avatar::load_percent(progress.loaded(), progress.total()) {
            log::debug!("[avatar] {:.0}% loaded", pct);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let avatar_err = avatar;
    let on_error = Closure::wrap(Box::new(move |err: JsValue| {
        avatar_err.borrow_mut().on_model_failed(format!("{:?}", err));
    }) as Box<dyn FnMut(JsValue)>);

    log::info!("[avatar] loading {}", url);
    GltfLoader::new().load(
        url,
        on_load.as_ref().unchecked_ref(),
        on_progress.as_ref().unchecked_ref(),
        on_error.as_ref().unchecked_ref(),
    );
    on_load.forget();
    on_progress.forget();
    on_error.forget();
}
