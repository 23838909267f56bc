// Avatar viewer state: pointer-driven orientation, idle bob, model lifecycle.
//
// The scene graph itself is reached through `AvatarScene`, so the frame
// logic here never touches the browser. The wasm build plugs in the three.js
// backend from `three.rs`; tests plug in a recording mock.

use crate::constants::*;
use glam::Vec2;

/// Tuning for one avatar viewer.
#[derive(Clone, Debug)]
pub struct AvatarParams {
    pub size_px: f32,
    pub viewport_fraction: f32,
    pub smoothing: f32,
    pub yaw_sensitivity: f32,
    pub pitch_sensitivity: f32,
    pub model_scale: f32,
    pub base_y: f32,
    pub bob_amplitude: f32,
    pub bob_frequency_per_ms: f64,
}

impl Default for AvatarParams {
    fn default() -> Self {
        Self {
            size_px: AVATAR_SIZE_PX,
            viewport_fraction: AVATAR_VIEWPORT_FRACTION,
            smoothing: ORIENTATION_SMOOTHING,
            yaw_sensitivity: YAW_SENSITIVITY,
            pitch_sensitivity: PITCH_SENSITIVITY,
            model_scale: MODEL_SCALE,
            base_y: MODEL_BASE_Y,
            bob_amplitude: BOB_AMPLITUDE,
            bob_frequency_per_ms: BOB_FREQUENCY_PER_MS,
        }
    }
}

/// Model transform written to the scene each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Rotation about the vertical axis (radians).
    pub yaw: f32,
    /// Rotation about the horizontal axis (radians).
    pub pitch: f32,
    /// Vertical position including the idle bob.
    pub y: f32,
}

/// Outcome of the asynchronous model load.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelStatus {
    Loading,
    Ready { animated: bool },
    Failed(String),
}

impl std::fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelStatus::Loading => f.write_str("loading"),
            ModelStatus::Ready { animated: true } => f.write_str("ready (animated)"),
            ModelStatus::Ready { animated: false } => f.write_str("ready"),
            ModelStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// A resolved model and, when the asset carries clips, the mixer playing the
/// first one.
pub struct LoadedModel<M, X> {
    pub model: M,
    pub mixer: Option<X>,
}

/// Scene-graph operations the avatar loop needs from its renderer.
pub trait AvatarScene {
    type Model;
    type Mixer;

    /// Attach a freshly loaded model at its resting transform.
    fn add_model(&mut self, model: &Self::Model, scale: f32, y: f32);
    fn apply_pose(&mut self, model: &Self::Model, pose: Pose);
    fn advance_mixer(&mut self, mixer: &Self::Mixer, dt_sec: f32);
    fn render(&mut self);
    /// Resize the square drawing surface (CSS pixels).
    fn set_surface_size(&mut self, size_px: f32);
}

/// Fixed-fraction step toward `target`; no overshoot handling.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Idle "breathing" height. Driven by the wall clock, not accumulated frame
/// time, so the phase jumps after the tab is suspended.
#[inline]
pub fn bob_height(base_y: f32, wall_ms: f64, amplitude: f32, frequency_per_ms: f64) -> f32 {
    base_y + (wall_ms * frequency_per_ms).sin() as f32 * amplitude
}

/// Square surface edge for a viewport of `viewport_width` CSS pixels.
#[inline]
pub fn surface_size(viewport_width: f32, max_px: f32, fraction: f32) -> f32 {
    max_px.min(viewport_width * fraction)
}

/// Percentage reported by a model download progress event.
#[inline]
pub fn load_percent(loaded: f64, total: f64) -> Option<f64> {
    (total > 0.0).then(|| loaded / total * 100.0)
}

pub struct AvatarLoop<S: AvatarScene> {
    scene: S,
    params: AvatarParams,
    target: Vec2,
    orientation: Vec2,
    model: Option<LoadedModel<S::Model, S::Mixer>>,
    status: ModelStatus,
}

impl<S: AvatarScene> AvatarLoop<S> {
    pub fn new(mut scene: S, params: AvatarParams) -> Self {
        scene.set_surface_size(params.size_px);
        Self {
            scene,
            params,
            target: Vec2::ZERO,
            orientation: Vec2::ZERO,
            model: None,
            status: ModelStatus::Loading,
        }
    }

    #[cfg(test)]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn status(&self) -> &ModelStatus {
        &self.status
    }

    /// Target `(yaw, pitch)` as last set by the pointer.
    #[cfg(test)]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Current smoothed `(yaw, pitch)`.
    #[cfg(test)]
    pub fn orientation(&self) -> Vec2 {
        self.orientation
    }

    /// Record the pointer position (normalized device coordinates). Last
    /// write wins; smoothing happens in [`step`](Self::step).
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.target = crate::input::orientation_target(
            ndc,
            self.params.yaw_sensitivity,
            self.params.pitch_sensitivity,
        );
    }

    pub fn on_model_loaded(&mut self, loaded: LoadedModel<S::Model, S::Mixer>) {
        if self.model.is_some() {
            log::warn!("[avatar] model already attached; ignoring second load");
            return;
        }
        self.scene
            .add_model(&loaded.model, self.params.model_scale, self.params.base_y);
        let animated = loaded.mixer.is_some();
        log::info!("[avatar] model ready (animated={})", animated);
        self.model = Some(loaded);
        self.status = ModelStatus::Ready { animated };
    }

    pub fn on_model_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("[avatar] error loading avatar: {}", reason);
        if self.model.is_none() {
            self.status = ModelStatus::Failed(reason);
        }
    }

    /// Advance one frame. Returns the pose applied to the model, or `None`
    /// while no model is attached (the empty scene is still rendered).
    pub fn step(&mut self, dt_sec: f32, wall_ms: f64) -> Option<Pose> {
        let mut applied = None;
        if let Some(loaded) = self.model.as_ref() {
            let k = self.params.smoothing;
            self.orientation.x = smooth_toward(self.orientation.x, self.target.x, k);
            self.orientation.y = smooth_toward(self.orientation.y, self.target.y, k);
            let pose = Pose {
                yaw: self.orientation.x,
                pitch: self.orientation.y,
                y: bob_height(
                    self.params.base_y,
                    wall_ms,
                    self.params.bob_amplitude,
                    self.params.bob_frequency_per_ms,
                ),
            };
            self.scene.apply_pose(&loaded.model, pose);
            if let Some(mixer) = loaded.mixer.as_ref() {
                self.scene.advance_mixer(mixer, dt_sec);
            }
            applied = Some(pose);
        }
        self.scene.render();
        applied
    }

    /// Resize for a new viewport width; the camera aspect stays at 1.
    pub fn resize(&mut self, viewport_width: f32) -> f32 {
        let size = surface_size(
            viewport_width,
            self.params.size_px,
            self.params.viewport_fraction,
        );
        self.scene.set_surface_size(size);
        size
    }
}
