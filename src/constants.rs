/// Page tuning constants.
///
/// These constants express intended behavior (sizes, time constants, clamp
/// limits) and keep magic numbers out of the code.

// Avatar viewport
pub const AVATAR_CANVAS_ID: &str = "avatar-canvas";
pub const AVATAR_MODEL_URL: &str = "https://models.readyplayer.me/68ea0e8ff58581014aaa1600.glb";
pub const AVATAR_SIZE_PX: f32 = 250.0; // square surface edge
pub const AVATAR_VIEWPORT_FRACTION: f32 = 0.4; // share of window width on resize
pub const AVATAR_START_DELAY_MS: i32 = 2500; // wait for the loading screen

// Avatar camera (perspective, fixed aspect 1)
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.5, 1.5];
pub const CAMERA_LOOK_AT: [f32; 3] = [0.0, 0.3, 0.0];

// Avatar lights
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 1.2;
pub const KEY_LIGHT_COLOR: u32 = 0xffffff;
pub const KEY_LIGHT_INTENSITY: f32 = 1.5;
pub const KEY_LIGHT_POS: [f32; 3] = [1.0, 1.0, 1.0];
pub const ACCENT_LIGHT_COLOR: u32 = 0x00f5ff; // cyan rim
pub const ACCENT_LIGHT_INTENSITY: f32 = 0.5;
pub const ACCENT_LIGHT_POS: [f32; 3] = [-1.0, 0.0, -1.0];

// Avatar model placement (crops to upper body)
pub const MODEL_SCALE: f32 = 1.2;
pub const MODEL_BASE_Y: f32 = -0.8;

// Avatar motion
pub const ORIENTATION_SMOOTHING: f32 = 0.05; // fraction of remaining error per frame
pub const YAW_SENSITIVITY: f32 = 0.3;
pub const PITCH_SENSITIVITY: f32 = 0.1;
pub const BOB_FREQUENCY_PER_MS: f64 = 0.001;
pub const BOB_AMPLITUDE: f32 = 0.02;

// Background shader
pub const SHADER_CANVAS_ID: &str = "shader-canvas";

// Loading screen
pub const LOADING_DURATION_MS: f32 = 2000.0;
pub const LOADING_TICK_MS: i32 = 30;
pub const LOADING_GRACE_MS: i32 = 300;

// Scroll effects
pub const NAV_SECTION_OFFSET_PX: f64 = 200.0;
pub const PARALLAX_RATE: f64 = -0.5;
pub const GRADIENT_BASE_HUE: f64 = 180.0;
pub const GRADIENT_HUE_SPAN: f64 = 60.0;

// Reveal animations
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const CARD_REVEAL_OFFSET_PX: f32 = 30.0;
pub const TIMELINE_REVEAL_OFFSET_PX: f32 = 50.0;

// Typing effect
pub const TYPING_START_DELAY_MS: i32 = 1000;
pub const TYPING_CHAR_MS: i32 = 80;

// Particles
pub const PARTICLE_SPAWN_MS: i32 = 2000;
pub const PARTICLE_LIFETIME_MS: i32 = 20_000;
pub const PARTICLE_SIZE_MIN_PX: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN_PX: f32 = 4.0;
pub const PARTICLE_HUE_MIN: f32 = 180.0;
pub const PARTICLE_HUE_SPAN: f32 = 60.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
pub const PARTICLE_FLOAT_MIN_S: f32 = 10.0;
pub const PARTICLE_FLOAT_SPAN_S: f32 = 10.0;

// Buttons
pub const GLOW_BRIGHTNESS: f32 = 1.2;

// Contact + notifications
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_RECIPIENT: &str = "keshavjais1605@gmail.com";
pub const NOTIFICATION_VISIBLE_MS: i32 = 3000;
pub const NOTIFICATION_EXIT_MS: i32 = 300;
