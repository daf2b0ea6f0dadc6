//! Tuning constants for the page effects.
//!
//! Values mirror the behaviour the site has always shipped with; the web
//! frontend reads them directly and `FieldConfig::default()` is built from
//! the motion-field group.

// Ambient motion field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_RADIUS_MIN: f32 = 50.0;
pub const PARTICLE_RADIUS_MAX: f32 = 150.0;
pub const PARTICLE_HUE_MIN: f32 = 180.0; // cyan
pub const PARTICLE_HUE_MAX: f32 = 240.0; // blue
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_MAX: f32 = 0.4;

pub const INFLUENCE_RADIUS: f32 = 200.0; // pointer has no effect beyond this
pub const FORCE_SCALE: f32 = 2.0; // peak impulse per frame at zero distance
pub const FRICTION: f32 = 0.95; // per-frame velocity retention
pub const POINTER_VELOCITY_SCALE: f32 = 0.5;

// Trail fade painted over the surface each frame
pub const FADE_RGB: [u8; 3] = [10, 15, 26];
pub const FADE_ALPHA: f32 = 0.1;

// Glow gradient
pub const GLOW_SATURATION: f32 = 70.0;
pub const GLOW_CORE_LIGHTNESS: f32 = 60.0;
pub const GLOW_MID_LIGHTNESS: f32 = 50.0;
pub const GLOW_MID_HUE_SHIFT: f32 = 20.0;
pub const GLOW_MID_STOP: f32 = 0.5;

// Nominal frame duration the per-frame constants were tuned against
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
// Upper bound on the normalized step so a backgrounded tab does not teleport particles
pub const MAX_FRAME_SCALE: f32 = 4.0;

// Navigation
pub const NAV_SHADOW_SCROLL_Y: f64 = 50.0;
pub const NAV_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.08)";
pub const SECTION_TOP_OFFSET: f64 = 100.0;
pub const BACK_TO_TOP_SCROLL_Y: f64 = 500.0;

// Typewriter
pub const TYPING_INTERVAL_MS: i32 = 30;
pub const TYPING_START_DELAY_MS: i32 = 1000;

// Easter egg
pub const EASTER_EGG_VISIBLE_MS: i32 = 2000;
