use super::color::Rgba;

// Shared tuning constants for the page animations and widgets.

// Particle network ("data sculpture")
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPEED: f32 = 0.5; // max |v| per axis, px/frame
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.3;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;
pub const PARTICLE_RGB: [u8; 3] = [0, 240, 255];
pub const POINTER_RADIUS: f32 = 100.0;
pub const REPULSION_STRENGTH: f32 = 2.0;
pub const CONNECTION_DISTANCE: f32 = 80.0;
pub const LINK_FADE: f32 = 0.8; // opacity lost between d = 0 and d = R_conn
pub const LINK_WIDTH: f32 = 0.5;
pub const LINK_RGB: [u8; 3] = [240, 0, 255];
pub const TRAIL_FILL: Rgba = Rgba::new(8, 8, 10, 0.1);

// Data snippets
pub const SNIPPET_CAP: usize = 5;
pub const SNIPPET_LIFETIME_MS: i32 = 5000;
pub const PLACEHOLDER_SNIPPETS: [&str; 8] = [
    "Flux::Pattern.match(0xDEADBEEF)",
    "Signal_Integrity: 78.3%",
    "Resonance_Freq: 1.21GHz",
    "[ERR_SUBSPACE_INTERFERENCE]",
    "Data_Stream_Active",
    "Quantum_Entanglement_Verified",
    "Sector 7G: Anomaly Persists",
    "Energy_Spike_Detected: Type Gamma",
];

// Pond
pub const POND_FALLBACK: Rgba = Rgba::opaque(0xA2, 0xC4, 0xC6);
pub const KOI_TAIL_LENGTH: f32 = 10.0;
pub const KOI_TAIL_HALF_HEIGHT: f32 = 6.0;
pub const RIPPLE_MAX_RADIUS: f32 = 50.0;
pub const RIPPLE_SPEED: f32 = 1.0;
pub const RIPPLE_START_WIDTH: f32 = 2.0;
pub const RIPPLE_FADE_PER_FRAME: f32 = 0.02;
pub const RIPPLE_THIN_PER_FRAME: f32 = 0.03;
pub const RIPPLE_RGB: [u8; 3] = [255, 255, 255];

// Sand garden rake
pub const SAND_FALLBACK: Rgba = Rgba::opaque(0xE0, 0xD6, 0xB3);
pub const RAKE_COLOR: Rgba = Rgba::new(0, 0, 0, 0.1);
pub const RAKE_WIDTH: f32 = 3.0;

// Overlays
pub const FADE_OUT_MS: i32 = 300; // matches the CSS transition

// Parallax speed factors (smaller = further away)
pub const COSMIC_FAR_SPEED: f64 = 0.1;
pub const COSMIC_MID_SPEED: f64 = 0.3;
pub const COSMIC_NEAR_SPEED: f64 = 0.5;
pub const STORYBOOK_SKY_SPEED: f64 = 0.05;
pub const STORYBOOK_HILLS_SPEED: f64 = 0.15;
pub const STORYBOOK_MID_SPEED: f64 = 0.3;
pub const STORYBOOK_FORE_SPEED: f64 = 0.5;
