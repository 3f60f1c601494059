// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod color {
    include!("../src/core/color.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tuning_is_sane() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPEED > 0.0);
    assert!(PARTICLE_RADIUS_MIN > 0.0);
    // Alpha range stays inside [0, 1]
    assert!(PARTICLE_ALPHA_MIN > 0.0);
    assert!(PARTICLE_ALPHA_MIN + PARTICLE_ALPHA_SPAN <= 1.0);
    // Links never reach full transparency inside the connection radius
    assert!(LINK_FADE > 0.0 && LINK_FADE < 1.0);
    assert!(CONNECTION_DISTANCE > 0.0 && POINTER_RADIUS > 0.0);
    assert!(TRAIL_FILL.a > 0.0 && TRAIL_FILL.a < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripples_fade_before_they_thin_out() {
    let fade_frames = 1.0 / RIPPLE_FADE_PER_FRAME;
    let thin_frames = RIPPLE_START_WIDTH / RIPPLE_THIN_PER_FRAME;
    assert!(fade_frames < thin_frames);
    assert!(RIPPLE_SPEED > 0.0 && RIPPLE_MAX_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn parallax_layers_speed_up_towards_the_viewer() {
    assert!(COSMIC_FAR_SPEED < COSMIC_MID_SPEED);
    assert!(COSMIC_MID_SPEED < COSMIC_NEAR_SPEED);
    assert!(STORYBOOK_SKY_SPEED < STORYBOOK_HILLS_SPEED);
    assert!(STORYBOOK_HILLS_SPEED < STORYBOOK_MID_SPEED);
    assert!(STORYBOOK_MID_SPEED < STORYBOOK_FORE_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_and_caps_are_positive() {
    assert!(SNIPPET_CAP > 0);
    assert!(SNIPPET_LIFETIME_MS > 0);
    assert!(FADE_OUT_MS > 0);
    assert!(!PLACEHOLDER_SNIPPETS.is_empty());
    assert!(PLACEHOLDER_SNIPPETS.iter().all(|s| !s.is_empty()));
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        SAND_CANVAS_ID,
        POND_CANVAS_ID,
        SCULPTURE_CANVAS_ID,
        SNIPPETS_OVERLAY_ID,
        STORYBOOK_SCENE_ID,
        STORYBOOK_CHARACTER_ID,
        STORYBOOK_POPUP_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.starts_with('#'), "{a} should be a bare id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
