// Host-side tests for CSS color handling.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}

use color::Rgba;

#[test]
fn parses_computed_rgb_and_rgba() {
    assert_eq!(
        Rgba::parse_css("rgb(162, 196, 198)"),
        Some(Rgba::opaque(162, 196, 198))
    );
    assert_eq!(
        Rgba::parse_css(" rgba(1,2,3,0.5) "),
        Some(Rgba::new(1, 2, 3, 0.5))
    );
}

#[test]
fn rejects_malformed_values() {
    assert_eq!(Rgba::parse_css(""), None);
    assert_eq!(Rgba::parse_css("#A2C4C6"), None);
    assert_eq!(Rgba::parse_css("rgb(1, 2)"), None);
    assert_eq!(Rgba::parse_css("rgb(300, 0, 0)"), None);
    assert_eq!(Rgba::parse_css("rgba(1, 2, 3, 0.5, 9)"), None);
    assert_eq!(Rgba::parse_css("rgb(1, 2, 3"), None);
}

#[test]
fn alpha_is_clamped() {
    assert_eq!(Rgba::parse_css("rgba(0, 0, 0, 4)").map(|c| c.a), Some(1.0));
}

#[test]
fn empty_or_garbage_background_uses_fallback() {
    let fallback = Rgba::opaque(0xE0, 0xD6, 0xB3);
    assert_eq!(Rgba::background_or("", fallback), fallback);
    assert_eq!(Rgba::background_or("transparent", fallback), fallback);
    assert_eq!(
        Rgba::background_or("rgb(10, 20, 30)", fallback),
        Rgba::opaque(10, 20, 30)
    );
}

#[test]
fn transparent_background_is_kept() {
    let fallback = Rgba::opaque(0xA2, 0xC4, 0xC6);
    assert_eq!(
        Rgba::background_or("rgba(0, 0, 0, 0)", fallback),
        Rgba::new(0, 0, 0, 0.0)
    );
    assert_eq!(
        Rgba::background_or("rgba(162, 196, 198, 0.5)", fallback),
        Rgba::new(162, 196, 198, 0.5)
    );
}

#[test]
fn css_output_matches_canvas_syntax() {
    assert_eq!(Rgba::new(8, 8, 10, 0.1).css(), "rgba(8, 8, 10, 0.1)");
    assert_eq!(Rgba::opaque(0, 240, 255).css(), "rgba(0, 240, 255, 1)");
    assert_eq!(Rgba::opaque(1, 2, 3).with_alpha(0.25).css(), "rgba(1, 2, 3, 0.25)");
}
