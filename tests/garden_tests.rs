// Host-side tests for the sand rake, lanterns and page feature selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sand {
    include!("../src/core/sand.rs");
}
mod lanterns {
    include!("../src/core/lanterns.rs");
}
mod site {
    include!("../src/core/site.rs");
}

use glam::Vec2;
use lanterns::*;
use sand::*;
use site::*;

#[test]
fn rake_only_draws_while_pressed() {
    let mut pad = RakePad::new();
    assert_eq!(pad.drag(Vec2::new(5.0, 5.0)), None);
    pad.press(Vec2::new(1.0, 1.0));
    assert!(pad.is_raking());
    pad.release();
    assert_eq!(pad.drag(Vec2::new(2.0, 2.0)), None);
}

#[test]
fn rake_strokes_chain_from_last_sample() {
    let mut pad = RakePad::new();
    pad.press(Vec2::new(10.0, 10.0));
    let a = pad.drag(Vec2::new(20.0, 15.0)).expect("raking");
    let b = pad.drag(Vec2::new(30.0, 12.0)).expect("raking");
    assert_eq!(a.from, Vec2::new(10.0, 10.0));
    assert_eq!(a.to, b.from);
    assert_eq!(b.to, Vec2::new(30.0, 12.0));
}

#[test]
fn new_press_starts_a_fresh_stroke() {
    let mut pad = RakePad::new();
    pad.press(Vec2::ZERO);
    pad.drag(Vec2::new(50.0, 50.0));
    pad.release();
    pad.press(Vec2::new(100.0, 0.0));
    let seg = pad.drag(Vec2::new(101.0, 0.0)).expect("raking");
    assert_eq!(seg.from, Vec2::new(100.0, 0.0));
}

#[test]
fn lanterns_toggle_independently() {
    let mut row = LanternRow::new(3);
    assert_eq!(row.toggle(1), Some(true));
    assert!(row.is_lit(1));
    assert!(!row.is_lit(0) && !row.is_lit(2));
    assert_eq!(row.toggle(1), Some(false));
    assert_eq!(row.toggle(7), None);
    assert!(!row.is_lit(7));
}

#[test]
fn lanterns_lit_in_markup_turn_off_first() {
    let mut row = LanternRow::from_flags(vec![true, false]);
    assert!(row.is_lit(0));
    assert_eq!(row.toggle(0), Some(false));
    assert_eq!(row.toggle(1), Some(true));
    assert_eq!(row.len(), 2);
}

#[test]
fn empty_quotes_are_ignored() {
    assert_eq!(quote_text(Some("Still water.")), Some("Still water."));
    assert_eq!(quote_text(Some("")), None);
    assert_eq!(quote_text(None), None);
}

#[test]
fn site_marker_selects_features() {
    assert_eq!(
        features_for(Some("cosmic")),
        &[Feature::CosmicParallax, Feature::StarmapNav]
    );
    assert_eq!(features_for(Some(" Forest ")), &[Feature::ForestNav]);
    assert!(features_for(Some("zen")).contains(&Feature::Pond));
    assert!(!features_for(Some("zen")).contains(&Feature::StarmapNav));
}

#[test]
fn unknown_or_missing_marker_installs_everything() {
    assert_eq!(features_for(None), ALL_FEATURES);
    assert_eq!(features_for(Some("mystery")), ALL_FEATURES);
    for site in [Site::Cosmic, Site::Enchanted, Site::Zen] {
        assert!(site.features().iter().all(|f| ALL_FEATURES.contains(f)));
    }
}
