// Host-side tests for popup and plaque visibility state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fade {
    include!("../src/core/fade.rs");
}
mod plaques {
    include!("../src/core/plaques.rs");
}

use fade::{Fade, PanelAction, Popup, Visibility};
use plaques::PlaqueBoard;

#[test]
fn same_plaque_twice_toggles_off() {
    let mut board = PlaqueBoard::new();
    assert_eq!(board.click_plaque(0), PanelAction::Show);
    assert_eq!(board.source(), Some(0));
    assert_eq!(board.click_plaque(0), PanelAction::Hide);
    assert_eq!(board.source(), None);
    assert_eq!(board.visibility(), Visibility::FadingOut);
}

#[test]
fn other_plaque_switches_content() {
    let mut board = PlaqueBoard::new();
    board.click_plaque(0);
    assert_eq!(board.click_plaque(2), PanelAction::Show);
    assert_eq!(board.source(), Some(2));
    assert_eq!(board.visibility(), Visibility::Visible);
}

#[test]
fn plaque_click_during_fade_out_shows_again() {
    let mut board = PlaqueBoard::new();
    board.click_plaque(1);
    board.click_plaque(1);
    assert_eq!(board.click_plaque(1), PanelAction::Show);
    // The pending fade timer must not hide the re-shown panel.
    assert!(!board.settle());
    assert_eq!(board.visibility(), Visibility::Visible);
}

#[test]
fn outside_click_dismisses() {
    let mut board = PlaqueBoard::new();
    board.click_plaque(3);
    assert_eq!(board.click_document(false, false), PanelAction::Hide);
    assert_eq!(board.source(), None);
    assert!(board.settle());
    assert_eq!(board.visibility(), Visibility::Hidden);
}

#[test]
fn clicks_inside_panel_or_on_plaque_do_not_dismiss() {
    let mut board = PlaqueBoard::new();
    board.click_plaque(0);
    assert_eq!(board.click_document(true, false), PanelAction::Nothing);
    assert_eq!(board.click_document(false, true), PanelAction::Nothing);
    assert_eq!(board.source(), Some(0));
}

#[test]
fn outside_click_with_nothing_shown_is_ignored() {
    let mut board = PlaqueBoard::new();
    assert_eq!(board.click_document(false, false), PanelAction::Nothing);
    assert!(!board.settle());
}

#[test]
fn fade_settles_only_after_begin_hide() {
    let mut f = Fade::default();
    assert!(!f.begin_hide());
    f.show();
    assert!(f.is_visible());
    assert!(f.begin_hide());
    assert!(!f.is_visible());
    assert!(f.settle());
    assert!(!f.settle());
}

#[test]
fn popup_toggles_between_shown_and_fading() {
    let mut p = Popup::new(false);
    assert_eq!(p.toggle(), PanelAction::Show);
    assert_eq!(p.visibility(), Visibility::Visible);
    assert_eq!(p.toggle(), PanelAction::Hide);
    assert_eq!(p.visibility(), Visibility::FadingOut);
    assert!(p.settle());
    assert_eq!(p.visibility(), Visibility::Hidden);
}

#[test]
fn popup_initially_visible_hides_first() {
    let mut p = Popup::new(true);
    assert_eq!(p.toggle(), PanelAction::Hide);
}

#[test]
fn popup_click_while_fading_hides_again() {
    let mut p = Popup::new(false);
    p.toggle();
    p.toggle();
    assert_eq!(p.visibility(), Visibility::FadingOut);
    assert_eq!(p.toggle(), PanelAction::Hide);
    assert_eq!(p.visibility(), Visibility::FadingOut);
    // First timer hides it; the second one finds nothing left to do.
    assert!(p.settle());
    assert!(!p.settle());
    assert_eq!(p.visibility(), Visibility::Hidden);
    assert_eq!(p.toggle(), PanelAction::Show);
}
