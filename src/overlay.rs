use crate::constants::{CLASS_HIDDEN, CLASS_VISIBLE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Read layout so a transition starts from the `display:none` state.
#[inline]
pub fn force_reflow(el: &web::Element) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.offset_width();
    }
}

/// Remove `hidden`, then add `visible` after a reflow so the fade-in runs.
#[inline]
pub fn show(el: &web::Element) {
    let cl = el.class_list();
    _ = cl.remove_1(CLASS_HIDDEN);
    force_reflow(el);
    _ = cl.add_1(CLASS_VISIBLE);
}

/// Instantly take the element out of layout.
#[inline]
pub fn hide(el: &web::Element, animated: bool) {
    let cl = el.class_list();
    if animated {
        _ = cl.remove_1(CLASS_VISIBLE);
    }
    _ = cl.add_1(CLASS_HIDDEN);
}

/// First half of a fade-out: drop `visible` and let the CSS transition run.
/// The caller adds `hidden` once its fade timer settles.
#[inline]
pub fn begin_fade_out(el: &web::Element) {
    _ = el.class_list().remove_1(CLASS_VISIBLE);
}

#[inline]
pub fn finish_fade_out(el: &web::Element) {
    if !el.class_list().contains(CLASS_VISIBLE) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
    }
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains(CLASS_HIDDEN)
}

#[inline]
pub fn set_active(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
