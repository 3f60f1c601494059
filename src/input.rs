use glam::Vec2;
use web_sys as web;

// ---------------- Pointer normalisation ----------------

/// Mouse position relative to the event target's padding edge.
#[inline]
pub fn mouse_offset(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.offset_x() as f32, ev.offset_y() as f32)
}

/// Mouse position relative to the element's bounding rect.
#[inline]
pub fn mouse_in_rect(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Position of the only finger on `el`; `None` for zero or several touches.
#[inline]
pub fn single_touch(ev: &web::TouchEvent, el: &web::Element) -> Option<Vec2> {
    let touches = ev.target_touches();
    if touches.length() != 1 {
        return None;
    }
    let touch = touches.get(0)?;
    let rect = el.get_bounding_client_rect();
    Some(Vec2::new(
        touch.client_x() as f32 - rect.left() as f32,
        touch.client_y() as f32 - rect.top() as f32,
    ))
}
