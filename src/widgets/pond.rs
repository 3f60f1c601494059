use crate::constants::POND_CANVAS_ID;
use crate::core::constants::POND_FALLBACK;
use crate::core::pond::default_school;
use crate::core::{Pond, Rgba};
use crate::dom::{self, SetupError};
use crate::frame;
use crate::input;
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn fit_pond(canvas: &web::HtmlCanvasElement, pond: &RefCell<Pond>) {
    let (w, h) = dom::sync_canvas_to_layout(canvas);
    pond.borrow_mut().resize(w, h);
}

/// Reflecting pond: koi animation plus a ripple per click or tap.
pub fn wire_pond(document: &web::Document) -> Result<(), SetupError> {
    let (canvas, ctx) = dom::canvas_2d(document, POND_CANVAS_ID)?;
    let pond = Rc::new(RefCell::new(Pond::new(0.0, 0.0, default_school())));
    fit_pond(&canvas, &pond);
    {
        let (canvas, pond) = (canvas.clone(), pond.clone());
        dom::on_window_resize(move || fit_pond(&canvas, &pond));
    }

    let p = pond.clone();
    dom::add_listener(&canvas, "click", move |ev: web::MouseEvent| {
        p.borrow_mut().spawn_ripple(input::mouse_offset(&ev));
    });
    let (p, target) = (pond.clone(), canvas.clone());
    dom::add_active_listener(&canvas, "touchstart", move |ev: web::TouchEvent| {
        if let Some(at) = input::single_touch(&ev, &target) {
            ev.prevent_default();
            p.borrow_mut().spawn_ripple(at);
        }
    });

    log::info!("[pond] koi={}", pond.borrow().koi().len());
    // Background follows the live computed style.
    frame::start_loop(move || {
        let bg = Rgba::background_or(&dom::computed_background(&canvas), POND_FALLBACK);
        let mut pond = pond.borrow_mut();
        pond.set_background(bg);
        pond.frame(&mut CanvasSurface::new(&ctx));
    });
    Ok(())
}
