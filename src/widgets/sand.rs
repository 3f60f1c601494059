use crate::constants::SAND_CANVAS_ID;
use crate::core::constants::{RAKE_COLOR, RAKE_WIDTH, SAND_FALLBACK};
use crate::core::{RakePad, Rgba, Surface};
use crate::dom::{self, SetupError};
use crate::input;
use crate::render::CanvasSurface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn repaint_sand(canvas: &web::HtmlCanvasElement, ctx: &web::CanvasRenderingContext2d) {
    let (w, h) = dom::sync_canvas_to_layout(canvas);
    let bg = Rgba::background_or(&dom::computed_background(canvas), SAND_FALLBACK);
    CanvasSurface::new(ctx).fill_rect(Vec2::ZERO, Vec2::new(w, h), bg);
}

fn rake_to(pad: &RefCell<RakePad>, ctx: &web::CanvasRenderingContext2d, to: Vec2) {
    if let Some(seg) = pad.borrow_mut().drag(to) {
        CanvasSurface::new(ctx).stroke_line(seg.from, seg.to, RAKE_WIDTH, RAKE_COLOR);
    }
}

/// Zen sand garden: drag with mouse or one finger to rake lines.
pub fn wire_sand_garden(document: &web::Document) -> Result<(), SetupError> {
    let (canvas, ctx) = dom::canvas_2d(document, SAND_CANVAS_ID)?;
    repaint_sand(&canvas, &ctx);
    {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        dom::on_window_resize(move || repaint_sand(&canvas, &ctx));
    }

    let pad = Rc::new(RefCell::new(RakePad::new()));

    let p = pad.clone();
    dom::add_listener(&canvas, "mousedown", move |ev: web::MouseEvent| {
        p.borrow_mut().press(input::mouse_offset(&ev));
    });
    let (p, c) = (pad.clone(), ctx.clone());
    dom::add_listener(&canvas, "mousemove", move |ev: web::MouseEvent| {
        rake_to(&p, &c, input::mouse_offset(&ev));
    });
    for event in ["mouseup", "mouseleave"] {
        let p = pad.clone();
        dom::add_listener(&canvas, event, move |_: web::MouseEvent| {
            p.borrow_mut().release();
        });
    }

    let (p, target) = (pad.clone(), canvas.clone());
    dom::add_active_listener(&canvas, "touchstart", move |ev: web::TouchEvent| {
        if let Some(at) = input::single_touch(&ev, &target) {
            ev.prevent_default();
            p.borrow_mut().press(at);
        }
    });
    let (p, c, target) = (pad.clone(), ctx.clone(), canvas.clone());
    dom::add_active_listener(&canvas, "touchmove", move |ev: web::TouchEvent| {
        if !p.borrow().is_raking() {
            return;
        }
        if let Some(at) = input::single_touch(&ev, &target) {
            ev.prevent_default();
            rake_to(&p, &c, at);
        }
    });
    for event in ["touchend", "touchcancel"] {
        let p = pad.clone();
        dom::add_listener(&canvas, event, move |_: web::TouchEvent| {
            p.borrow_mut().release();
        });
    }

    log::info!("[sand] garden ready {}x{}", canvas.width(), canvas.height());
    Ok(())
}
