use crate::core::{Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` over a browser 2D context. Styles are set per call because
/// resizing a canvas resets its context state.
pub struct CanvasSurface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.line_to(c.x as f64, c.y as f64);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
