// Recording surface shared by the host-side drawing tests.

use crate::color::Rgba;
use crate::surface::Surface;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear { origin: Vec2, size: Vec2 },
    Rect { origin: Vec2, size: Vec2, color: Rgba },
    Disc { center: Vec2, radius: f32, color: Rgba },
    Ellipse { center: Vec2, radii: Vec2, color: Rgba },
    Triangle { points: [Vec2; 3], color: Rgba },
    Ring { center: Vec2, radius: f32, width: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Draw>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::Line { .. }))
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Draw) -> bool) -> usize {
        self.calls.iter().filter(|d| pred(d)).count()
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.calls.push(Draw::Clear { origin, size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.calls.push(Draw::Rect { origin, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Draw::Disc { center, radius, color });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) {
        self.calls.push(Draw::Ellipse { center, radii, color });
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.calls.push(Draw::Triangle {
            points: [a, b, c],
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.calls.push(Draw::Ring {
            center,
            radius,
            width,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Draw::Line {
            from,
            to,
            width,
            color,
        });
    }
}
