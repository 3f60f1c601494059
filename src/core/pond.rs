// Reflecting pond: a few koi drifting between the walls and click ripples.

use super::color::Rgba;
use super::constants::*;
use super::surface::Surface;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Koi {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgba,
    pub vel: Vec2,
}

impl Koi {
    pub const fn new(pos: Vec2, size: Vec2, color: Rgba, vel: Vec2) -> Self {
        Self {
            pos,
            size,
            color,
            vel,
        }
    }

    /// Move one frame; each axis reverses independently when the body's
    /// bounding box pokes through a wall.
    pub fn swim(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        let half = self.size * 0.5;
        if self.pos.x - half.x < 0.0 || self.pos.x + half.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - half.y < 0.0 || self.pos.y + half.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }

    /// Tail triangle; which side it hangs off depends only on the sign of
    /// the horizontal velocity.
    pub fn tail(&self) -> [Vec2; 3] {
        let dir = if self.vel.x > 0.0 { -1.0 } else { 1.0 };
        let half_w = self.size.x * 0.5;
        let tip_x = self.pos.x - (half_w + KOI_TAIL_LENGTH) * dir;
        [
            Vec2::new(self.pos.x - half_w * dir, self.pos.y),
            Vec2::new(tip_x, self.pos.y - KOI_TAIL_HALF_HEIGHT),
            Vec2::new(tip_x, self.pos.y + KOI_TAIL_HALF_HEIGHT),
        ]
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_ellipse(self.pos, self.size * 0.5, self.color);
        let [a, b, c] = self.tail();
        surface.fill_triangle(a, b, c, self.color);
    }
}

pub fn default_school() -> Vec<Koi> {
    vec![
        Koi::new(
            Vec2::new(50.0, 50.0),
            Vec2::new(30.0, 12.0),
            Rgba::new(255, 100, 0, 0.7),
            Vec2::new(0.3, 0.1),
        ),
        Koi::new(
            Vec2::new(150.0, 100.0),
            Vec2::new(35.0, 14.0),
            Rgba::new(200, 200, 200, 0.8),
            Vec2::new(-0.2, 0.2),
        ),
        Koi::new(
            Vec2::new(100.0, 180.0),
            Vec2::new(28.0, 11.0),
            Rgba::new(255, 165, 0, 0.75),
            Vec2::new(0.1, -0.25),
        ),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    pub opacity: f32,
    pub line_width: f32,
}

impl Ripple {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
            max_radius: RIPPLE_MAX_RADIUS,
            speed: RIPPLE_SPEED,
            opacity: 1.0,
            line_width: RIPPLE_START_WIDTH,
        }
    }

    pub fn grow(&mut self) {
        self.radius += self.speed;
        self.opacity -= RIPPLE_FADE_PER_FRAME;
        self.line_width -= RIPPLE_THIN_PER_FRAME;
    }

    pub fn is_spent(&self) -> bool {
        self.opacity <= 0.0 || self.line_width <= 0.0
    }

    pub fn color(&self) -> Rgba {
        let [r, g, b] = RIPPLE_RGB;
        Rgba::new(r, g, b, self.opacity)
    }
}

#[derive(Debug)]
pub struct Pond {
    bounds: Vec2,
    background: Rgba,
    koi: Vec<Koi>,
    ripples: Vec<Ripple>,
}

impl Pond {
    pub fn new(width: f32, height: f32, koi: Vec<Koi>) -> Self {
        Self {
            bounds: Vec2::new(width, height),
            background: POND_FALLBACK,
            koi,
            ripples: Vec::new(),
        }
    }

    pub fn koi(&self) -> &[Koi] {
        &self.koi
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Canvas buffer resized; the fish keep swimming where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    pub fn spawn_ripple(&mut self, at: Vec2) {
        self.ripples.push(Ripple::new(at));
    }

    /// Grow every ripple by a frame and drop the spent ones.
    pub fn advance_ripples(&mut self) {
        for r in &mut self.ripples {
            r.grow();
        }
        self.ripples.retain(|r| !r.is_spent());
    }

    /// Clear and paint the background, then each koi (moved before drawn),
    /// then ripples drawn at their current size before advancing. Clearing
    /// first keeps a translucent background from piling up across frames.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear_rect(Vec2::ZERO, self.bounds);
        surface.fill_rect(Vec2::ZERO, self.bounds, self.background);
        for fish in &mut self.koi {
            fish.swim(self.bounds);
            fish.draw(surface);
        }
        for r in &self.ripples {
            surface.stroke_circle(r.origin, r.radius, r.line_width, r.color());
        }
        self.advance_ripples();
    }
}
