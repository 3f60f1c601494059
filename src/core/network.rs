// Particle network ("data sculpture") simulation.
//
// A fixed pool of drifting particles that bounce off the canvas edges, get
// nudged away from the pointer, and are joined by fading lines when close.

use super::color::Rgba;
use super::constants::*;
use super::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct NetworkParams {
    pub count: usize,
    pub speed: f32,
    pub pointer_radius: f32,
    pub repulsion_strength: f32,
    pub connection_distance: f32,
    pub trail: Rgba,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            speed: PARTICLE_SPEED,
            pointer_radius: POINTER_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            connection_distance: CONNECTION_DISTANCE,
            trail: TRAIL_FILL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, speed: f32) -> Self {
        let [r, g, b] = PARTICLE_RGB;
        Self {
            pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            vel: Vec2::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * speed,
                (rng.gen::<f32>() * 2.0 - 1.0) * speed,
            ),
            radius: rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN,
            color: Rgba::new(
                r,
                g,
                b,
                rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_ALPHA_MIN,
            ),
        }
    }

    /// Integrate one frame and flip velocity on any axis that left the box.
    /// Position is deliberately not clamped.
    pub fn advance(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        if self.pos.x > bounds.x || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.y || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Displacement pushing `pos` away from `pointer`; zero outside `radius` and
/// when the two coincide.
pub fn repulsion(pos: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = pos - pointer;
    let dist = delta.length();
    if dist >= radius || dist <= 0.0 {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    delta / dist * force * strength
}

/// Opacity of the line between two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
pub fn link_opacity(distance: f32, connection_distance: f32) -> Option<f32> {
    (distance < connection_distance).then(|| 1.0 - (distance / connection_distance) * LINK_FADE)
}

#[derive(Debug)]
pub struct ParticleNetwork {
    params: NetworkParams,
    bounds: Vec2,
    particles: Vec<Particle>,
    pointer: Option<Vec2>,
}

impl ParticleNetwork {
    pub fn new<R: Rng + ?Sized>(params: NetworkParams, width: f32, height: f32, rng: &mut R) -> Self {
        let mut net = Self {
            params,
            bounds: Vec2::new(width, height),
            particles: Vec::with_capacity(params.count),
            pointer: None,
        };
        net.regenerate(rng);
        net
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// New canvas size: the whole pool is thrown away and re-seeded.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.bounds = Vec2::new(width, height);
        self.regenerate(rng);
    }

    fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles.clear();
        for _ in 0..self.params.count {
            self.particles
                .push(Particle::random(rng, self.bounds, self.params.speed));
        }
    }

    /// Pointer impulse, integration and edge reflection for every particle.
    pub fn step(&mut self) {
        let NetworkParams {
            pointer_radius,
            repulsion_strength,
            ..
        } = self.params;
        for p in &mut self.particles {
            if let Some(ptr) = self.pointer {
                p.pos += repulsion(p.pos, ptr, pointer_radius, repulsion_strength);
            }
            p.advance(self.bounds);
        }
    }

    /// Unordered pairs close enough to link, with their line opacity.
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let mut out = Vec::new();
        let n = self.particles.len();
        for a in 0..n {
            for b in (a + 1)..n {
                let d = self.particles[a].pos.distance(self.particles[b].pos);
                if let Some(alpha) = link_opacity(d, self.params.connection_distance) {
                    out.push((a, b, alpha));
                }
            }
        }
        out
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, p.color);
        }
        let [r, g, b] = LINK_RGB;
        for (a, b_idx, alpha) in self.links() {
            surface.stroke_line(
                self.particles[a].pos,
                self.particles[b_idx].pos,
                LINK_WIDTH,
                Rgba::new(r, g, b, alpha),
            );
        }
    }

    /// One animation frame: trail overlay instead of a clear, then update and
    /// redraw.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(Vec2::ZERO, self.bounds, self.params.trail);
        self.step();
        self.draw(surface);
    }
}
