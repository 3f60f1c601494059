use super::color::Rgba;
use glam::Vec2;

/// Minimal drawing vocabulary the animations need from a 2D canvas.
///
/// The browser build implements this over `CanvasRenderingContext2d`; host
/// tests implement it with a recorder so frames can be inspected.
pub trait Surface {
    /// Reset a region to transparent black.
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
