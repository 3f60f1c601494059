/// Straight-alpha color as understood by the 2D canvas (`rgba(r, g, b, a)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS string accepted by `fillStyle`/`strokeStyle`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Parse the `rgb(...)`/`rgba(...)` form returned by `getComputedStyle`.
    pub fn parse_css(s: &str) -> Option<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse::<u8>().ok()?;
        let g = parts.next()?.parse::<u8>().ok()?;
        let b = parts.next()?.parse::<u8>().ok()?;
        let a = match parts.next() {
            Some(a) => a.parse::<f32>().ok()?.clamp(0.0, 1.0),
            None => 1.0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b, a })
    }

    /// Computed background, or `fallback` when the value is empty or not an
    /// `rgb`/`rgba` color. Transparent values are kept so the canvas shows
    /// whatever sits behind it.
    pub fn background_or(computed: &str, fallback: Rgba) -> Rgba {
        Self::parse_css(computed).unwrap_or(fallback)
    }
}
