use glam::Vec2;

/// A single rake stroke from the previous pointer sample to the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Pointer tracking for the sand garden: segments are produced only while
/// the rake is pressed.
#[derive(Debug, Default)]
pub struct RakePad {
    raking: bool,
    last: Vec2,
}

impl RakePad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raking(&self) -> bool {
        self.raking
    }

    pub fn press(&mut self, at: Vec2) {
        self.raking = true;
        self.last = at;
    }

    pub fn drag(&mut self, to: Vec2) -> Option<Segment> {
        if !self.raking {
            return None;
        }
        let seg = Segment {
            from: self.last,
            to,
        };
        self.last = to;
        Some(seg)
    }

    pub fn release(&mut self) {
        self.raking = false;
    }
}
