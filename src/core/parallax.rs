// Scroll-driven layer offsets.

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub id: &'static str,
    pub speed: f64,
}

/// A set of layers moved together by one scroll listener.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxRig {
    pub layers: &'static [ParallaxLayer],
    /// Every layer must exist for the rig to install. When false, missing
    /// layers are skipped individually.
    pub require_all: bool,
}

pub const COSMIC_RIG: ParallaxRig = ParallaxRig {
    layers: &[
        ParallaxLayer { id: "parallax-layer-far", speed: COSMIC_FAR_SPEED },
        ParallaxLayer { id: "parallax-layer-mid", speed: COSMIC_MID_SPEED },
        ParallaxLayer { id: "parallax-layer-near", speed: COSMIC_NEAR_SPEED },
    ],
    require_all: true,
};

pub const STORYBOOK_RIG: ParallaxRig = ParallaxRig {
    layers: &[
        ParallaxLayer { id: "sb-layer-sky", speed: STORYBOOK_SKY_SPEED },
        ParallaxLayer { id: "sb-layer-far-hills", speed: STORYBOOK_HILLS_SPEED },
        ParallaxLayer { id: "sb-layer-midground", speed: STORYBOOK_MID_SPEED },
        ParallaxLayer { id: "sb-layer-foreground", speed: STORYBOOK_FORE_SPEED },
    ],
    require_all: false,
};

#[inline]
pub fn layer_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

#[inline]
pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// True while any part of a scene spans the viewport vertically.
#[inline]
pub fn scene_in_view(rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height && rect_bottom > 0.0
}

impl ParallaxRig {
    /// `transform` values for every layer at the given scroll position.
    pub fn transforms(&self, scroll_y: f64) -> Vec<(&'static str, String)> {
        self.layers
            .iter()
            .map(|l| (l.id, translate_y(layer_offset(scroll_y, l.speed))))
            .collect()
    }
}
