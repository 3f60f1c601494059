use crate::constants::STORYBOOK_SCENE_ID;
use crate::core::parallax::{scene_in_view, ParallaxRig, COSMIC_RIG, STORYBOOK_RIG};
use crate::dom::{self, SetupError};
use wasm_bindgen::JsCast;
use web_sys as web;

fn collect_layers(
    document: &web::Document,
    rig: &ParallaxRig,
) -> Result<Vec<Option<web::HtmlElement>>, SetupError> {
    let mut out = Vec::with_capacity(rig.layers.len());
    for layer in rig.layers {
        let el = document
            .get_element_by_id(layer.id)
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());
        if el.is_none() && rig.require_all {
            return Err(SetupError::MissingId(layer.id));
        }
        out.push(el);
    }
    Ok(out)
}

fn apply(rig: &ParallaxRig, layers: &[Option<web::HtmlElement>], scroll_y: f64) {
    for ((_, transform), el) in rig.transforms(scroll_y).into_iter().zip(layers) {
        if let Some(el) = el {
            _ = el.style().set_property("transform", &transform);
        }
    }
}

/// Full-page starfield layers on the cosmic site.
pub fn wire_cosmic_parallax(document: &web::Document) -> Result<(), SetupError> {
    let rig = COSMIC_RIG;
    let layers = collect_layers(document, &rig)?;
    let window = dom::window()?;
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        apply(&rig, &layers, dom::scroll_y());
    });
    log::info!("[parallax] cosmic layers={}", rig.layers.len());
    Ok(())
}

/// Storybook scene layers, only moved while the scene is on screen.
pub fn wire_storybook_parallax(document: &web::Document) -> Result<(), SetupError> {
    let scene = dom::require_id(document, STORYBOOK_SCENE_ID)?;
    let rig = STORYBOOK_RIG;
    let layers = collect_layers(document, &rig)?;
    let found = layers.iter().flatten().count();
    let window = dom::window()?;
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        let rect = scene.get_bounding_client_rect();
        if scene_in_view(rect.top(), rect.bottom(), dom::viewport_height()) {
            apply(&rig, &layers, dom::scroll_y());
        }
    });
    log::info!("[parallax] storybook layers={}", found);
    Ok(())
}
