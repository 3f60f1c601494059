#![cfg(target_arch = "wasm32")]
use crate::core::site::{features_for, Feature};
use crate::core::switcher::{FOREST_PATHS, STARMAP};
use crate::dom::SetupError;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod input;
mod overlay;
mod render;
mod widgets;

fn install(document: &web::Document, feature: Feature) -> Result<(), SetupError> {
    match feature {
        Feature::CosmicParallax => widgets::wire_cosmic_parallax(document),
        Feature::StarmapNav => widgets::wire_module_switcher(document, STARMAP),
        Feature::ForestNav => widgets::wire_module_switcher(document, FOREST_PATHS),
        Feature::SandGarden => widgets::wire_sand_garden(document),
        Feature::Pond => widgets::wire_pond(document),
        Feature::Lanterns => widgets::wire_lanterns(document),
        Feature::DataSculpture => widgets::wire_data_sculpture(document),
        Feature::Storybook => {
            widgets::wire_storybook_parallax(document)?;
            widgets::wire_story_popup(document)
        }
        Feature::Plaques => widgets::wire_info_plaques(document),
    }
}

// Each feature guards its own elements; a missing one only skips itself.
fn install_all(document: &web::Document) {
    let site = document
        .body()
        .and_then(|b| b.get_attribute(constants::SITE_ATTR));
    let features = features_for(site.as_deref());
    log::info!("site={:?} features={}", site, features.len());
    for &feature in features {
        if let Err(e) = install(document, feature) {
            log::warn!("{:?} skipped: {}", feature, e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_: web::Event| {
            install_all(&doc);
        });
    } else {
        install_all(&document);
    }
    Ok(())
}
