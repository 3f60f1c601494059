use crate::constants::{CLASS_ACTIVE, CLASS_HIDDEN};
use crate::core::switcher::{target_from_href, Selection};
use crate::core::{ModuleSwitcher, SwitcherPreset};
use crate::dom::{self, SetupError};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct NavElements {
    links: Vec<web::Element>,
    modules: Vec<web::Element>,
    animate: bool,
}

impl NavElements {
    fn apply(&self, sel: Selection) {
        for module in &self.modules {
            overlay::hide(module, self.animate);
        }
        if let Some(m) = sel.module.and_then(|i| self.modules.get(i)) {
            if self.animate {
                overlay::show(m);
            } else {
                _ = m.class_list().remove_1(CLASS_HIDDEN);
            }
        }
        for (i, link) in self.links.iter().enumerate() {
            overlay::set_active(link, CLASS_ACTIVE, Some(i) == sel.link);
        }
    }
}

/// Wire a tab-style navigation bar: each link shows exactly one module.
pub fn wire_module_switcher(
    document: &web::Document,
    preset: SwitcherPreset,
) -> Result<(), SetupError> {
    let links = dom::query_all(document, preset.link_selector);
    let mut modules = dom::query_all(document, preset.module_selector);
    if links.is_empty() {
        return Err(SetupError::MissingSelector(preset.link_selector));
    }
    if modules.is_empty() {
        return Err(SetupError::MissingSelector(preset.module_selector));
    }
    // The welcome module may sit outside the module class; it still takes
    // part in the exclusive visibility.
    if let Some(welcome) = document.get_element_by_id(preset.welcome_id) {
        if !modules.iter().any(|m| m.id() == welcome.id()) {
            modules.push(welcome);
        }
    }

    let targets: Vec<String> = links
        .iter()
        .map(|l| target_from_href(&l.get_attribute("href").unwrap_or_default()).to_string())
        .collect();
    let module_ids: Vec<String> = modules.iter().map(|m| m.id()).collect();

    let mut switcher = ModuleSwitcher::new(module_ids, targets, preset.welcome_id);
    let initial = switcher.initial();
    let elements = Rc::new(NavElements {
        links: links.clone(),
        modules,
        animate: preset.animate,
    });
    elements.apply(initial);

    let switcher = Rc::new(RefCell::new(switcher));
    for (i, link) in links.iter().enumerate() {
        let switcher = switcher.clone();
        let elements = elements.clone();
        let name = preset.name;
        dom::add_listener(link, "click", move |ev: web::Event| {
            ev.prevent_default();
            let mut sw = switcher.borrow_mut();
            let sel = sw.select(i);
            if sel.module.is_none() {
                log::warn!(
                    "[{}] link target #{} not found",
                    name,
                    sw.link_target(i).unwrap_or_default()
                );
            }
            drop(sw);
            elements.apply(sel);
        });
    }
    log::info!(
        "[{}] links={} modules={} initial={:?}",
        preset.name,
        links.len(),
        elements.modules.len(),
        initial.module
    );
    Ok(())
}
