use crate::constants::{CLASS_LIT, LANTERN_QUOTE_ATTR, LANTERN_QUOTE_SELECTOR, LANTERN_SELECTOR};
use crate::core::lanterns::quote_text;
use crate::core::LanternRow;
use crate::dom::{self, SetupError};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_lanterns(document: &web::Document) -> Result<(), SetupError> {
    let lanterns = dom::query_all(document, LANTERN_SELECTOR);
    if lanterns.is_empty() {
        return Err(SetupError::MissingSelector(LANTERN_SELECTOR));
    }
    let lit = lanterns
        .iter()
        .map(|l| l.class_list().contains(CLASS_LIT))
        .collect();
    let row = Rc::new(RefCell::new(LanternRow::from_flags(lit)));

    for (i, lantern) in lanterns.iter().enumerate() {
        let attr = lantern.get_attribute(LANTERN_QUOTE_ATTR);
        if let (Some(quote), Ok(Some(slot))) = (
            quote_text(attr.as_deref()),
            lantern.query_selector(LANTERN_QUOTE_SELECTOR),
        ) {
            slot.set_text_content(Some(quote));
        }

        let (row, el) = (row.clone(), lantern.clone());
        dom::add_listener(lantern, "click", move |_: web::MouseEvent| {
            if let Some(lit) = row.borrow_mut().toggle(i) {
                overlay::set_active(&el, CLASS_LIT, lit);
            }
        });
    }
    log::info!("[lanterns] count={}", lanterns.len());
    Ok(())
}
