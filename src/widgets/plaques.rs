use crate::constants::{PLAQUE_DETAILS_SELECTOR, PLAQUE_INFO_ATTR, PLAQUE_SELECTOR};
use crate::core::constants::FADE_OUT_MS;
use crate::core::{PanelAction, PlaqueBoard};
use crate::dom::{self, SetupError};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn fade_out_details(board: &Rc<RefCell<PlaqueBoard>>, details: &web::Element) {
    overlay::begin_fade_out(details);
    let (board, details) = (board.clone(), details.clone());
    dom::set_timeout(FADE_OUT_MS, move || {
        if board.borrow_mut().settle() {
            overlay::finish_fade_out(&details);
        }
    });
}

/// Horology engine plaques sharing one details panel.
pub fn wire_info_plaques(document: &web::Document) -> Result<(), SetupError> {
    let plaques = dom::query_all(document, PLAQUE_SELECTOR);
    if plaques.is_empty() {
        return Err(SetupError::MissingSelector(PLAQUE_SELECTOR));
    }
    let details = dom::require_selector(document, PLAQUE_DETAILS_SELECTOR)?;
    let board = Rc::new(RefCell::new(PlaqueBoard::new()));

    for (i, plaque) in plaques.iter().enumerate() {
        let (board, details, source) = (board.clone(), details.clone(), plaque.clone());
        dom::add_listener(plaque, "click", move |ev: web::MouseEvent| {
            // Keep the document handler from treating this as an outside click.
            ev.stop_propagation();
            let action = board.borrow_mut().click_plaque(i);
            match action {
                PanelAction::Show => {
                    let info = source.get_attribute(PLAQUE_INFO_ATTR);
                    details.set_text_content(info.as_deref());
                    overlay::show(&details);
                }
                PanelAction::Hide => fade_out_details(&board, &details),
                PanelAction::Nothing => {}
            }
        });
    }

    let plaque_count = plaques.len();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        let inside_panel = dom::event_within(&ev, &details);
        let on_plaque = plaques.iter().any(|p| dom::event_within(&ev, p));
        let action = board.borrow_mut().click_document(inside_panel, on_plaque);
        if action == PanelAction::Hide {
            fade_out_details(&board, &details);
        }
    });
    log::info!("[plaques] plaques={}", plaque_count);
    Ok(())
}
