use crate::constants::{STORYBOOK_CHARACTER_ID, STORYBOOK_POPUP_ID};
use crate::core::constants::FADE_OUT_MS;
use crate::core::{PanelAction, Popup};
use crate::dom::{self, SetupError};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Clicking the storybook character toggles its speech popup.
pub fn wire_story_popup(document: &web::Document) -> Result<(), SetupError> {
    let character = dom::require_id(document, STORYBOOK_CHARACTER_ID)?;
    let popup_el = dom::require_id(document, STORYBOOK_POPUP_ID)?;
    let popup = Rc::new(RefCell::new(Popup::new(!overlay::is_hidden(&popup_el))));

    dom::add_listener(&character, "click", move |_: web::MouseEvent| {
        let action = popup.borrow_mut().toggle();
        match action {
            PanelAction::Show => overlay::show(&popup_el),
            PanelAction::Hide => {
                overlay::begin_fade_out(&popup_el);
                let (popup, el) = (popup.clone(), popup_el.clone());
                dom::set_timeout(FADE_OUT_MS, move || {
                    if popup.borrow_mut().settle() {
                        overlay::finish_fade_out(&el);
                    }
                });
            }
            PanelAction::Nothing => {}
        }
    });
    log::info!("[storybook] popup wired");
    Ok(())
}
