use super::fade::{Fade, PanelAction, Visibility};

/// Shared details panel fed by a row of info plaques.
///
/// Remembers which plaque produced the visible text so a second click on the
/// same plaque toggles the panel off while a click on another one switches it.
#[derive(Debug, Default)]
pub struct PlaqueBoard {
    fade: Fade,
    source: Option<usize>,
}

impl PlaqueBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn visibility(&self) -> Visibility {
        self.fade.state()
    }

    pub fn click_plaque(&mut self, plaque: usize) -> PanelAction {
        if self.fade.is_visible() && self.source == Some(plaque) {
            self.fade.begin_hide();
            self.source = None;
            PanelAction::Hide
        } else {
            self.fade.show();
            self.source = Some(plaque);
            PanelAction::Show
        }
    }

    /// Document-level click. Clicks inside the panel or on a plaque never
    /// dismiss it.
    pub fn click_document(&mut self, inside_panel: bool, on_plaque: bool) -> PanelAction {
        if !self.fade.is_visible() || inside_panel || on_plaque {
            return PanelAction::Nothing;
        }
        self.fade.begin_hide();
        self.source = None;
        PanelAction::Hide
    }

    pub fn settle(&mut self) -> bool {
        self.fade.settle()
    }
}
