// Show/hide state for overlays that fade out before leaving layout.
//
// Hiding happens in two steps: `begin_hide` drops the `visible` class so the
// CSS transition runs, then a timer calls `settle`, which only reports the
// element as ready for `hidden` if nothing re-showed it in between.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
    FadingOut,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Fade {
    state: Visibility,
}

impl Fade {
    pub fn new(state: Visibility) -> Self {
        Self { state }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    pub fn show(&mut self) {
        self.state = Visibility::Visible;
    }

    /// Returns false if there was nothing visible to hide.
    pub fn begin_hide(&mut self) -> bool {
        if self.state == Visibility::Visible {
            self.state = Visibility::FadingOut;
            true
        } else {
            false
        }
    }

    /// Fade-out timer expired. True when the element should now get `hidden`.
    pub fn settle(&mut self) -> bool {
        if self.state == Visibility::FadingOut {
            self.state = Visibility::Hidden;
            true
        } else {
            false
        }
    }
}

/// What the DOM layer should do after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Show,
    Hide,
    Nothing,
}

/// Single popup toggled by one trigger (the storybook character).
#[derive(Debug, Default)]
pub struct Popup {
    fade: Fade,
}

impl Popup {
    pub fn new(initially_visible: bool) -> Self {
        let state = if initially_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        Self {
            fade: Fade::new(state),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.fade.state()
    }

    /// Only a fully hidden popup is shown again; a click while it fades out
    /// hides it once more and needs a fresh settle timer.
    pub fn toggle(&mut self) -> PanelAction {
        if self.fade.state() == Visibility::Hidden {
            self.fade.show();
            PanelAction::Show
        } else {
            self.fade = Fade::new(Visibility::FadingOut);
            PanelAction::Hide
        }
    }

    pub fn settle(&mut self) -> bool {
        self.fade.settle()
    }
}
