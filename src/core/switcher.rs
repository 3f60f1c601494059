// Exclusive content-module switching driven by navigation links.

/// Which navigation scheme a page uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwitcherPreset {
    pub name: &'static str,
    pub link_selector: &'static str,
    pub module_selector: &'static str,
    pub welcome_id: &'static str,
    /// Pair `hidden` with a `visible` class that triggers an in-transition.
    pub animate: bool,
}

pub const STARMAP: SwitcherPreset = SwitcherPreset {
    name: "starmap",
    link_selector: "#starmap-nav .starmap-nav-link",
    module_selector: ".content-module",
    welcome_id: "welcome-module",
    animate: true,
};

pub const FOREST_PATHS: SwitcherPreset = SwitcherPreset {
    name: "forest paths",
    link_selector: "#forest-paths-nav .forest-path-link",
    module_selector: ".forest-clearing-module",
    welcome_id: "welcome-clearing-module",
    animate: false,
};

/// Result of a transition: which module is shown and which link is lit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub module: Option<usize>,
    pub link: Option<usize>,
}

/// `#about` -> `about`. Links without a fragment marker use the raw value.
pub fn target_from_href(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

#[derive(Debug)]
pub struct ModuleSwitcher {
    modules: Vec<String>,
    link_targets: Vec<String>,
    welcome_id: String,
    current: Selection,
}

impl ModuleSwitcher {
    pub fn new(modules: Vec<String>, link_targets: Vec<String>, welcome_id: &str) -> Self {
        Self {
            modules,
            link_targets,
            welcome_id: welcome_id.to_string(),
            current: Selection::default(),
        }
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn module_id(&self, index: usize) -> Option<&str> {
        self.modules.get(index).map(String::as_str)
    }

    pub fn link_target(&self, index: usize) -> Option<&str> {
        self.link_targets.get(index).map(String::as_str)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_targets.len()
    }

    fn module_index(&self, id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m == id)
    }

    /// Page-load state: the first link's module, or the welcome module with
    /// no link lit when that target is missing.
    pub fn initial(&mut self) -> Selection {
        let first = self
            .link_targets
            .first()
            .and_then(|t| self.module_index(t));
        self.current = match first {
            Some(m) => Selection {
                module: Some(m),
                link: Some(0),
            },
            None => Selection {
                module: self.module_index(&self.welcome_id),
                link: None,
            },
        };
        self.current
    }

    /// Click on link `link`. The clicked link is always lit; the module is
    /// `None` when its target does not exist.
    pub fn select(&mut self, link: usize) -> Selection {
        if link >= self.link_targets.len() {
            return self.current;
        }
        let module = self.module_index(&self.link_targets[link]);
        self.current = Selection {
            module,
            link: Some(link),
        };
        self.current
    }
}
