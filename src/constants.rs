// Element ids, selectors and class names the page markup provides.

// Shared classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ACTIVE: &str = "active";

// Zen garden canvases
pub const SAND_CANVAS_ID: &str = "sand-canvas";
pub const POND_CANVAS_ID: &str = "pond-canvas";

// Data sculpture
pub const SCULPTURE_CANVAS_ID: &str = "data-sculpture-canvas";
pub const SNIPPETS_OVERLAY_ID: &str = "data-snippets-overlay";
pub const SNIPPET_TAG: &str = "p";
pub const CLASS_SNIPPET: &str = "data-snippet";

// Stone lanterns
pub const LANTERN_SELECTOR: &str = ".stone-lantern";
pub const LANTERN_QUOTE_SELECTOR: &str = ".lantern-quote";
pub const LANTERN_QUOTE_ATTR: &str = "data-quote";
pub const CLASS_LIT: &str = "lit";

// Storybook
pub const STORYBOOK_SCENE_ID: &str = "storybook-scene";
pub const STORYBOOK_CHARACTER_ID: &str = "sir-reginald";
pub const STORYBOOK_POPUP_ID: &str = "sb-popup-1";

// Horology engine plaques
pub const PLAQUE_SELECTOR: &str = "#horology-engine-section .info-plaque";
pub const PLAQUE_DETAILS_SELECTOR: &str = "#horology-engine-section .info-plaque-details";
pub const PLAQUE_INFO_ATTR: &str = "data-info";

// Page marker selecting the feature set
pub const SITE_ATTR: &str = "data-site";
