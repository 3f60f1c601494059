pub mod lanterns;
pub mod navigation;
pub mod parallax;
pub mod plaques;
pub mod pond;
pub mod sand;
pub mod sculpture;
pub mod storybook;

pub use lanterns::wire_lanterns;
pub use navigation::wire_module_switcher;
pub use parallax::{wire_cosmic_parallax, wire_storybook_parallax};
pub use plaques::wire_info_plaques;
pub use pond::wire_pond;
pub use sand::wire_sand_garden;
pub use sculpture::wire_data_sculpture;
pub use storybook::wire_story_popup;
