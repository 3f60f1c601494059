// Platform-independent state and simulation; nothing here touches web_sys.
pub mod color;
pub mod constants;
pub mod fade;
pub mod lanterns;
pub mod network;
pub mod parallax;
pub mod plaques;
pub mod pond;
pub mod sand;
pub mod site;
pub mod snippets;
pub mod surface;
pub mod switcher;

pub use color::Rgba;
pub use fade::{PanelAction, Popup};
pub use lanterns::LanternRow;
pub use network::{NetworkParams, ParticleNetwork};
pub use plaques::PlaqueBoard;
pub use pond::Pond;
pub use sand::RakePad;
pub use site::Feature;
pub use snippets::SnippetFeed;
pub use surface::Surface;
pub use switcher::{ModuleSwitcher, SwitcherPreset};
