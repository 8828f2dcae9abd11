//! Navigation, settings and file-browser layer of an emulator front-end.
//!
//! [`Frontend`] is driven once per frame with a [`Buttons`] snapshot and a
//! [`Surface`] to draw on, and answers with a [`UiResult`] the embedding
//! application acts upon.

pub mod browser;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod settings;
pub mod ui;

pub use config::FrontendConfig;
pub use input::Buttons;
pub use render::Surface;
pub use ui::frontend::Frontend;
pub use ui::result::UiResult;
pub use ui::stack::Screen;
