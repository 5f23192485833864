//! The components module contains all shared components for the viewer.

mod app;
mod context_menu;
mod icons;
mod keyboard;
pub mod overlay;
mod settings_panel;
mod slideshow_handle;
mod stream_viewer;
pub mod web_helpers;

pub use app::*;
pub use context_menu::*;
pub use icons::*;
pub use keyboard::*;
pub use settings_panel::*;
pub use slideshow_handle::*;
pub use stream_viewer::*;
