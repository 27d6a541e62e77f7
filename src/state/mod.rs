//! Application state module

mod accordion;
mod app_state;
mod forms;
mod page;
mod progress;
mod tabs;
mod toast;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use page::*;
pub use tabs::*;
pub use toast::*;
pub use ui_area::*;
