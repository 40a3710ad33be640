pub mod actions;
pub mod drop_zone;
pub mod image_list;
pub mod log_panel;

pub use actions::{Action, show_actions};
pub use drop_zone::show_drop_zone;
pub use image_list::show_image_list;
pub use log_panel::show_log_panel;
