//! Components of the editor page.

pub mod actions;
pub mod toolbar;
pub mod upload_button;
pub mod thumbnails;
pub mod page_canvas;
pub mod text_overlay;
pub mod edit_panel;
pub mod add_text_modal;
pub mod status_bar;
pub mod print_preview;
