//! Common library exports shared between the editor core and the frontend.

extern crate serde;


pub mod editor_const;
pub mod document;
pub mod server_status;
pub mod fonts;
pub mod upload;
pub mod page_render;
pub mod text_operations;
pub mod save;
