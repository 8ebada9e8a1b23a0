//! Editor core: the state model, the editor server API, and the controller
//! that sequences every user operation against them.

pub mod config;
pub mod error;
pub mod api;
pub mod state;
pub mod fonts;
pub mod overlay;
pub mod edit_form;
pub mod history;
pub mod shortcuts;
pub mod print_preview;
pub mod controller;
