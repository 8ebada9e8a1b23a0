pub mod editor_api;
pub mod browser;
