pub mod error_boundary;
pub mod loading;
pub mod editor_components;
