//! Limits and defaults shared by the editor core and the web frontend.

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 2.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Zoom change applied by one click of the zoom buttons.
pub const ZOOM_STEP: f64 = 0.1;
/// Print preview always renders pages at natural size.
pub const PRINT_ZOOM: f64 = 1.0;

pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 72;

pub const NEW_TEXT_FONT: &str = "helv";
pub const NEW_TEXT_FONT_SIZE: u32 = 12;
pub const NEW_TEXT_COLOR: &str = "#000000";

/// Font options always present in the font picker, before any server fonts.
pub const BUILTIN_FONTS: [&str; 3] = ["helv", "tiro", "cour"];

pub const MAX_HISTORY_DEPTH: usize = 100;
