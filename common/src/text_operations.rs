//! Request and response bodies for the text edit/add/delete endpoints.

use serde::{Deserialize, Serialize};

use crate::document::{BBox, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditTextRequest {
    pub session_id: String,
    pub page_number: usize,
    pub text_box_id: String,
    pub new_text: String,
    /// Text currently on the page, used by the server to locate the span.
    pub original_text: String,
    pub font: String,
    pub font_size: f64,
    pub color: String,
    /// Comma-joined list of active styles, e.g. `bold,italic`.
    pub style: String,
    pub position: Position,
    pub bbox: BBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTextRequest {
    pub session_id: String,
    pub page_number: usize,
    pub text: String,
    pub position: Position,
    pub font: String,
    pub font_size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AddTextResponse {
    pub message: String,
    /// Id assigned by the server to the new text box, when it reports one.
    pub text_box_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTextRequest {
    pub session_id: String,
    pub page_number: usize,
    pub text_box_id: String,
}

/// Builds the `style` field from the bold/italic toggles.
pub fn style_list(bold: bool, italic: bool) -> String {
    let mut styles = Vec::new();
    if bold {
        styles.push("bold");
    }
    if italic {
        styles.push("italic");
    }
    styles.join(",")
}
