//! Values shown in the edit panel for the selected text box.

use common::{
    document::TextBlock,
    editor_const::{MAX_FONT_SIZE, MIN_FONT_SIZE},
    text_operations::style_list,
};

use crate::fonts::{FontMatch, FontOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub text: String,
    /// Value of the selected font option.
    pub font: String,
    pub font_size: u32,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
}

impl EditForm {
    /// Pre-populates the form from `block`, resolving its detected font
    /// against `fonts` (which may gain a new option).
    pub fn from_block(block: &TextBlock, fonts: &mut FontOptions) -> (Self, FontMatch) {
        let font_match = fonts.resolve(&block.font);
        let font = fonts
            .get(font_match.index())
            .map(|o| o.value.clone())
            .unwrap_or_else(|| block.font.clone());
        let form = Self {
            text: block.text.clone(),
            font,
            font_size: clamp_font_size(block.size.round() as i64),
            color: block.color.clone(),
            bold: block.bold,
            italic: block.italic,
        };
        (form, font_match)
    }

    pub fn adjust_font_size(&mut self, delta: i64) {
        self.font_size = clamp_font_size(self.font_size as i64 + delta);
    }

    pub fn set_font_size(&mut self, value: i64) {
        self.font_size = clamp_font_size(value);
    }

    pub fn style(&self) -> String {
        style_list(self.bold, self.italic)
    }
}

fn clamp_font_size(value: i64) -> u32 {
    value.clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::document::BBox;
    use pretty_assertions::assert_eq;

    fn block() -> TextBlock {
        TextBlock {
            id: "word_0_0".into(),
            text: "আমার".into(),
            bbox: BBox::new(0.0, 0.0, 10.0, 10.0),
            font: "SolaimanLipi".into(),
            size: 13.6,
            color: "#333333".into(),
            bold: true,
            italic: false,
        }
    }

    #[test]
    fn form_is_prepopulated_from_block() {
        let mut fonts = FontOptions::with_builtins(&["Arial", "SolaimanLipiBold"]);
        let (form, m) = EditForm::from_block(&block(), &mut fonts);
        assert_eq!(m, FontMatch::Substring(1));
        assert_eq!(
            form,
            EditForm {
                text: "আমার".into(),
                font: "SolaimanLipiBold".into(),
                font_size: 14,
                color: "#333333".into(),
                bold: true,
                italic: false,
            }
        );
        assert_eq!(form.style(), "bold");
    }

    #[test]
    fn font_size_adjustment_is_clamped() {
        let mut fonts = FontOptions::default();
        let (mut form, _) = EditForm::from_block(&block(), &mut fonts);
        form.adjust_font_size(100);
        assert_eq!(form.font_size, MAX_FONT_SIZE);
        form.set_font_size(0);
        assert_eq!(form.font_size, MIN_FONT_SIZE);
        form.adjust_font_size(1);
        assert_eq!(form.font_size, MIN_FONT_SIZE + 1);
    }
}
