//! Document snapshot returned by the upload endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PdfData {
    pub num_pages: usize,
    #[serde(default)]
    pub pages: Vec<PageData>,
}

impl PdfData {
    pub fn page(&self, index: usize) -> Option<&PageData> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut PageData> {
        self.pages.get_mut(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageData {
    pub page_number: usize,
    /// Page size in unscaled page units, zero when the server omits it.
    pub width: f64,
    pub height: f64,
    pub text_blocks: Vec<TextBlock>,
}

impl PageData {
    pub fn block(&self, id: &str) -> Option<&TextBlock> {
        self.text_blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut TextBlock> {
        self.text_blocks.iter_mut().find(|b| b.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub bbox: BBox,
    #[serde(default)]
    pub font: String,
    #[serde(default = "default_font_size")]
    pub size: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

fn default_font_size() -> f64 {
    12.0
}

fn default_color() -> String {
    "#000000".to_string()
}

/// Axis-aligned box `[x0, y0, x1, y1]` in unscaled page coordinates.
///
/// Corners are normalized on construction so that `x1 >= x0` and `y1 >= y0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl BBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }
    pub fn y0(&self) -> f64 {
        self.y0
    }
    pub fn x1(&self) -> f64 {
        self.x1
    }
    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn origin(&self) -> Position {
        Position { x: self.x0, y: self.y0 }
    }

    /// Same size, top-left corner moved to `origin`.
    pub fn moved_to(&self, origin: Position) -> Self {
        Self::new(origin.x, origin.y, origin.x + self.width(), origin.y + self.height())
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x0 * factor, self.y0 * factor, self.x1 * factor, self.y1 * factor)
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x0, y0, x1, y1]: [f64; 4]) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

impl From<BBox> for [f64; 4] {
    fn from(b: BBox) -> Self {
        [b.x0, b.y0, b.x1, b.y1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bbox_corners_are_normalized_on_deserialize() {
        let b: BBox = serde_json::from_str("[30.0, 40.0, 10.0, 20.0]").unwrap();
        assert_eq!(<[f64; 4]>::from(b), [10.0, 20.0, 30.0, 40.0]);
        assert!(b.x1() >= b.x0() && b.y1() >= b.y0());
    }

    #[test]
    fn text_block_fills_missing_style_fields() {
        let json = r#"{"id": "word_0_1", "text": "hello", "bbox": [1, 2, 3, 4], "flags": 16, "block_no": 0}"#;
        let block: TextBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.font, "");
        assert_eq!(block.size, 12.0);
        assert_eq!(block.color, "#000000");
        assert!(!block.bold && !block.italic);
    }

    #[test]
    fn page_without_dimensions_defaults_to_zero() {
        let json = r#"{"num_pages": 1, "pages": [{"text_blocks": []}], "metadata": {}}"#;
        let data: PdfData = serde_json::from_str(json).unwrap();
        assert_eq!(data.pages[0].width, 0.0);
        assert_eq!(data.page(0).map(|p| p.text_blocks.len()), Some(0));
        assert!(data.page(1).is_none());
    }

    #[test]
    fn moved_to_keeps_box_size() {
        let b = BBox::new(10.0, 10.0, 50.0, 22.0).moved_to(Position { x: 100.0, y: 5.0 });
        assert_eq!(<[f64; 4]>::from(b), [100.0, 5.0, 140.0, 17.0]);
    }
}
