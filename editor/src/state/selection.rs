use common::document::{Position, TextBlock};

use crate::overlay::Point;

/// The selected text box: a snapshot of its data when it was selected, plus
/// how far it has been dragged on screen since.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    page: usize,
    block: TextBlock,
    /// Screen pixels at `zoom`.
    offset: Point,
    zoom: f64,
}

impl Selection {
    pub fn new(page: usize, block: TextBlock, zoom: f64) -> Self {
        Self { page, block, offset: Point::default(), zoom }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn block(&self) -> &TextBlock {
        &self.block
    }

    pub fn block_id(&self) -> &str {
        &self.block.id
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn moved(&self) -> bool {
        self.offset != Point::default()
    }

    /// Page-space origin to submit: the bbox origin, shifted by the drag
    /// converted back from screen pixels.
    pub fn submitted_position(&self) -> Position {
        let origin = self.block.bbox.origin();
        if !self.moved() {
            return origin;
        }
        Position {
            x: origin.x + self.offset.x / self.zoom,
            y: origin.y + self.offset.y / self.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::document::BBox;
    use pretty_assertions::assert_eq;

    fn block() -> TextBlock {
        TextBlock {
            id: "word_0_0".into(),
            text: "x".into(),
            bbox: BBox::new(100.0, 200.0, 150.0, 212.0),
            font: String::new(),
            size: 12.0,
            color: "#000000".into(),
            bold: false,
            italic: false,
        }
    }

    #[test]
    fn unmoved_selection_submits_bbox_origin() {
        let s = Selection::new(0, block(), 1.5);
        assert_eq!(s.submitted_position(), Position { x: 100.0, y: 200.0 });
    }

    #[test]
    fn drag_is_converted_to_page_space() {
        let mut s = Selection::new(0, block(), 2.0);
        s.set_offset(Point::new(20.0, -10.0));
        assert_eq!(s.submitted_position(), Position { x: 110.0, y: 195.0 });
    }
}
