//! Geometry of the interactive text-box overlay drawn above the page canvas.

use common::document::{BBox, TextBlock};

/// A point in screen pixels, relative to any fixed origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Box placement in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    /// Uniform scale of all four bbox coordinates.
    pub fn from_bbox(bbox: &BBox, zoom: f64) -> Self {
        let scaled = bbox.scaled(zoom);
        Self {
            left: scaled.x0(),
            top: scaled.y0(),
            width: scaled.width(),
            height: scaled.height(),
        }
    }

    pub fn offset_by(self, offset: Point) -> Self {
        Self { left: self.left + offset.x, top: self.top + offset.y, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInfo {
    pub text: String,
    pub font: String,
    pub size: String,
    pub style: &'static str,
    pub color: String,
}

impl TooltipInfo {
    pub fn for_block(block: &TextBlock) -> Self {
        let style = if block.bold {
            "Bold"
        } else if block.italic {
            "Italic"
        } else {
            "Regular"
        };
        Self {
            text: block.text.clone(),
            font: block.font.clone(),
            size: format!("{}px", block.size),
            style,
            color: block.color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    pub id: String,
    pub rect: ScreenRect,
    pub selected: bool,
    pub tooltip: TooltipInfo,
}

/// A drag in progress on the selected box's handle.
///
/// Only one gesture exists at a time, so the page needs a single move/up
/// handler that forwards to whichever gesture is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pointer_start: Point,
    offset_start: Point,
}

impl DragGesture {
    pub fn start(pointer: Point, current_offset: Point) -> Self {
        Self { pointer_start: pointer, offset_start: current_offset }
    }

    /// Offset of the box from its bbox position once the pointer is at `pointer`.
    pub fn offset_at(&self, pointer: Point) -> Point {
        Point {
            x: self.offset_start.x + (pointer.x - self.pointer_start.x),
            y: self.offset_start.y + (pointer.y - self.pointer_start.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(bold: bool, italic: bool) -> TextBlock {
        TextBlock {
            id: "b".into(),
            text: "hello".into(),
            bbox: BBox::new(10.0, 20.0, 60.0, 32.0),
            font: "Arial".into(),
            size: 12.5,
            color: "#112233".into(),
            bold,
            italic,
        }
    }

    #[test]
    fn screen_rect_scales_every_coordinate() {
        let rect = ScreenRect::from_bbox(&BBox::new(10.0, 20.0, 60.0, 32.0), 1.5);
        assert_eq!(rect, ScreenRect { left: 15.0, top: 30.0, width: 75.0, height: 18.0 });
    }

    #[test]
    fn tooltip_prefers_bold_over_italic() {
        assert_eq!(TooltipInfo::for_block(&block(true, true)).style, "Bold");
        assert_eq!(TooltipInfo::for_block(&block(false, true)).style, "Italic");
        assert_eq!(TooltipInfo::for_block(&block(false, false)).style, "Regular");
        assert_eq!(TooltipInfo::for_block(&block(false, false)).size, "12.5px");
    }

    #[test]
    fn second_drag_continues_from_previous_offset() {
        let first = DragGesture::start(Point::new(100.0, 100.0), Point::default());
        let offset = first.offset_at(Point::new(110.0, 95.0));
        assert_eq!(offset, Point::new(10.0, -5.0));

        let second = DragGesture::start(Point::new(0.0, 0.0), offset);
        assert_eq!(second.offset_at(Point::new(3.0, 3.0)), Point::new(13.0, -2.0));
    }
}
