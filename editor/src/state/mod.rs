//! Editor application state.
//!
//! One explicitly owned value holds the session, the document snapshot, the
//! view (page, zoom, selection), the render ordering guard, and the command
//! history. All mutation goes through the methods below.

mod render_gate;
mod selection;
mod store;

pub use render_gate::{PaintedPage, RenderGate, RenderTicket, RenderToken, RenderedPage};
pub use selection::Selection;
pub use store::EditorStore;

use common::{
    document::{BBox, PageData, PdfData, Position, TextBlock},
    editor_const::{
        DEFAULT_ZOOM, MAX_HISTORY_DEPTH, MAX_ZOOM, MIN_ZOOM, NEW_TEXT_COLOR, NEW_TEXT_FONT, NEW_TEXT_FONT_SIZE,
    },
    fonts::FontInfo,
    page_render::RenderPageRequest,
    save::SaveRequest,
    text_operations::{AddTextRequest, DeleteTextRequest, EditTextRequest},
};

use crate::{
    edit_form::EditForm,
    error::EditorError,
    fonts::FontOptions,
    history::{CommandHistory, TextCommand},
    overlay::{DragGesture, OverlayBox, Point, ScreenRect, TooltipInfo},
    print_preview::session_label,
};

pub const READY_STATUS: &str = "Ready";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    session_id: Option<String>,
    document: Option<PdfData>,
    current_page: usize,
    zoom: f64,
    selection: Option<Selection>,
    edit_form: Option<EditForm>,
    active_drag: Option<DragGesture>,
    fonts: FontOptions,
    history: CommandHistory,
    render_gate: RenderGate,
    rendered: Option<RenderedPage>,
    painted: Option<PaintedPage>,
    status: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            session_id: None,
            document: None,
            current_page: 0,
            zoom: DEFAULT_ZOOM,
            selection: None,
            edit_form: None,
            active_drag: None,
            fonts: FontOptions::default(),
            history: CommandHistory::new(MAX_HISTORY_DEPTH),
            render_gate: RenderGate::default(),
            rendered: None,
            painted: None,
            status: READY_STATUS.to_string(),
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    fn require_session(&self) -> Result<String, EditorError> {
        self.session_id.clone().ok_or(EditorError::NoSession)
    }

    pub fn document(&self) -> Option<&PdfData> {
        self.document.as_ref()
    }

    pub fn has_document(&self) -> bool {
        self.session_id.is_some() && self.document.is_some()
    }

    pub fn num_pages(&self) -> usize {
        self.document.as_ref().map(|d| d.num_pages).unwrap_or(0)
    }

    pub fn page(&self, index: usize) -> Option<&PageData> {
        self.document.as_ref().and_then(|d| d.page(index))
    }

    /// Replaces everything tied to the previous document.
    pub fn install_document(&mut self, session_id: String, pdf_data: PdfData) {
        self.session_id = Some(session_id);
        self.document = Some(pdf_data);
        self.current_page = 0;
        self.clear_selection();
        self.history.clear();
        self.rendered = None;
        self.painted = None;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", (self.zoom * 100.0).round() as i64)
    }

    pub fn page_label(&self) -> Option<String> {
        self.document
            .as_ref()
            .map(|d| format!("Page {} / {}", self.current_page + 1, d.num_pages))
    }

    pub fn session_label(&self) -> Option<String> {
        self.session_id.as_deref().map(|id| format!("Session: {}", session_label(id)))
    }

    /// Moves by `delta` pages. Steps that would leave `[0, num_pages)` are ignored.
    pub fn navigate_page(&mut self, delta: i64) -> bool {
        let target = self.current_page as i64 + delta;
        if target < 0 {
            return false;
        }
        self.go_to_page(target as usize)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.document.is_none() || page >= self.num_pages() {
            return false;
        }
        self.current_page = page;
        self.clear_selection();
        true
    }

    /// Returns the new zoom, always within `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn apply_zoom_delta(&mut self, delta: f64) -> f64 {
        let zoom = self.zoom + delta;
        // Round away float drift from repeated 0.1 steps.
        self.zoom = ((zoom * 1000.0).round() / 1000.0).clamp(MIN_ZOOM, MAX_ZOOM);
        self.clear_selection();
        self.zoom
    }

    /// Issues a new render token for the current page and zoom, superseding
    /// any render still in flight.
    pub fn begin_render(&mut self) -> Result<RenderTicket, EditorError> {
        let session_id = self.require_session()?;
        let token = self.render_gate.issue();
        Ok(RenderTicket {
            token,
            request: RenderPageRequest { session_id, page_number: self.current_page, zoom: self.zoom },
        })
    }

    pub fn is_current_render(&self, token: RenderToken) -> bool {
        self.render_gate.is_current(token)
    }

    /// Keeps the image only if no newer render was requested meanwhile.
    pub fn accept_render(&mut self, ticket: &RenderTicket, image_data: String) -> Option<RenderedPage> {
        if !self.render_gate.is_current(ticket.token) {
            tracing::debug!("discarding stale render of page {}", ticket.request.page_number);
            return None;
        }
        let rendered = RenderedPage {
            token: ticket.token,
            page: ticket.request.page_number,
            zoom: ticket.request.zoom,
            image_data,
        };
        self.rendered = Some(rendered.clone());
        Some(rendered)
    }

    pub fn rendered(&self) -> Option<&RenderedPage> {
        self.rendered.as_ref()
    }

    /// Called once the decoded image is on the canvas. Late decodes of
    /// superseded renders are rejected here too.
    pub fn complete_paint(&mut self, token: RenderToken, width: u32, height: u32) -> bool {
        let Some(rendered) = self.rendered.as_ref().filter(|r| r.token == token) else {
            return false;
        };
        if !self.render_gate.is_current(token) {
            return false;
        }
        self.painted = Some(PaintedPage { token, page: rendered.page, zoom: rendered.zoom, width, height });
        self.render_gate.settle(token);
        true
    }

    /// The server or the image decode failed for `token`; stop waiting on it.
    pub fn abandon_render(&mut self, token: RenderToken) {
        self.render_gate.settle(token);
    }

    /// A page is requested but the latest render is neither painted nor failed.
    pub fn is_page_loading(&self) -> bool {
        self.has_document() && self.render_gate.is_pending()
    }

    pub fn painted(&self) -> Option<&PaintedPage> {
        self.painted.as_ref()
    }

    /// The painted page, but only while it matches the latest request.
    fn current_painted(&self) -> Option<&PaintedPage> {
        self.painted.as_ref().filter(|p| self.render_gate.is_current(p.token))
    }

    /// Centre of the visible canvas in page coordinates.
    pub fn canvas_center(&self) -> Position {
        if let Some(painted) = self.current_painted().filter(|p| p.page == self.current_page) {
            return Position {
                x: painted.width as f64 / 2.0 / painted.zoom,
                y: painted.height as f64 / 2.0 / painted.zoom,
            };
        }
        self.page(self.current_page)
            .map(|p| Position { x: p.width / 2.0, y: p.height / 2.0 })
            .unwrap_or_default()
    }

    /// Interactive boxes for the painted page. Empty while a newer render is
    /// pending, so boxes never sit on top of a stale image.
    pub fn overlay_boxes(&self) -> Vec<OverlayBox> {
        let Some(painted) = self.current_painted() else {
            return Vec::new();
        };
        let Some(page) = self.page(painted.page) else {
            return Vec::new();
        };
        page.text_blocks
            .iter()
            .map(|block| {
                let selection = self
                    .selection
                    .as_ref()
                    .filter(|s| s.page() == painted.page && s.block_id() == block.id);
                let mut rect = ScreenRect::from_bbox(&block.bbox, painted.zoom);
                if let Some(selection) = selection {
                    rect = rect.offset_by(selection.offset());
                }
                OverlayBox {
                    id: block.id.clone(),
                    rect,
                    selected: selection.is_some(),
                    tooltip: TooltipInfo::for_block(block),
                }
            })
            .collect()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Selects a box on the current page, replacing any previous selection,
    /// and opens the edit form for it. Reselecting the selected box keeps its
    /// drag offset and form edits.
    pub fn select_block(&mut self, id: &str) -> Result<(), EditorError> {
        if self.selection.as_ref().is_some_and(|s| s.page() == self.current_page && s.block_id() == id) {
            return Ok(());
        }
        let block = self
            .page(self.current_page)
            .and_then(|p| p.block(id))
            .cloned()
            .ok_or_else(|| EditorError::BlockNotFound(id.to_string()))?;
        let (form, font_match) = EditForm::from_block(&block, &mut self.fonts);
        tracing::debug!("selected {} (font {:?} -> {:?})", block.id, block.font, font_match);
        self.active_drag = None;
        self.selection = Some(Selection::new(self.current_page, block, self.zoom));
        self.edit_form = Some(form);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.edit_form = None;
        self.active_drag = None;
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.edit_form.as_mut()
    }

    pub fn fonts(&self) -> &FontOptions {
        &self.fonts
    }

    pub fn load_fonts(&mut self, fonts: &[FontInfo]) {
        self.fonts.load_server_fonts(fonts);
    }

    /// Starts dragging the selected box. Nothing happens without a selection.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        self.active_drag = Some(DragGesture::start(pointer, selection.offset()));
        true
    }

    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let (Some(gesture), Some(selection)) = (self.active_drag, self.selection.as_mut()) else {
            return false;
        };
        selection.set_offset(gesture.offset_at(pointer));
        true
    }

    pub fn end_drag(&mut self) {
        self.active_drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    pub fn prepare_edit(&self) -> Result<EditTextRequest, EditorError> {
        let session_id = self.require_session()?;
        let (Some(selection), Some(form)) = (self.selection.as_ref(), self.edit_form.as_ref()) else {
            return Err(EditorError::NoSelection);
        };
        let block = selection.block();
        Ok(EditTextRequest {
            session_id,
            page_number: selection.page(),
            text_box_id: block.id.clone(),
            new_text: form.text.clone(),
            original_text: block.text.clone(),
            font: form.font.clone(),
            font_size: form.font_size as f64,
            color: form.color.clone(),
            style: form.style(),
            position: selection.submitted_position(),
            bbox: block.bbox,
        })
    }

    /// Mirrors an accepted edit into the snapshot and records it for undo.
    pub fn apply_edit(&mut self, request: &EditTextRequest) -> Result<(), EditorError> {
        let page = request.page_number;
        let before = self
            .page(page)
            .and_then(|p| p.block(&request.text_box_id))
            .cloned()
            .ok_or_else(|| EditorError::BlockNotFound(request.text_box_id.clone()))?;
        let after = edited_block(&before, request);
        self.replace_block(page, after.clone());
        self.history.record(TextCommand::Edit { page, before, after });
        self.clear_selection();
        Ok(())
    }

    pub fn prepare_add(&self, text: &str) -> Result<AddTextRequest, EditorError> {
        let session_id = self.require_session()?;
        if text.trim().is_empty() {
            return Err(EditorError::EmptyText);
        }
        Ok(AddTextRequest {
            session_id,
            page_number: self.current_page,
            text: text.to_string(),
            position: self.canvas_center(),
            font: NEW_TEXT_FONT.to_string(),
            font_size: NEW_TEXT_FONT_SIZE as f64,
            color: NEW_TEXT_COLOR.to_string(),
        })
    }

    /// Inserts the new box when the server reported its id; without an id
    /// the box cannot be addressed later, so it is neither shown nor undoable.
    pub fn apply_add(&mut self, request: &AddTextRequest, text_box_id: Option<String>) -> Option<TextBlock> {
        let id = text_box_id?;
        let block = added_block(id, request);
        self.insert_block(request.page_number, block.clone());
        self.history.record(TextCommand::Add { page: request.page_number, block: block.clone() });
        Some(block)
    }

    pub fn prepare_delete(&self) -> Result<DeleteTextRequest, EditorError> {
        let session_id = self.require_session()?;
        let selection = self.selection.as_ref().ok_or(EditorError::NoSelection)?;
        Ok(DeleteTextRequest {
            session_id,
            page_number: selection.page(),
            text_box_id: selection.block_id().to_string(),
        })
    }

    pub fn apply_delete(&mut self, request: &DeleteTextRequest) -> Result<(), EditorError> {
        let block = self
            .remove_block(request.page_number, &request.text_box_id)
            .ok_or_else(|| EditorError::BlockNotFound(request.text_box_id.clone()))?;
        self.history.record(TextCommand::Delete { page: request.page_number, block });
        self.clear_selection();
        Ok(())
    }

    pub fn prepare_save(&self) -> Result<SaveRequest, EditorError> {
        Ok(SaveRequest { session_id: self.require_session()? })
    }

    /// Replaces the block with the same id. Returns false if it is not on `page`.
    pub fn replace_block(&mut self, page: usize, block: TextBlock) -> bool {
        let Some(existing) = self
            .document
            .as_mut()
            .and_then(|d| d.page_mut(page))
            .and_then(|p| p.block_mut(&block.id))
        else {
            return false;
        };
        *existing = block;
        true
    }

    pub fn insert_block(&mut self, page: usize, block: TextBlock) {
        if let Some(page) = self.document.as_mut().and_then(|d| d.page_mut(page)) {
            page.text_blocks.push(block);
        }
    }

    pub fn remove_block(&mut self, page: usize, id: &str) -> Option<TextBlock> {
        let page = self.document.as_mut()?.page_mut(page)?;
        let index = page.text_blocks.iter().position(|b| b.id == id)?;
        if self.selection.as_ref().is_some_and(|s| s.block_id() == id) {
            self.selection = None;
            self.edit_form = None;
            self.active_drag = None;
        }
        Some(page.text_blocks.remove(index))
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

fn edited_block(before: &TextBlock, request: &EditTextRequest) -> TextBlock {
    let styles: Vec<&str> = request.style.split(',').map(str::trim).collect();
    TextBlock {
        id: before.id.clone(),
        text: request.new_text.clone(),
        bbox: before.bbox.moved_to(request.position),
        font: request.font.clone(),
        size: request.font_size,
        color: request.color.clone(),
        bold: styles.contains(&"bold"),
        italic: styles.contains(&"italic"),
    }
}

/// The server does not report the extent of added text, so the box is
/// estimated from the font size: one line tall, half an em per character.
fn added_block(id: String, request: &AddTextRequest) -> TextBlock {
    let width = request.text.chars().count() as f64 * request.font_size * 0.5;
    let Position { x, y } = request.position;
    TextBlock {
        id,
        text: request.text.clone(),
        bbox: BBox::new(x, y - request.font_size, x + width, y),
        font: request.font.clone(),
        size: request.font_size,
        color: request.color.clone(),
        bold: false,
        italic: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(id: &str, text: &str, bbox: [f64; 4]) -> TextBlock {
        TextBlock {
            id: id.into(),
            text: text.into(),
            bbox: bbox.into(),
            font: "SolaimanLipi".into(),
            size: 12.0,
            color: "#000000".into(),
            bold: false,
            italic: false,
        }
    }

    fn document(num_pages: usize) -> PdfData {
        PdfData {
            num_pages,
            pages: (0..num_pages)
                .map(|p| PageData {
                    page_number: p,
                    width: 600.0,
                    height: 800.0,
                    text_blocks: vec![
                        block(&format!("word_{p}_0"), "first", [10.0, 20.0, 60.0, 32.0]),
                        block(&format!("word_{p}_1"), "second", [70.0, 20.0, 130.0, 32.0]),
                    ],
                })
                .collect(),
        }
    }

    fn loaded(num_pages: usize) -> EditorState {
        let mut state = EditorState::new();
        state.install_document("session-1234567890".into(), document(num_pages));
        state
    }

    fn paint_current(state: &mut EditorState) {
        let ticket = state.begin_render().unwrap();
        state.accept_render(&ticket, "data:image/png;base64,".into());
        let zoom = state.zoom();
        state.complete_paint(ticket.token, (600.0 * zoom) as u32, (800.0 * zoom) as u32);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut state = loaded(1);
        for _ in 0..50 {
            state.apply_zoom_delta(0.1);
        }
        assert_eq!(state.zoom(), MAX_ZOOM);
        for _ in 0..50 {
            state.apply_zoom_delta(-0.1);
        }
        assert_eq!(state.zoom(), MIN_ZOOM);
        state.apply_zoom_delta(0.1);
        assert_eq!(state.zoom_label(), "35%");
        for delta in [0.7, -3.0, 1.3, 0.05, 9.0, -0.01] {
            let zoom = state.apply_zoom_delta(delta);
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
        }
    }

    #[test]
    fn navigation_never_leaves_page_range() {
        let mut state = loaded(3);
        assert!(!state.navigate_page(-1));
        assert_eq!(state.current_page(), 0);
        assert!(state.navigate_page(2));
        assert_eq!(state.current_page(), 2);
        assert!(!state.navigate_page(1));
        assert!(!state.go_to_page(3));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.page_label().as_deref(), Some("Page 3 / 3"));
    }

    #[test]
    fn navigation_without_document_is_noop() {
        let mut state = EditorState::new();
        assert!(!state.navigate_page(1));
        assert!(state.begin_render().is_err());
    }

    #[test]
    fn selecting_replaces_previous_selection() {
        let mut state = loaded(1);
        paint_current(&mut state);
        state.select_block("word_0_0").unwrap();
        state.select_block("word_0_1").unwrap();
        let selected: Vec<_> = state.overlay_boxes().into_iter().filter(|b| b.selected).map(|b| b.id).collect();
        assert_eq!(selected, vec!["word_0_1".to_string()]);
        assert_eq!(state.edit_form().map(|f| f.text.as_str()), Some("second"));
    }

    #[test]
    fn selecting_unknown_block_fails() {
        let mut state = loaded(1);
        assert!(matches!(state.select_block("nope"), Err(EditorError::BlockNotFound(_))));
        assert!(state.selection().is_none());
    }

    #[test]
    fn overlay_scales_bbox_by_zoom() {
        let mut state = loaded(1);
        state.apply_zoom_delta(0.5);
        paint_current(&mut state);
        let boxes = state.overlay_boxes();
        assert_eq!(boxes[0].rect, ScreenRect { left: 15.0, top: 30.0, width: 75.0, height: 18.0 });
    }

    #[test]
    fn overlay_hidden_while_newer_render_pending() {
        let mut state = loaded(2);
        paint_current(&mut state);
        assert_eq!(state.overlay_boxes().len(), 2);
        state.navigate_page(1);
        state.begin_render().unwrap();
        assert!(state.overlay_boxes().is_empty());
    }

    #[test]
    fn stale_render_is_rejected_at_both_stages() {
        let mut state = loaded(2);
        let old = state.begin_render().unwrap();
        state.navigate_page(1);
        let new = state.begin_render().unwrap();

        assert!(state.accept_render(&new, "new".into()).is_some());
        assert!(state.accept_render(&old, "old".into()).is_none());
        assert_eq!(state.rendered().map(|r| r.page), Some(1));

        assert!(!state.complete_paint(old.token, 10, 10));
        assert!(state.complete_paint(new.token, 10, 10));
        assert_eq!(state.painted().map(|p| p.page), Some(1));
    }

    #[test]
    fn page_is_loading_until_latest_render_settles() {
        let mut state = loaded(2);
        assert!(!state.is_page_loading());
        paint_current(&mut state);
        assert!(!state.is_page_loading());

        state.navigate_page(1);
        let next = state.begin_render().unwrap();
        assert!(state.is_page_loading());
        assert!(state.overlay_boxes().is_empty());
        state.accept_render(&next, "next".into());
        assert!(state.is_page_loading());
        state.complete_paint(next.token, 10, 10);
        assert!(!state.is_page_loading());

        let failed = state.begin_render().unwrap();
        state.abandon_render(failed.token);
        assert!(!state.is_page_loading());
    }

    #[test]
    fn drag_moves_selected_box_and_submitted_position() {
        let mut state = loaded(1);
        paint_current(&mut state);
        state.select_block("word_0_0").unwrap();
        assert!(state.begin_drag(Point::new(500.0, 500.0)));
        state.drag_to(Point::new(530.0, 490.0));
        state.end_drag();
        assert!(!state.drag_to(Point::new(900.0, 900.0)));

        let rect = state.overlay_boxes()[0].rect;
        assert_eq!((rect.left, rect.top), (40.0, 10.0));
        let request = state.prepare_edit().unwrap();
        assert_eq!(request.position, Position { x: 40.0, y: 10.0 });
        assert_eq!(request.bbox, BBox::new(10.0, 20.0, 60.0, 32.0));
    }

    #[test]
    fn drag_without_selection_does_nothing() {
        let mut state = loaded(1);
        assert!(!state.begin_drag(Point::new(0.0, 0.0)));
        assert!(!state.is_dragging());
    }

    #[test]
    fn applied_edit_updates_block_and_history() {
        let mut state = loaded(1);
        state.select_block("word_0_0").unwrap();
        if let Some(form) = state.edit_form_mut() {
            form.text = "edited".into();
            form.italic = true;
        }
        let request = state.prepare_edit().unwrap();
        assert_eq!(request.original_text, "first");
        state.apply_edit(&request).unwrap();

        let block = state.page(0).unwrap().block("word_0_0").unwrap();
        assert_eq!(block.text, "edited");
        assert!(block.italic);
        assert!(state.selection().is_none());
        assert!(state.history().can_undo());
    }

    #[test]
    fn add_uses_canvas_center_in_page_space() {
        let mut state = loaded(1);
        state.apply_zoom_delta(1.0);
        paint_current(&mut state);
        let request = state.prepare_add("নতুন").unwrap();
        assert_eq!(request.position, Position { x: 300.0, y: 400.0 });
        assert_eq!(request.font, NEW_TEXT_FONT);
        assert!(matches!(state.prepare_add("   "), Err(EditorError::EmptyText)));
    }

    #[test]
    fn add_with_server_id_inserts_block() {
        let mut state = loaded(1);
        let request = state.prepare_add("hi").unwrap();
        assert!(state.apply_add(&request, None).is_none());
        let block = state.apply_add(&request, Some("new_text_1".into())).unwrap();
        assert_eq!(block.bbox, BBox::new(300.0, 388.0, 312.0, 400.0));
        assert_eq!(state.page(0).unwrap().text_blocks.len(), 3);
        assert_eq!(state.history().undo_len(), 1);
    }

    #[test]
    fn delete_requires_selection_and_removes_block() {
        let mut state = loaded(1);
        assert!(matches!(state.prepare_delete(), Err(EditorError::NoSelection)));
        state.select_block("word_0_1").unwrap();
        let request = state.prepare_delete().unwrap();
        state.apply_delete(&request).unwrap();
        assert!(state.page(0).unwrap().block("word_0_1").is_none());
        assert!(state.selection().is_none());
    }

    #[test]
    fn new_upload_resets_view() {
        let mut state = loaded(3);
        state.navigate_page(2);
        state.select_block("word_2_0").unwrap();
        state.install_document("other".into(), document(5));
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.num_pages(), 5);
        assert!(state.selection().is_none());
        assert_eq!(state.session_label().as_deref(), Some("Session: other..."));
    }
}
