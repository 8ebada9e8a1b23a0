//! In-memory editor server used by the integration tests.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use bytes::Bytes;
use common::{
    document::{BBox, PageData, PdfData, TextBlock},
    fonts::FontInfo,
    page_render::{RenderPageRequest, RenderPageResponse},
    save::SaveRequest,
    server_status::MessageResponse,
    text_operations::{AddTextRequest, AddTextResponse, DeleteTextRequest, EditTextRequest},
    upload::UploadResponse,
};
use editor::{
    api::EditorApi,
    config::EditorConfig,
    controller::EditorController,
    error::ApiError,
    state::EditorState,
};
use futures::channel::oneshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fonts,
    Upload(String),
    Render(RenderPageRequest),
    Edit(EditTextRequest),
    Add(AddTextRequest),
    Delete(DeleteTextRequest),
    Save(String),
}

#[derive(Default)]
pub struct FakeEditorApi {
    pub document: PdfData,
    pub fonts: Vec<FontInfo>,
    calls: RefCell<Vec<Call>>,
    fail_next: RefCell<Option<String>>,
    held_renders: RefCell<VecDeque<oneshot::Receiver<()>>>,
    assign_ids: Cell<bool>,
    next_id: Cell<usize>,
}

impl FakeEditorApi {
    pub fn new(document: PdfData) -> Self {
        let api = Self { document, ..Default::default() };
        api.assign_ids.set(true);
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn renders(&self) -> Vec<RenderPageRequest> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Render(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.borrow().iter().rev().find(|c| !matches!(c, Call::Render(_))).cloned()
    }

    /// The next call of any kind reports this server error.
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.borrow_mut() = Some(message.to_string());
    }

    /// Render calls wait on these, in issue order, before responding.
    pub fn hold_renders(&self, gates: Vec<oneshot::Receiver<()>>) {
        self.held_renders.borrow_mut().extend(gates);
    }

    pub fn stop_assigning_ids(&self) {
        self.assign_ids.set(false);
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(message) => Err(ApiError::server(message)),
            None => Ok(()),
        }
    }
}

impl EditorApi for FakeEditorApi {
    async fn list_fonts(&self) -> Result<Vec<FontInfo>, ApiError> {
        self.record(Call::Fonts)?;
        Ok(self.fonts.clone())
    }

    async fn upload(&self, file_name: &str, _content: Bytes) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload(file_name.to_string()))?;
        Ok(UploadResponse {
            session_id: "0123456789abcdef".into(),
            pdf_data: self.document.clone(),
            message: "PDF uploaded successfully".into(),
        })
    }

    async fn render_page(&self, request: &RenderPageRequest) -> Result<RenderPageResponse, ApiError> {
        let gate = self.held_renders.borrow_mut().pop_front();
        let outcome = self.record(Call::Render(request.clone()));
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        outcome?;
        Ok(RenderPageResponse { image_data: image_for(request.page_number, request.zoom) })
    }

    async fn edit_text(&self, request: &EditTextRequest) -> Result<MessageResponse, ApiError> {
        self.record(Call::Edit(request.clone()))?;
        Ok(MessageResponse { message: "Text edited successfully".into() })
    }

    async fn add_text(&self, request: &AddTextRequest) -> Result<AddTextResponse, ApiError> {
        self.record(Call::Add(request.clone()))?;
        let text_box_id = self.assign_ids.get().then(|| {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            format!("new_text_{id}")
        });
        Ok(AddTextResponse { message: "Text added successfully".into(), text_box_id })
    }

    async fn delete_text(&self, request: &DeleteTextRequest) -> Result<MessageResponse, ApiError> {
        self.record(Call::Delete(request.clone()))?;
        Ok(MessageResponse { message: "Text deleted successfully".into() })
    }

    async fn save(&self, request: &SaveRequest) -> Result<MessageResponse, ApiError> {
        self.record(Call::Save(request.session_id.clone()))?;
        Ok(MessageResponse { message: "PDF saved successfully".into() })
    }

    fn download_url(&self, session_id: &str) -> String {
        EditorConfig::new("http://editor.test/").download_url(session_id)
    }
}

pub fn image_for(page: usize, zoom: f64) -> String {
    format!("data:image/png;base64,page{page}@{zoom}")
}

pub fn block(id: &str, text: &str, bbox: [f64; 4]) -> TextBlock {
    TextBlock {
        id: id.into(),
        text: text.into(),
        bbox: BBox::from(bbox),
        font: "SolaimanLipi".into(),
        size: 12.0,
        color: "#000000".into(),
        bold: false,
        italic: false,
    }
}

/// `num_pages` A4-ish pages, each with two boxes `word_{page}_0` and `word_{page}_1`.
pub fn document(num_pages: usize) -> PdfData {
    PdfData {
        num_pages,
        pages: (0..num_pages)
            .map(|page| PageData {
                page_number: page,
                width: 595.0,
                height: 842.0,
                text_blocks: vec![
                    block(&format!("word_{page}_0"), "first", [10.0, 20.0, 60.0, 32.0]),
                    block(&format!("word_{page}_1"), "second", [70.0, 20.0, 130.0, 32.0]),
                ],
            })
            .collect(),
    }
}

pub type TestController = EditorController<FakeEditorApi, Rc<RefCell<EditorState>>>;

pub fn controller(api: FakeEditorApi) -> TestController {
    EditorController::new(api, Rc::new(RefCell::new(EditorState::new())))
}

/// A controller with a `num_pages` document uploaded and the first page painted.
pub async fn opened(num_pages: usize) -> TestController {
    let controller = controller(FakeEditorApi::new(document(num_pages)));
    controller
        .upload("sample.pdf", Bytes::from_static(b"%PDF-1.7"))
        .await
        .expect("upload");
    paint(&controller);
    controller
}

/// Marks the latest accepted render as drawn, the way the canvas does.
pub fn paint(controller: &TestController) {
    use editor::state::EditorStore;
    controller.store().update(|s| {
        if let Some(rendered) = s.rendered().cloned() {
            let width = (595.0 * rendered.zoom) as u32;
            let height = (842.0 * rendered.zoom) as u32;
            s.complete_paint(rendered.token, width, height);
        }
    });
}
