//! Sequencing of user operations: precondition, server call, state update,
//! re-render.
//!
//! Every failure sets the status line to `Error: {msg}` and is returned to
//! the caller unchanged, which decides whether to alert. State is only
//! touched after the server accepted the operation.

use std::{future::Future, rc::Rc};

use bytes::Bytes;
use common::{
    document::{Position, TextBlock},
    editor_const::PRINT_ZOOM,
    page_render::RenderPageRequest,
    text_operations::{AddTextRequest, DeleteTextRequest, EditTextRequest, style_list},
};
use futures::{Stream, stream::FuturesUnordered};

use crate::{
    api::EditorApi,
    error::EditorError,
    history::TextCommand,
    print_preview::shell_html,
    state::{EditorStore, READY_STATUS, RenderedPage},
};

pub struct EditorController<A, S> {
    api: Rc<A>,
    store: S,
}

impl<A, S: Clone> Clone for EditorController<A, S> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), store: self.store.clone() }
    }
}

impl<A: EditorApi, S: EditorStore> EditorController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api: Rc::new(api), store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fail<T>(&self, error: EditorError) -> Result<T, EditorError> {
        tracing::warn!("editor operation failed: {}", error);
        self.store.update(|s| s.set_status(format!("Error: {error}")));
        Err(error)
    }

    fn session(&self) -> Result<String, EditorError> {
        self.store.read(|s| s.session_id().map(str::to_string)).ok_or(EditorError::NoSession)
    }

    /// Font loading failures only reach the log; the built-in fonts stay usable.
    pub async fn load_fonts(&self) {
        match self.api.list_fonts().await {
            Ok(fonts) => {
                tracing::info!("loaded {} server fonts", fonts.len());
                self.store.update(|s| s.load_fonts(&fonts));
            }
            Err(e) => tracing::warn!("could not load font list: {}", e),
        }
    }

    pub async fn upload(&self, file_name: &str, content: Bytes) -> Result<(), EditorError> {
        tracing::info!("uploading {} ({} bytes)", file_name, content.len());
        self.store.update(|s| s.set_status("Uploading..."));
        let response = match self.api.upload(file_name, content).await {
            Ok(response) => response,
            Err(e) => return self.fail(e.into()),
        };
        tracing::info!("session {} opened with {} pages", response.session_id, response.pdf_data.num_pages);
        self.store.update(|s| {
            s.install_document(response.session_id, response.pdf_data);
            s.set_status(response.message);
        });
        self.refresh().await;
        Ok(())
    }

    /// Requests the current page at the current zoom. Returns `None` when a
    /// newer render was issued while this one was in flight.
    pub async fn render_current_page(&self) -> Result<Option<RenderedPage>, EditorError> {
        let ticket = match self.store.update(|s| s.begin_render()) {
            Ok(ticket) => ticket,
            Err(e) => return self.fail(e),
        };
        self.store.update(|s| s.set_status("Loading page..."));
        match self.api.render_page(&ticket.request).await {
            Ok(response) => Ok(self.store.update(|s| {
                let rendered = s.accept_render(&ticket, response.image_data);
                if rendered.is_some() {
                    s.set_status(READY_STATUS);
                }
                rendered
            })),
            Err(e) if self.store.read(|s| s.is_current_render(ticket.token)) => {
                self.store.update(|s| s.abandon_render(ticket.token));
                self.fail(e.into())
            }
            Err(e) => {
                tracing::debug!("ignoring failure of superseded render: {}", e);
                Ok(None)
            }
        }
    }

    /// Re-render after a successful operation; the status line carries any error.
    async fn refresh(&self) {
        let _ = self.render_current_page().await;
    }

    pub async fn navigate_page(&self, delta: i64) -> bool {
        let moved = self.store.update(|s| s.navigate_page(delta));
        if moved {
            self.refresh().await;
        }
        moved
    }

    pub async fn go_to_page(&self, page: usize) -> bool {
        let moved = self.store.update(|s| s.go_to_page(page));
        if moved {
            self.refresh().await;
        }
        moved
    }

    pub async fn zoom_by(&self, delta: f64) -> f64 {
        let zoom = self.store.update(|s| s.apply_zoom_delta(delta));
        if self.store.read(|s| s.has_document()) {
            self.refresh().await;
        }
        zoom
    }

    /// Submits the edit panel for the selected box. Returns the server message.
    pub async fn submit_edit(&self) -> Result<String, EditorError> {
        let request = match self.store.read(|s| s.prepare_edit()) {
            Ok(request) => request,
            Err(e) => return self.fail(e),
        };
        self.store.update(|s| s.set_status("Applying edit..."));
        let response = match self.api.edit_text(&request).await {
            Ok(response) => response,
            Err(e) => return self.fail(e.into()),
        };
        self.store.update(|s| {
            if let Err(e) = s.apply_edit(&request) {
                tracing::warn!("edited box vanished locally: {}", e);
            }
            s.set_status(response.message.clone());
        });
        self.refresh().await;
        Ok(response.message)
    }

    /// Adds `text` at the centre of the visible page. Blank text does nothing
    /// and yields `None`.
    pub async fn add_text(&self, text: &str) -> Result<Option<String>, EditorError> {
        let request = match self.store.read(|s| s.prepare_add(text)) {
            Ok(request) => request,
            Err(EditorError::EmptyText) => return Ok(None),
            Err(e) => return self.fail(e),
        };
        let response = match self.api.add_text(&request).await {
            Ok(response) => response,
            Err(e) => return self.fail(e.into()),
        };
        self.store.update(|s| {
            if s.apply_add(&request, response.text_box_id.clone()).is_none() {
                tracing::debug!("added text has no id; not undoable");
            }
            s.set_status(response.message.clone());
        });
        self.refresh().await;
        Ok(Some(response.message))
    }

    /// Deletes the selected box. Confirmation is the caller's job.
    pub async fn delete_selected(&self) -> Result<String, EditorError> {
        let request = match self.store.read(|s| s.prepare_delete()) {
            Ok(request) => request,
            Err(e) => return self.fail(e),
        };
        let response = match self.api.delete_text(&request).await {
            Ok(response) => response,
            Err(e) => return self.fail(e.into()),
        };
        self.store.update(|s| {
            if let Err(e) = s.apply_delete(&request) {
                tracing::warn!("deleted box vanished locally: {}", e);
            }
            s.set_status(response.message.clone());
        });
        self.refresh().await;
        Ok(response.message)
    }

    pub async fn save(&self) -> Result<String, EditorError> {
        let request = match self.store.read(|s| s.prepare_save()) {
            Ok(request) => request,
            Err(e) => return self.fail(e),
        };
        self.store.update(|s| s.set_status("Saving..."));
        match self.api.save(&request).await {
            Ok(response) => {
                tracing::info!("saved session {}", request.session_id);
                self.store.update(|s| s.set_status(response.message.clone()));
                Ok(response.message)
            }
            Err(e) => self.fail(e.into()),
        }
    }

    /// Saves, then returns the URL the browser should navigate to.
    pub async fn download(&self) -> Result<String, EditorError> {
        self.save().await?;
        let session_id = self.session()?;
        self.store.update(|s| s.set_status("Download complete"));
        Ok(self.api.download_url(&session_id))
    }

    /// Reverts the latest command on the server. `Ok(None)` when there is
    /// nothing to undo.
    pub async fn undo(&self) -> Result<Option<String>, EditorError> {
        let Some(command) = self.store.update(|s| s.history_mut().take_undo()) else {
            return Ok(None);
        };
        let description = command.description();
        match self.revert(command.clone()).await {
            Ok(inverse) => {
                self.store.update(|s| {
                    if let Some(inverse) = inverse {
                        s.history_mut().push_redo(inverse);
                    }
                    s.clear_selection();
                    s.set_status("Undo complete");
                });
                self.refresh().await;
                Ok(Some(description))
            }
            Err(e) => {
                self.store.update(|s| s.history_mut().push_undo(command));
                self.fail(e)
            }
        }
    }

    pub async fn redo(&self) -> Result<Option<String>, EditorError> {
        let Some(command) = self.store.update(|s| s.history_mut().take_redo()) else {
            return Ok(None);
        };
        let description = command.description();
        match self.reapply(command.clone()).await {
            Ok(reapplied) => {
                self.store.update(|s| {
                    if let Some(reapplied) = reapplied {
                        s.history_mut().push_undo(reapplied);
                    }
                    s.clear_selection();
                    s.set_status("Redo complete");
                });
                self.refresh().await;
                Ok(Some(description))
            }
            Err(e) => {
                self.store.update(|s| s.history_mut().push_redo(command));
                self.fail(e)
            }
        }
    }

    /// Sends the inverse of `command`. Returns the command to put on the redo
    /// stack, carrying any id the server assigned along the way.
    async fn revert(&self, command: TextCommand) -> Result<Option<TextCommand>, EditorError> {
        let session_id = self.session()?;
        match command {
            TextCommand::Edit { page, before, after } => {
                self.require_block(page, &after.id)?;
                self.send_edit(&session_id, page, &after, &before).await?;
                self.replace_local(page, before.clone())?;
                Ok(Some(TextCommand::Edit { page, before, after }))
            }
            TextCommand::Add { page, block } => {
                self.require_block(page, &block.id)?;
                self.send_delete(&session_id, page, &block.id).await?;
                self.remove_local(page, &block.id)?;
                Ok(Some(TextCommand::Add { page, block }))
            }
            TextCommand::Delete { page, block } => Ok(self
                .send_readd(&session_id, page, block)
                .await?
                .map(|block| TextCommand::Delete { page, block })),
        }
    }

    async fn reapply(&self, command: TextCommand) -> Result<Option<TextCommand>, EditorError> {
        let session_id = self.session()?;
        match command {
            TextCommand::Edit { page, before, after } => {
                self.require_block(page, &before.id)?;
                self.send_edit(&session_id, page, &before, &after).await?;
                self.replace_local(page, after.clone())?;
                Ok(Some(TextCommand::Edit { page, before, after }))
            }
            TextCommand::Add { page, block } => Ok(self
                .send_readd(&session_id, page, block)
                .await?
                .map(|block| TextCommand::Add { page, block })),
            TextCommand::Delete { page, block } => {
                self.require_block(page, &block.id)?;
                self.send_delete(&session_id, page, &block.id).await?;
                self.remove_local(page, &block.id)?;
                Ok(Some(TextCommand::Delete { page, block }))
            }
        }
    }

    /// A command naming a box that is gone must not reach the server.
    fn require_block(&self, page: usize, id: &str) -> Result<(), EditorError> {
        let exists = self.store.read(|s| s.page(page).is_some_and(|p| p.block(id).is_some()));
        if exists { Ok(()) } else { Err(EditorError::BlockNotFound(id.to_string())) }
    }

    fn replace_local(&self, page: usize, block: TextBlock) -> Result<(), EditorError> {
        let id = block.id.clone();
        if self.store.update(|s| s.replace_block(page, block)) {
            Ok(())
        } else {
            Err(EditorError::BlockNotFound(id))
        }
    }

    fn remove_local(&self, page: usize, id: &str) -> Result<(), EditorError> {
        self.store
            .update(|s| s.remove_block(page, id))
            .map(|_| ())
            .ok_or_else(|| EditorError::BlockNotFound(id.to_string()))
    }

    async fn send_edit(&self, session_id: &str, page: usize, from: &TextBlock, to: &TextBlock) -> Result<(), EditorError> {
        let request = EditTextRequest {
            session_id: session_id.to_string(),
            page_number: page,
            text_box_id: from.id.clone(),
            new_text: to.text.clone(),
            original_text: from.text.clone(),
            font: to.font.clone(),
            font_size: to.size,
            color: to.color.clone(),
            style: style_list(to.bold, to.italic),
            position: to.bbox.origin(),
            bbox: from.bbox,
        };
        self.api.edit_text(&request).await?;
        Ok(())
    }

    async fn send_delete(&self, session_id: &str, page: usize, id: &str) -> Result<(), EditorError> {
        let request = DeleteTextRequest {
            session_id: session_id.to_string(),
            page_number: page,
            text_box_id: id.to_string(),
        };
        self.api.delete_text(&request).await?;
        Ok(())
    }

    /// Adds `block` back at its baseline and inserts it locally under the id
    /// the server assigns, renaming it throughout the history. Without an id
    /// the box can no longer be addressed.
    async fn send_readd(&self, session_id: &str, page: usize, mut block: TextBlock) -> Result<Option<TextBlock>, EditorError> {
        let request = AddTextRequest {
            session_id: session_id.to_string(),
            page_number: page,
            text: block.text.clone(),
            position: Position { x: block.bbox.x0(), y: block.bbox.y1() },
            font: block.font.clone(),
            font_size: block.size,
            color: block.color.clone(),
        };
        let response = self.api.add_text(&request).await?;
        let Some(id) = response.text_box_id else {
            tracing::warn!("server did not return an id for re-added text");
            return Ok(None);
        };
        tracing::debug!("text box {} re-added as {}", block.id, id);
        let old_id = std::mem::replace(&mut block.id, id);
        self.store.update(|s| {
            s.history_mut().rename_block(page, &old_id, &block.id);
            s.insert_block(page, block.clone());
        });
        Ok(Some(block))
    }

    /// Markup for the preview window, with a placeholder per page.
    pub fn print_shell(&self) -> Result<String, EditorError> {
        let shell = self.store.read(|s| {
            s.session_id()
                .map(|id| shell_html(id, s.num_pages(), s.current_page()))
        });
        match shell {
            Some(shell) => {
                self.store.update(|s| s.set_status("Opening print preview..."));
                Ok(shell)
            }
            None => self.fail(EditorError::NoSession),
        }
    }

    /// Renders every page at print zoom, yielding each as it completes.
    /// These requests bypass the render gate so the editor view is unaffected.
    pub fn print_page_images(&self) -> impl Stream<Item = (usize, Result<String, EditorError>)> + '_ {
        let (session_id, num_pages) = self.store.read(|s| (s.session_id().map(str::to_string), s.num_pages()));
        let renders = FuturesUnordered::new();
        if let Some(session_id) = session_id {
            for page in 0..num_pages {
                renders.push(self.print_render(RenderPageRequest {
                    session_id: session_id.clone(),
                    page_number: page,
                    zoom: PRINT_ZOOM,
                }));
            }
        }
        renders
    }

    fn print_render(&self, request: RenderPageRequest) -> impl Future<Output = (usize, Result<String, EditorError>)> + '_ {
        async move {
            let result = self.api.render_page(&request).await;
            (request.page_number, result.map(|r| r.image_data).map_err(EditorError::from))
        }
    }
}
