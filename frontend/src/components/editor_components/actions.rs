//! Editor commands shared by the toolbar and the keyboard shortcuts.
//!
//! Each one runs on its own task. Failures are already on the status line
//! when they come back; user-initiated ones are also alerted.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, consume_toast};
use editor::{shortcuts::HELP_TEXT, state::EditorStore};
use std::time::Duration;

use crate::api::{browser, editor_api::editor_controller};

pub fn navigate(delta: i64) {
    let editor = editor_controller();
    spawn(async move {
        editor.navigate_page(delta).await;
    });
}

pub fn go_to_page(page: usize) {
    let editor = editor_controller();
    spawn(async move {
        editor.go_to_page(page).await;
    });
}

pub fn zoom(delta: f64) {
    let editor = editor_controller();
    spawn(async move {
        let zoom = editor.zoom_by(delta).await;
        tracing::debug!("zoom is now {zoom}");
    });
}

pub fn undo() {
    let editor = editor_controller();
    spawn(async move {
        match editor.undo().await {
            Ok(Some(description)) => tracing::info!("undid {description}"),
            Ok(None) => tracing::debug!("nothing to undo"),
            Err(e) => browser::alert(&format!("Error: {e}")),
        }
    });
}

pub fn redo() {
    let editor = editor_controller();
    spawn(async move {
        match editor.redo().await {
            Ok(Some(description)) => tracing::info!("redid {description}"),
            Ok(None) => tracing::debug!("nothing to redo"),
            Err(e) => browser::alert(&format!("Error: {e}")),
        }
    });
}

pub fn save() {
    let editor = editor_controller();
    let toast_api = consume_toast();
    spawn(async move {
        match editor.save().await {
            Ok(message) => {
                toast_api.info(
                    "PDF saved.".to_string(),
                    ToastOptions::new()
                        .description(message)
                        .duration(Duration::from_secs(5))
                        .permanent(false),
                );
            }
            Err(e) => browser::alert(&format!("Error: {e}")),
        }
    });
}

/// Saves first; the browser then fetches the saved file.
pub fn download() {
    let editor = editor_controller();
    spawn(async move {
        let url = match editor.download().await {
            Ok(url) => url,
            Err(e) => return browser::alert(&format!("Error: {e}")),
        };
        if let Err(e) = browser::navigate_to(&url) {
            tracing::error!("download navigation failed: {e:#}");
        }
    });
}

pub fn delete_selected() {
    let editor = editor_controller();
    if editor.store().read(|s| s.selection().is_none()) {
        browser::alert("Please select a text box first");
        return;
    }
    if !browser::confirm("Delete this text?") {
        return;
    }
    spawn(async move {
        if let Err(e) = editor.delete_selected().await {
            browser::alert(&format!("Error: {e}"));
        }
    });
}

pub fn submit_edit() {
    let editor = editor_controller();
    spawn(async move {
        if let Err(e) = editor.submit_edit().await {
            browser::alert(&format!("Error: {e}"));
        }
    });
}

pub fn show_help() {
    browser::alert(HELP_TEXT);
}
