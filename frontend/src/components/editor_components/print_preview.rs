//! Print preview in a separate window.

use anyhow::Context;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use editor::{
    print_preview::{page_error_html, page_image_html, placeholder_id},
    state::EditorStore,
};
use futures_util::StreamExt;
use web_sys::Document;

use crate::api::{
    browser,
    editor_api::{Editor, editor_controller},
};

pub fn open_print_preview() {
    let editor = editor_controller();
    spawn(async move {
        if let Err(e) = fill_print_preview(&editor).await {
            tracing::error!("print preview failed: {e:#}");
            editor.store().update(|s| s.set_status(format!("Error: {e}")));
        }
    });
}

async fn fill_print_preview(editor: &Editor) -> anyhow::Result<()> {
    let shell = match editor.print_shell() {
        Ok(shell) => shell,
        Err(e) => {
            browser::alert(&format!("Error: {e}"));
            return Ok(());
        }
    };
    let Some(popup) = browser::open_popup()? else {
        browser::alert("Please allow popups to use print preview");
        return Ok(());
    };
    let document = popup.document().context("print window has no document")?;
    document
        .document_element()
        .context("print window has no root element")?
        .set_inner_html(&shell);

    let num_pages = editor.store().read(|s| s.num_pages());
    let mut pages = std::pin::pin!(editor.print_page_images());
    while let Some((page, image)) = pages.next().await {
        let html = match image {
            Ok(image_data) => page_image_html(page, num_pages, &image_data),
            Err(e) => {
                tracing::warn!("print render of page {page} failed: {e}");
                page_error_html(page)
            }
        };
        fill_placeholder(&document, page, &html);
    }
    editor.store().update(|s| s.set_status("Print preview opened"));
    Ok(())
}

fn fill_placeholder(document: &Document, page: usize, html: &str) {
    match document.get_element_by_id(&placeholder_id(page)) {
        Some(placeholder) => placeholder.set_inner_html(html),
        // the user may have closed the window already
        None => tracing::debug!("print placeholder for page {page} is gone"),
    }
}
