//! The rendered page image with its text box overlay on top.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use editor::state::EditorStore;

use crate::api::{
    browser::{self, PAGE_CANVAS_ID},
    editor_api::use_editor_store,
};
use crate::components::{editor_components::text_overlay::TextOverlay, loading::LoadingIndicator};

#[component]
pub fn PageCanvas() -> Element {
    let store = use_editor_store();
    // Only a newly accepted render triggers a repaint, not every state change.
    let rendered_token = use_memo(move || store.read(|s| s.rendered().map(|r| r.token)));
    use_effect(move || {
        if rendered_token().is_none() {
            return;
        }
        let Some(rendered) = store.peek(|s| s.rendered().cloned()) else {
            return;
        };
        let token = rendered.token;
        spawn(async move {
            if let Err(e) = browser::paint_page(store, rendered).await {
                tracing::error!("painting page failed: {e:#}");
                store.update(|s| {
                    s.abandon_render(token);
                    s.set_status(format!("Error: {e}"));
                });
            }
        });
    });

    let (has_document, loading) = store.read(|s| (s.has_document(), s.is_page_loading()));
    if !has_document {
        return rsx! {
            div {
                id: "x-no-document",
                style: "
                    display:flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    height: 100%;
                    color: #6B7280;
                    font-size: 22px;
                ",
                "Upload a PDF to start editing"
            }
        };
    }

    rsx! {
        div {
            id: "x-canvas-container",
            style: "
                position: relative;
                display: inline-block;
                margin: 24px;
                box-shadow: 0 2px 8px rgba(0,0,0,0.15);
                background: white;
            ",
            if loading {
                LoadingIndicator {}
            }
            canvas { id: PAGE_CANVAS_ID, style: "display: block;" }
            TextOverlay {}
        }
    }
}
