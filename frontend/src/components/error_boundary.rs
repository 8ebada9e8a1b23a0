//! Recovery view for failures while drawing the page.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use editor::state::EditorStore;

use crate::api::editor_api::{Editor, use_editor_store};

/// Wraps the page view. On failure the editor state is kept: the user sees
/// where they were and can request the page again.
#[component]
pub fn PageViewBoundary(children: Element) -> Element {
    let store = use_editor_store();
    let editor = use_context::<Editor>();
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                let error_txt = match errors.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                tracing::error!("page view failed: {error_txt}");
                let (page_label, status) =
                    store.peek(|s| (s.page_label().unwrap_or_default(), s.status().to_string()));
                let editor = editor.clone();
                rsx! {
                    div {
                        id: "x-page-view-error",
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            gap: 8px;
                            width: 100%;
                            height: 100%;
                        ",
                        h2 { style: "color: #B91C1C; margin: 0;", "Could not show the page" }
                        p { style: "color: #374151; margin: 0;", "{page_label}" }
                        p { style: "color: #6B7280; margin: 0;", "Status: {status}" }
                        pre {
                            style: "color: darkred; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; max-width: 500px; max-height: 300px; overflow-y: auto; text-wrap: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "padding: 8px 16px; border: none; border-radius: 4px; background: #4F46E5; color: white; cursor: pointer;",
                            onclick: move |_| {
                                errors.clear_errors();
                                let editor = editor.clone();
                                spawn(async move {
                                    if let Err(e) = editor.render_current_page().await {
                                        tracing::warn!("page reload failed: {e}");
                                    }
                                });
                            },
                            "Reload page"
                        }
                    }
                }
            },
            div { width: "100%", height: "100%", {children} }
        }
    }
}
