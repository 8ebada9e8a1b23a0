//! Wiring of the editor controller into the component tree.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use editor::{api::HttpEditorApi, config::EditorConfig, controller::EditorController, state::EditorState};

use crate::{api::browser, data_definitions::signal_store::SignalStore};

pub type Editor = EditorController<HttpEditorApi, SignalStore>;

/// The editor server shares the page's origin; the dev server proxies `/api/`.
fn editor_config() -> EditorConfig {
    match browser::page_origin() {
        Ok(origin) => EditorConfig::from_origin(&origin),
        Err(e) => {
            tracing::warn!("no page origin, using PDF_EDITOR_URL: {e:#}");
            EditorConfig::from_env()
        }
    }
}

/// Creates the state signal and controller for a page and provides both as context.
pub fn use_editor_provider() -> (SignalStore, Editor) {
    let state = use_signal(EditorState::new);
    let store = use_context_provider(|| SignalStore(state));
    let editor = use_context_provider(|| {
        let config = editor_config();
        tracing::info!("editor server at {}", config.base_url());
        EditorController::new(HttpEditorApi::new(config), store)
    });
    (store, editor)
}

pub fn use_editor_store() -> SignalStore {
    use_context::<SignalStore>()
}

/// For event handlers; hooks cannot be called there.
pub fn editor_controller() -> Editor {
    consume_context::<Editor>()
}
