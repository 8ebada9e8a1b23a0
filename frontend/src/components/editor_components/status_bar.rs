use dioxus::prelude::*;
use editor::state::EditorStore;

use crate::api::editor_api::use_editor_store;

#[component]
pub fn StatusBar() -> Element {
    let store = use_editor_store();
    let (status, session, page) = store.read(|s| {
        (s.status().to_string(), s.session_label().unwrap_or_default(), s.page_label().unwrap_or_default())
    });
    let color = if status.starts_with("Error") { "#FCA5A5" } else { "white" };
    rsx! {
        div {
            id: "x-status-bar",
            style: "
                display:flex;
                flex-direction: row;
                gap: 24px;
                padding: 4px 16px;
                background-color: #1C212D;
                color: white;
                font-size: 14px;
                height: 28px;
                align-items: center;
                box-sizing: border-box;
            ",
            span { id: "x-status-message", style: "flex-grow: 1; color: {color};", "{status}" }
            span { id: "x-session-info", "{session}" }
            span { "{page}" }
        }
    }
}
