//! Page list in the left sidebar.

use dioxus::prelude::*;
use editor::state::EditorStore;

use crate::api::editor_api::use_editor_store;
use crate::components::editor_components::actions;

#[component]
pub fn Thumbnails() -> Element {
    let store = use_editor_store();
    let (num_pages, current_page) = store.read(|s| (s.num_pages(), s.current_page()));
    rsx! {
        div {
            id: "x-thumbnails",
            style: "
                display:flex;
                flex-direction: column;
                gap: 8px;
                width: 120px;
                padding: 12px;
                background-color: #F5F6F8;
                border-right: 1px solid #D1D5DB;
                overflow-y: auto;
                box-sizing: border-box;
            ",
            for page in 0..num_pages {
                PageThumbnail { key: "{page}", page, active: page == current_page }
            }
        }
    }
}

#[component]
fn PageThumbnail(page: usize, active: bool) -> Element {
    let border = if active { "2px solid #4F46E5" } else { "1px solid #D1D5DB" };
    rsx! {
        div {
            class: "x-thumbnail",
            style: "
                display:flex;
                align-items: center;
                justify-content: center;
                height: 120px;
                background: white;
                border: {border};
                border-radius: 4px;
                cursor: pointer;
                color: #374151;
            ",
            onclick: move |_| actions::go_to_page(page),
            "Page {page + 1}"
        }
    }
}
