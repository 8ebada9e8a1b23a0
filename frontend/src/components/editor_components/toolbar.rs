//! Top toolbar of the editor page.

use common::editor_const::ZOOM_STEP;
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon, IconShape,
    icons::{
        md_action_icons::{MdHelp, MdPrint, MdZoomIn, MdZoomOut},
        md_content_icons::{MdRedo, MdSave, MdUndo},
        md_editor_icons::MdTextFields,
        md_file_icons::MdFileDownload,
        md_navigation_icons::{MdChevronLeft, MdChevronRight},
    },
};
use editor::state::EditorStore;

use crate::api::editor_api::use_editor_store;
use crate::components::editor_components::{actions, print_preview::open_print_preview, upload_button::UploadButton};

#[component]
pub fn Toolbar(mut show_add_modal: Signal<bool>) -> Element {
    let store = use_editor_store();
    let (has_document, page_label, zoom_label, can_undo, can_redo) = store.read(|s| {
        (
            s.has_document(),
            s.page_label().unwrap_or_else(|| "No document".to_string()),
            s.zoom_label(),
            s.history().can_undo(),
            s.history().can_redo(),
        )
    });
    rsx! {
        div {
            id: "x-toolbar",
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 8px 16px;
                background-color: #1C212D;
                color: white;
                height: 56px;
                box-sizing: border-box;
            ",

            div {
                style: "font-size: 20px; font-weight: 500; margin-right: 16px;",
                "PDF Text Editor"
            }
            UploadButton {}

            ToolbarDivider {}
            ToolbarButton { icon: MdChevronLeft, label: "Previous page", disabled: !has_document, onclick: move |_| actions::navigate(-1) }
            span { id: "x-page-info", style: "min-width: 100px; text-align: center;", "{page_label}" }
            ToolbarButton { icon: MdChevronRight, label: "Next page", disabled: !has_document, onclick: move |_| actions::navigate(1) }

            ToolbarDivider {}
            ToolbarButton { icon: MdZoomOut, label: "Zoom out", disabled: false, onclick: move |_| actions::zoom(-ZOOM_STEP) }
            span { id: "x-zoom-level", style: "min-width: 50px; text-align: center;", "{zoom_label}" }
            ToolbarButton { icon: MdZoomIn, label: "Zoom in", disabled: false, onclick: move |_| actions::zoom(ZOOM_STEP) }

            ToolbarDivider {}
            ToolbarButton {
                icon: MdTextFields,
                label: "Add text",
                disabled: !has_document,
                onclick: move |_| show_add_modal.set(true),
            }
            ToolbarButton { icon: MdUndo, label: "Undo (Ctrl+Z)", disabled: !can_undo, onclick: move |_| actions::undo() }
            ToolbarButton { icon: MdRedo, label: "Redo (Ctrl+Y)", disabled: !can_redo, onclick: move |_| actions::redo() }

            // empty space
            div {
                style: "flex-grow:1;"
            }

            ToolbarButton { icon: MdSave, label: "Save (Ctrl+S)", disabled: !has_document, onclick: move |_| actions::save() }
            ToolbarButton { icon: MdFileDownload, label: "Download", disabled: !has_document, onclick: move |_| actions::download() }
            ToolbarButton { icon: MdPrint, label: "Print preview", disabled: !has_document, onclick: move |_| open_print_preview() }
            ToolbarButton { icon: MdHelp, label: "Help (F1)", disabled: false, onclick: move |_| actions::show_help() }
        }
    }
}

#[component]
fn ToolbarDivider() -> Element {
    rsx! {
        div { style: "width: 1px; height: 28px; background-color: #4B5563; margin: 0 4px;" }
    }
}

#[component]
fn ToolbarButton<T: IconShape + Clone + PartialEq + 'static>(
    icon: T,
    label: String,
    disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "x-toolbar-button",
            title: "{label}",
            disabled,
            style: "
                width: 38px;
                height: 38px;
                display: flex;
                align-items: center;
                justify-content: center;
                border: none;
                border-radius: 6px;
                background: none;
                color: white;
                cursor: pointer;
            ",
            onclick: move |e| onclick.call(e),
            Icon { icon: icon, style: "width: 24px; height: 24px;" }
        }
    }
}
