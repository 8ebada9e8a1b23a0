use dioxus::logger::tracing;
use dioxus::prelude::*;
use editor::{
    shortcuts::{KeyContext, ShortcutAction, ShortcutMap},
    state::EditorStore,
};

use crate::api::{browser, editor_api::use_editor_provider};
use crate::components::editor_components::{
    actions, add_text_modal::AddTextModal, edit_panel::EditPanel, page_canvas::PageCanvas, status_bar::StatusBar,
    thumbnails::Thumbnails, toolbar::Toolbar,
};
use crate::components::error_boundary::PageViewBoundary;

/// Editor page
#[component]
pub fn EditorPage() -> Element {
    let (store, editor) = use_editor_provider();
    let mut show_add_modal = use_signal(|| false);

    use_future(move || {
        let editor = editor.clone();
        async move { editor.load_fonts().await }
    });

    let onkeydown = move |e: Event<KeyboardData>| {
        let key = e.key().to_string();
        let ctrl = e.modifiers().ctrl() || e.modifiers().meta();
        let context = KeyContext {
            edit_panel_open: store.peek(|s| s.edit_form().is_some()),
            add_modal_open: *show_add_modal.peek(),
            in_text_field: browser::text_field_focused(),
        };
        let Some(action) = ShortcutMap::resolve(&key, ctrl, context) else {
            return;
        };
        tracing::debug!("shortcut {key} -> {action:?}");
        if action != ShortcutAction::ClosePanels {
            e.prevent_default();
        }
        match action {
            ShortcutAction::Undo => actions::undo(),
            ShortcutAction::Redo => actions::redo(),
            ShortcutAction::Save => actions::save(),
            ShortcutAction::PreviousPage => actions::navigate(-1),
            ShortcutAction::NextPage => actions::navigate(1),
            ShortcutAction::ShowHelp => actions::show_help(),
            ShortcutAction::ClosePanels => {
                store.update(|s| s.clear_selection());
                show_add_modal.set(false);
            }
        }
    };

    let has_document = store.read(|s| s.has_document());
    rsx! {
        Title { "PDF Text Editor" }
        div {
            id: "x-editor-page",
            tabindex: "0",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100vh;
                outline: none;
                font-family: Roboto, Arial, sans-serif;
            ",
            onkeydown: onkeydown,

            Toolbar { show_add_modal }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0;
                ",
                if has_document {
                    Thumbnails {}
                }
                div {
                    id: "x-page-area",
                    style: "
                        flex-grow: 1;
                        overflow: auto;
                        background-color: #E5E7EB;
                        text-align: center;
                    ",
                    PageViewBoundary {
                        PageCanvas {}
                    }
                }
                EditPanel {}
            }

            StatusBar {}
            AddTextModal { show: show_add_modal }
        }
    }
}
