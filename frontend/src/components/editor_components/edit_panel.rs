//! Side panel for editing the selected text box.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::MdDelete,
        md_content_icons::{MdAdd, MdRemove},
        md_editor_icons::{MdFormatBold, MdFormatItalic},
        md_navigation_icons::MdClose,
    },
};
use editor::{edit_form::EditForm, state::EditorStore};

use crate::api::editor_api::use_editor_store;
use crate::components::editor_components::actions;
use crate::data_definitions::signal_store::SignalStore;

fn update_form(store: SignalStore, f: impl FnOnce(&mut EditForm)) {
    store.update(|s| {
        if let Some(form) = s.edit_form_mut() {
            f(form);
        }
    });
}

#[component]
pub fn EditPanel() -> Element {
    let store = use_editor_store();
    let Some((form, fonts)) = store.read(|s| s.edit_form().cloned().map(|form| (form, s.fonts().options().to_vec())))
    else {
        return rsx! {};
    };
    let size = form.font_size;
    rsx! {
        div {
            id: "x-edit-panel",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 320px;
                padding: 16px;
                background: white;
                border-left: 1px solid #D1D5DB;
                box-sizing: border-box;
                overflow-y: auto;
            ",

            div {
                style: "display:flex; flex-direction: row; align-items: center;",
                h2 { style: "font-size: 20px; font-weight: 500; margin: 0; flex-grow: 1;", "Edit Text" }
                button {
                    class: "x-icon-button",
                    title: "Close (Esc)",
                    onclick: move |_| store.update(|s| s.clear_selection()),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
                }
            }

            label { class: "x-field-label", "Text" }
            textarea {
                id: "x-edit-text",
                rows: "4",
                style: "width: 100%; font-size: 16px; padding: 6px; box-sizing: border-box;",
                value: "{form.text}",
                oninput: move |e| update_form(store, |f| f.text = e.value()),
            }

            label { class: "x-field-label", "Font" }
            select {
                id: "x-edit-font",
                style: "padding: 6px; font-size: 15px;",
                value: "{form.font}",
                onchange: move |e| update_form(store, |f| f.font = e.value()),
                for font in fonts {
                    option {
                        key: "{font.value}",
                        value: "{font.value}",
                        selected: font.value == form.font,
                        "{font.label}"
                    }
                }
            }

            label { class: "x-field-label", "Size" }
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 6px;",
                button {
                    class: "x-icon-button",
                    title: "Smaller",
                    onclick: move |_| update_form(store, |f| f.adjust_font_size(-1)),
                    Icon { icon: MdRemove, style: "width: 18px; height: 18px;" }
                }
                input {
                    r#type: "number",
                    style: "width: 64px; padding: 4px; font-size: 15px;",
                    value: "{size}",
                    oninput: move |e| {
                        if let Ok(value) = e.value().parse::<i64>() {
                            update_form(store, |f| f.set_font_size(value));
                        }
                    },
                }
                button {
                    class: "x-icon-button",
                    title: "Larger",
                    onclick: move |_| update_form(store, |f| f.adjust_font_size(1)),
                    Icon { icon: MdAdd, style: "width: 18px; height: 18px;" }
                }
            }

            label { class: "x-field-label", "Color" }
            input {
                r#type: "color",
                value: "{form.color}",
                oninput: move |e| update_form(store, |f| f.color = e.value()),
            }

            div {
                style: "display:flex; flex-direction: row; gap: 6px;",
                StyleToggle {
                    active: form.bold,
                    label: "Bold",
                    onclick: move |_| update_form(store, |f| f.bold = !f.bold),
                    Icon { icon: MdFormatBold, style: "width: 20px; height: 20px;" }
                }
                StyleToggle {
                    active: form.italic,
                    label: "Italic",
                    onclick: move |_| update_form(store, |f| f.italic = !f.italic),
                    Icon { icon: MdFormatItalic, style: "width: 20px; height: 20px;" }
                }
            }

            div {
                style: "display:flex; flex-direction: row; gap: 8px; margin-top: 8px;",
                button {
                    id: "x-apply-edit",
                    class: "x-primary-button",
                    onclick: move |_| actions::submit_edit(),
                    "Apply"
                }
                button {
                    id: "x-delete-text",
                    class: "x-danger-button",
                    onclick: move |_| actions::delete_selected(),
                    Icon { icon: MdDelete, style: "width: 18px; height: 18px;" }
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn StyleToggle(active: bool, label: String, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let background = if active { "#E0E7FF" } else { "white" };
    rsx! {
        button {
            title: "{label}",
            style: "
                width: 38px;
                height: 38px;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                background: {background};
                cursor: pointer;
            ",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
