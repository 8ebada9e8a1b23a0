use dioxus::prelude::*;

use crate::api::{browser, editor_api::editor_controller};

/// Dialog for adding a new line of text at the centre of the visible page.
#[component]
pub fn AddTextModal(mut show: Signal<bool>) -> Element {
    let mut text = use_signal(String::new);
    if !show() {
        return rsx! {};
    }
    let add = move |_: MouseEvent| {
        let editor = editor_controller();
        let new_text = text.read().clone();
        spawn(async move {
            match editor.add_text(&new_text).await {
                Ok(Some(_)) => {
                    text.set(String::new());
                    show.set(false);
                }
                // blank input: nothing was sent
                Ok(None) => {}
                Err(e) => browser::alert(&format!("Error: {e}")),
            }
        });
    };
    rsx! {
        div {
            id: "x-add-text-modal",
            class: "x-modal-backdrop",
            onclick: move |_| show.set(false),
            div {
                class: "x-modal",
                onclick: move |e| e.stop_propagation(),
                h2 { style: "font-size: 20px; font-weight: 500; margin: 0 0 12px 0;", "Add Text" }
                textarea {
                    id: "x-add-text-input",
                    rows: "4",
                    autofocus: true,
                    placeholder: "Type the text to add",
                    style: "width: 100%; font-size: 16px; padding: 6px; box-sizing: border-box;",
                    value: "{text}",
                    oninput: move |e| text.set(e.value()),
                }
                div {
                    style: "display:flex; flex-direction: row; justify-content: flex-end; gap: 8px; margin-top: 12px;",
                    button { class: "x-secondary-button", onclick: move |_| show.set(false), "Cancel" }
                    button { class: "x-primary-button", onclick: add, "Add" }
                }
            }
        }
    }
}
