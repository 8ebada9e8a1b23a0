use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileUpload};

use crate::api::{browser, editor_api::editor_controller};

/// File picker that uploads the chosen PDF and opens it in the editor.
#[component]
pub fn UploadButton() -> Element {
    let on_file_chosen = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let editor = editor_controller();
        spawn(async move {
            let file_name = file.name();
            let content = match file.read_bytes().await {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!("could not read {file_name}: {e}");
                    return browser::alert(&format!("Error: could not read {file_name}"));
                }
            };
            if let Err(e) = editor.upload(&file_name, content).await {
                browser::alert(&format!("Error: {e}"));
            }
        });
    };
    rsx! {
        label {
            id: "x-upload-button",
            style: "
                display:flex;
                align-items: center;
                gap: 6px;
                padding: 6px 12px;
                border-radius: 6px;
                background-color: #4F46E5;
                color: white;
                cursor: pointer;
                font-weight: 500;
            ",
            Icon { icon: MdFileUpload, style: "width: 20px; height: 20px;" }
            "Upload PDF"
            input {
                r#type: "file",
                accept: ".pdf,application/pdf",
                style: "display: none;",
                onchange: on_file_chosen,
            }
        }
    }
}
