//! Interactive boxes over the page canvas: hover tooltip, click to select,
//! drag the selected box by its handle.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenWith};
use editor::{
    overlay::{OverlayBox, Point},
    state::EditorStore,
};

use crate::api::editor_api::use_editor_store;

fn pointer(e: &MouseEvent) -> Point {
    let p = e.client_coordinates();
    Point::new(p.x, p.y)
}

#[component]
pub fn TextOverlay() -> Element {
    let store = use_editor_store();
    let boxes = store.read(|s| s.overlay_boxes());
    rsx! {
        div {
            id: "x-text-overlay",
            style: "position: absolute; inset: 0;",
            // one handler pair for whichever box is being dragged
            onmousemove: move |e| {
                if store.peek(|s| s.is_dragging()) {
                    store.update(|s| s.drag_to(pointer(&e)));
                }
            },
            onmouseup: move |_| store.update(|s| s.end_drag()),
            onmouseleave: move |_| store.update(|s| s.end_drag()),
            for text_box in boxes {
                TextBoxRegion { key: "{text_box.id}", text_box }
            }
        }
    }
}

#[component]
fn TextBoxRegion(text_box: OverlayBox) -> Element {
    let store = use_editor_store();
    let rect = text_box.rect;
    let tooltip = text_box.tooltip.clone();
    let id = text_box.id.clone();
    let class = if text_box.selected { "x-text-box x-text-box-selected" } else { "x-text-box" };
    rsx! {
        div {
            class,
            style: "left: {rect.left}px; top: {rect.top}px; width: {rect.width}px; height: {rect.height}px;",
            onclick: move |e| {
                e.stop_propagation();
                if let Err(err) = store.update(|s| s.select_block(&id)) {
                    tracing::warn!("selecting text box failed: {err}");
                }
            },
            div {
                class: "x-text-box-tooltip",
                div { b { "Text: " } "{tooltip.text}" }
                div { b { "Font: " } "{tooltip.font}" }
                div { b { "Size: " } "{tooltip.size}" }
                div { b { "Style: " } "{tooltip.style}" }
                div { b { "Color: " } "{tooltip.color}" }
            }
            if text_box.selected {
                div {
                    class: "x-drag-handle",
                    title: "Drag to move",
                    onmousedown: move |e| {
                        e.stop_propagation();
                        e.prevent_default();
                        store.update(|s| s.begin_drag(pointer(&e)));
                    },
                    onclick: move |e| e.stop_propagation(),
                    Icon { icon: MdOpenWith, style: "width: 14px; height: 14px;" }
                }
            }
        }
    }
}
