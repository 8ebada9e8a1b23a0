//! Thin wrappers over the browser APIs the editor needs.

use anyhow::{Context, anyhow};
use dioxus::logger::tracing;
use editor::state::{EditorStore, RenderedPage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Window};

use crate::data_definitions::signal_store::SignalStore;

pub const PAGE_CANVAS_ID: &str = "x-page-canvas";

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

fn window() -> anyhow::Result<Window> {
    web_sys::window().context("no window")
}

pub fn page_origin() -> anyhow::Result<String> {
    window()?.location().origin().map_err(js_error)
}

/// Whether keyboard focus is in a text input or textarea.
pub fn text_field_focused() -> bool {
    let tag = window()
        .ok()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(|e| e.tag_name());
    matches!(tag.as_deref(), Some("INPUT" | "TEXTAREA"))
}

pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(js_error));
    if let Err(e) = shown {
        tracing::error!("alert failed: {e:#}; message was: {message}");
    }
}

/// `false` when the dialog could not be shown.
pub fn confirm(message: &str) -> bool {
    match window().and_then(|w| w.confirm_with_message(message).map_err(js_error)) {
        Ok(answer) => answer,
        Err(e) => {
            tracing::error!("confirm failed: {e:#}");
            false
        }
    }
}

pub fn navigate_to(url: &str) -> anyhow::Result<()> {
    window()?.location().set_href(url).map_err(js_error).context("navigating")
}

/// `Ok(None)` when the browser blocked the popup.
pub fn open_popup() -> anyhow::Result<Option<Window>> {
    window()?
        .open_with_url_and_target_and_features("", "_blank", "width=800,height=600")
        .map_err(js_error)
}

/// Decodes the rendered image and draws it on the page canvas at its natural
/// size. Does nothing if a newer render was requested while decoding.
pub async fn paint_page(store: SignalStore, rendered: RenderedPage) -> anyhow::Result<()> {
    let image = HtmlImageElement::new().map_err(js_error)?;
    image.set_src(&rendered.image_data);
    JsFuture::from(image.decode())
        .await
        .map_err(js_error)
        .context("decoding page image")?;
    if !store.peek(|s| s.is_current_render(rendered.token)) {
        tracing::debug!("page {} decoded after a newer render, dropped", rendered.page);
        return Ok(());
    }

    let canvas: HtmlCanvasElement = window()?
        .document()
        .context("no document")?
        .get_element_by_id(PAGE_CANVAS_ID)
        .context("page canvas is not mounted")?
        .dyn_into()
        .map_err(|_| anyhow!("{PAGE_CANVAS_ID} is not a canvas"))?;
    let (width, height) = (image.natural_width(), image.natural_height());
    canvas.set_width(width);
    canvas.set_height(height);
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_error)?
        .context("canvas has no 2d context")?
        .dyn_into()
        .map_err(|_| anyhow!("unexpected 2d context type"))?;
    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(js_error)?;

    store.update(|s| s.complete_paint(rendered.token, width, height));
    Ok(())
}
