//! Client API calls for the editor server endpoints.

mod http_client;
pub use http_client::HttpEditorApi;

use bytes::Bytes;
use common::{
    fonts::FontInfo,
    page_render::{RenderPageRequest, RenderPageResponse},
    save::SaveRequest,
    server_status::MessageResponse,
    text_operations::{AddTextRequest, AddTextResponse, DeleteTextRequest, EditTextRequest},
    upload::UploadResponse,
};

use crate::error::ApiError;

/// The editor server as seen by the controller.
///
/// Futures are not required to be `Send`: in the browser every call runs on
/// the single UI thread.
#[allow(async_fn_in_trait)]
pub trait EditorApi {
    async fn list_fonts(&self) -> Result<Vec<FontInfo>, ApiError>;

    async fn upload(&self, file_name: &str, content: Bytes) -> Result<UploadResponse, ApiError>;

    async fn render_page(&self, request: &RenderPageRequest) -> Result<RenderPageResponse, ApiError>;

    async fn edit_text(&self, request: &EditTextRequest) -> Result<MessageResponse, ApiError>;

    async fn add_text(&self, request: &AddTextRequest) -> Result<AddTextResponse, ApiError>;

    async fn delete_text(&self, request: &DeleteTextRequest) -> Result<MessageResponse, ApiError>;

    async fn save(&self, request: &SaveRequest) -> Result<MessageResponse, ApiError>;

    /// Browser navigation target that streams the saved file.
    fn download_url(&self, session_id: &str) -> String;
}
