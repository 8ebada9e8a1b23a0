use bytes::Bytes;
use common::{
    fonts::{FontInfo, FontListResponse},
    page_render::{RenderPageRequest, RenderPageResponse},
    save::SaveRequest,
    server_status::{MessageResponse, ServerStatus},
    text_operations::{AddTextRequest, AddTextResponse, DeleteTextRequest, EditTextRequest},
    upload::UploadResponse,
};
use reqwest::{StatusCode, multipart};
use serde::{Serialize, de::DeserializeOwned};

use crate::{api::EditorApi, config::EditorConfig, error::ApiError};

#[derive(Debug, Clone)]
pub struct HttpEditorApi {
    client: reqwest::Client,
    config: EditorConfig,
}

impl HttpEditorApi {
    pub fn new(config: EditorConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        decode_response(response).await
    }
}

impl EditorApi for HttpEditorApi {
    async fn list_fonts(&self) -> Result<Vec<FontInfo>, ApiError> {
        let response = self.client.get(self.config.endpoint("api/fonts/list")).send().await?;
        let body: FontListResponse = decode_response(response).await?;
        Ok(body.fonts)
    }

    async fn upload(&self, file_name: &str, content: Bytes) -> Result<UploadResponse, ApiError> {
        let part = multipart::Part::bytes(content.to_vec()).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        let response = self.client.post(self.config.endpoint("api/upload")).multipart(form).send().await?;
        decode_response(response).await
    }

    async fn render_page(&self, request: &RenderPageRequest) -> Result<RenderPageResponse, ApiError> {
        self.post_json("api/page/render", request).await
    }

    async fn edit_text(&self, request: &EditTextRequest) -> Result<MessageResponse, ApiError> {
        self.post_json("api/text/edit", request).await
    }

    async fn add_text(&self, request: &AddTextRequest) -> Result<AddTextResponse, ApiError> {
        self.post_json("api/text/add", request).await
    }

    async fn delete_text(&self, request: &DeleteTextRequest) -> Result<MessageResponse, ApiError> {
        self.post_json("api/text/delete", request).await
    }

    async fn save(&self, request: &SaveRequest) -> Result<MessageResponse, ApiError> {
        self.post_json("api/save", request).await
    }

    fn download_url(&self, session_id: &str) -> String {
        self.config.download_url(session_id)
    }
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    decode_body(status, &body)
}

/// Error bodies are `{error}` with or without `success: false`, and usually a
/// non-2xx status. Anything that is not an explicit success is an error.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<ServerStatus>(body) {
        Ok(server_status) if server_status.success && status.is_success() => Ok(serde_json::from_str(body)?),
        Ok(server_status) => {
            let message = server_status.error.unwrap_or_else(|| format!("Server returned {status}"));
            tracing::warn!("editor server error ({}): {}", status, message);
            Err(ApiError::server(message))
        }
        Err(e) if status.is_success() => Err(ApiError::Decode(e)),
        Err(_) => Err(ApiError::server(format!("Server returned {status}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_body_is_decoded() {
        let body = r#"{"success": true, "image_data": "data:image/png;base64,AAAA"}"#;
        let r: RenderPageResponse = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(r.image_data, "data:image/png;base64,AAAA");
    }

    #[test]
    fn error_without_success_flag_uses_error_text() {
        let body = r#"{"error": "Invalid session"}"#;
        let err = decode_body::<MessageResponse>(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.to_string(), "Invalid session");
    }

    #[test]
    fn explicit_failure_on_ok_status_is_an_error() {
        let body = r#"{"success": false, "error": "Only PDF files are allowed"}"#;
        let err = decode_body::<UploadResponse>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ApiError::Server { ref message } if message == "Only PDF files are allowed"));
    }

    #[test]
    fn non_json_error_page_reports_status() {
        let err = decode_body::<MessageResponse>(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Server returned 502 Bad Gateway");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let body = r#"{"success": true}"#;
        let err = decode_body::<RenderPageResponse>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
