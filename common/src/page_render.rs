use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPageRequest {
    pub session_id: String,
    pub page_number: usize,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPageResponse {
    /// `data:image/png;base64,...` URL ready to be used as an image source.
    pub image_data: String,
}
