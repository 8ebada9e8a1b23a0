use serde::{Deserialize, Serialize};

use crate::document::PdfData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub pdf_data: PdfData,
    #[serde(default)]
    pub message: String,
}
