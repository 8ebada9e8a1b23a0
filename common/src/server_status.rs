//! Status envelope present on every JSON response from the editor server.

use serde::{Deserialize, Serialize};

/// `success` may be absent on error bodies, so it defaults to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerStatus {
    pub success: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Body of endpoints whose only payload is a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}
