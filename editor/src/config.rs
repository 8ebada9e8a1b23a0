//! Where the editor server lives.

const DEFAULT_EDITOR_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    base_url: String,
}

impl EditorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Reads `PDF_EDITOR_URL`, falling back to a local server.
    pub fn from_env() -> Self {
        Self::new(std::env::var("PDF_EDITOR_URL").unwrap_or(DEFAULT_EDITOR_URL.to_string()))
    }

    /// In the browser the editor server is the origin that served the page.
    pub fn from_origin(origin: &str) -> Self {
        Self::new(origin)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn download_url(&self, session_id: &str) -> String {
        self.endpoint(&format!("api/download/{session_id}"))
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = EditorConfig::from_origin("http://localhost:8080/");
        assert_eq!(config.endpoint("/api/save"), "http://localhost:8080/api/save");
        assert_eq!(config.download_url("abc"), "http://localhost:8080/api/download/abc");
    }
}
