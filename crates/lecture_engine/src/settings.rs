use std::time::Duration;

/// Where the lecture service lives and how long calls may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Bound on a whole upload-and-process request.
    pub submit_timeout: Duration,
    /// Bound on a single question request.
    pub ask_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            submit_timeout: Duration::from_secs(120),
            ask_timeout: Duration::from_secs(120),
        }
    }
}

impl ServiceSettings {
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
