//! Client configuration

use std::path::PathBuf;

/// Client configuration for connecting to the Tavola backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:3000"). Endpoint paths are
    /// appended verbatim, so any path prefix belongs here.
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Where the file-backed token store keeps its credential
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            token_path: PathBuf::from(".tavola/token.json"),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TAVOLA_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let mut config = Self::new(base_url);
        if let Some(timeout) = std::env::var("TAVOLA_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(path) = std::env::var("TAVOLA_TOKEN_PATH") {
            config.token_path = PathBuf::from(path);
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the token store path
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = ClientConfig::new("http://backend:4000")
            .with_timeout(5)
            .with_token_path("/tmp/tok.json");
        assert_eq!(config.base_url, "http://backend:4000");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.token_path, PathBuf::from("/tmp/tok.json"));
    }
}
