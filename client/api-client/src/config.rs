/// Configuration for the backend API client
///
/// Loads configuration from environment variables.
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    /// Reads `LUMEN_API_URL` and `LUMEN_API_TIMEOUT_SECS`, falling back
    /// to the local development backend.
    pub fn from_env() -> Self {
        let base_url = std::env::var("LUMEN_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let timeout_secs = std::env::var("LUMEN_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_timeout_secs);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        std::env::remove_var("LUMEN_API_URL");
        std::env::remove_var("LUMEN_API_TIMEOUT_SECS");

        let config = ApiConfig::from_env();

        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
