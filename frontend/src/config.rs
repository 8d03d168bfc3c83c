/// Backend used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Dashboard summary poll interval
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 30_000;

/// Application configuration, fixed at build time
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub refresh_interval_ms: u32,
}

impl AppConfig {
    /// Read configuration from the compile-time environment.
    ///
    /// `API_BASE_URL=https://debts.example.org trunk build` bakes the backend
    /// address into the bundle.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            api_base_url,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::with_base_url("http://api.local:9000/");
        assert_eq!(config.api_base_url, "http://api.local:9000");
        assert_eq!(config.refresh_interval_ms, 30_000);
    }

    #[test]
    fn test_blank_base_url_uses_default() {
        assert_eq!(AppConfig::with_base_url("  ").api_base_url, DEFAULT_API_BASE_URL);
    }
}
