//! Frontend configuration module
//!
//! Build-time overridable settings for the web client.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL the API client prefixes onto every request path.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("COACH_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_api_root() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with('/') || config.api_base_url.starts_with("http"));
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(
            FrontendConfig::new().api_base_url(),
            FrontendConfig::default().api_base_url()
        );
    }
}
