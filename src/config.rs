//! App Configuration
//!
//! Resolves the catalog API base URL at startup.

/// Used when neither a stored override nor a build-time value exists
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Stored override wins over the `MANONG_API_URL` build-time value
    pub fn resolve(stored: Option<String>) -> Self {
        Self::from_sources(stored, option_env!("MANONG_API_URL"))
    }

    fn from_sources(stored: Option<String>, build_time: Option<&str>) -> Self {
        let raw = stored
            .filter(|s| !s.trim().is_empty())
            .or_else(|| build_time.filter(|s| !s.trim().is_empty()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_base_url: raw.trim().trim_end_matches('/').to_string(),
        }
    }
}
