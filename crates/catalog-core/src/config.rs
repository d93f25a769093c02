//! Configuration
//!
//! The console needs one externally configured value: the API base URL,
//! used both for requests and for absolute links to uploaded assets.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

// Characters escaped inside one path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode one path segment (ids and slugs)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl AppConfig {
    pub fn new(api_base: &str) -> Self {
        Self { api_base: api_base.trim().trim_end_matches('/').to_string() }
    }

    /// Build from an optional environment value; blank means default
    pub fn from_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Self::default(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Absolute URL of an endpoint path such as `/courses/1`
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }

    /// Absolute URL of an uploaded asset; absolute inputs pass through
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            path.to_string()
        } else {
            self.endpoint(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        assert_eq!(AppConfig::from_env(None).api_base(), DEFAULT_API_URL);
        assert_eq!(AppConfig::from_env(Some("  ")).api_base(), DEFAULT_API_URL);
        assert_eq!(AppConfig::from_env(Some("https://api.example.com/")).api_base(), "https://api.example.com");
    }

    #[test]
    fn test_urls() {
        let config = AppConfig::new("https://api.example.com");
        assert_eq!(config.endpoint("/courses/1"), "https://api.example.com/courses/1");
        assert_eq!(config.asset_url("static/a.png"), "https://api.example.com/static/a.png");
        assert_eq!(config.asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("abc-123"), "abc-123");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }
}
