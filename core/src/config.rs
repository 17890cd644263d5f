pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Results requested per listing call. The API allows more on paper, but 50 is
/// the largest page that paginates reliably, and it also bounds the detail
/// call's ID batch.
pub const PAGE_SIZE: usize = 50;

/// Top-level comment threads fetched per video.
pub const COMMENT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:9000/youtube/v3/");
        assert_eq!(config.base_url, "http://localhost:9000/youtube/v3");
    }

    #[test]
    fn default_points_at_google() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE_URL);
    }
}
