use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const API_BASE_URL: &str = "https://api.botsarchive.com";
pub const PHOTO_BASE_URL: &str = "https://www.botsarchive.com/img";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub photo_base_url: String,
    /// Proxy URL applied to every request, e.g. `socks5://127.0.0.1:1080`.
    pub proxy: Option<String>,
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            photo_base_url: PHOTO_BASE_URL.to_string(),
            proxy: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_photo_base_url(mut self, url: impl Into<String>) -> Self {
        self.photo_base_url = url.into();
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub(crate) fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub(crate) fn photo_base(&self) -> &str {
        self.photo_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_test() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_base_url, "https://api.botsarchive.com");
        assert_eq!(cfg.photo_base_url, "https://www.botsarchive.com/img");
        assert_eq!(cfg.proxy, None);
        assert_eq!(cfg.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn partial_deserialize_test() {
        let cfg: ClientConfig =
            serde_json::from_str(r#"{"proxy":"http://127.0.0.1:8080","timeout_ms":5000}"#).unwrap();
        assert_eq!(cfg.api_base_url, API_BASE_URL);
        assert_eq!(cfg.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn sub_second_timeout_test() {
        let cfg = ClientConfig::default().with_timeout(Duration::from_millis(500));
        assert_eq!(cfg.timeout_ms, 500);
        assert_eq!(cfg.timeout(), Duration::from_millis(500));

        // Sub-millisecond remainders are dropped, whole milliseconds kept.
        let cfg = ClientConfig::default().with_timeout(Duration::from_micros(1_500));
        assert_eq!(cfg.timeout(), Duration::from_millis(1));
    }

    #[test]
    fn trailing_slash_test() {
        let cfg = ClientConfig::default()
            .with_api_base_url("http://localhost:8000/")
            .with_photo_base_url("http://localhost:8000/img/");
        assert_eq!(cfg.api_base(), "http://localhost:8000");
        assert_eq!(cfg.photo_base(), "http://localhost:8000/img");
    }
}
