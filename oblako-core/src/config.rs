//! Client configuration, injected at construction and read-only afterwards.

/// Connection settings for the backend service.
///
/// Built once at startup (CLI flags or defaults) and handed to
/// [`ApiClient::new`](crate::ApiClient::new). Nothing mutates it after that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, without a trailing slash.
    pub base_url: String,
    /// User identifier sent with every conversation message.
    pub user_id: String,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000/api";
    pub const DEFAULT_USER_ID: &'static str = "telegram_user";

    /// Create a config, normalizing away any trailing slash on the base URL
    /// so path concatenation stays predictable.
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            user_id: user_id.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL, Self::DEFAULT_USER_ID)
    }
}
