//! Client Configuration

/// Path of the list service relative to the page origin
pub const API_PATH: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute base URL, e.g. `http://127.0.0.1:8080/api`
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Service mounted under [`API_PATH`] on the page's own origin
    pub fn from_location() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(format!("{}{}", origin, API_PATH))
    }
}
