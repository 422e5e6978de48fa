//! Widget configuration.
//!
//! The endpoint is the only value that has to match the deployment; the two
//! texts only change what the user sees while waiting and after a failed
//! delivery.

/// Default chat endpoint (reference server on its default port).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/chat";

/// Text rendered as a bot message when a submission fails for any reason.
pub const DEFAULT_FALLBACK_TEXT: &str =
    "Sorry, the assistant could not be reached. Please try again.";

/// Label of the typing indicator.
pub const DEFAULT_TYPING_TEXT: &str = "Typing...";

/// Configuration of a single [`ChatWidget`](crate::ChatWidget).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Absolute URL the widget `POST`s submissions to.
    pub endpoint: String,
    /// Bot text shown when a submission fails.
    pub fallback_text: String,
    /// Label of the pending indicator.
    pub typing_text: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
            typing_text: DEFAULT_TYPING_TEXT.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                 | Default                        |
    /// |--------------------------|--------------------------------|
    /// | `CHATLINE_ENDPOINT`      | `http://localhost:5000/chat`   |
    /// | `CHATLINE_FALLBACK_TEXT` | [`DEFAULT_FALLBACK_TEXT`]      |
    /// | `CHATLINE_TYPING_TEXT`   | `Typing...`                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            endpoint: get("CHATLINE_ENDPOINT", DEFAULT_ENDPOINT),
            fallback_text: get("CHATLINE_FALLBACK_TEXT", DEFAULT_FALLBACK_TEXT),
            typing_text: get("CHATLINE_TYPING_TEXT", DEFAULT_TYPING_TEXT),
        }
    }

    /// Replace the endpoint, keeping the other settings.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
