use roster_states::{State, state_assign_impl};
use std::any::Any;

/// Where the users backend lives.
///
/// Commands read this out of their snapshot, so swapping the URL (as the
/// integration tests do with a mock server) reroutes every API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Default config, with `ROSTER_API_URL` taking precedence when set.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var("ROSTER_API_URL") {
            if !url.trim().is_empty() {
                return Self::new(url);
            }
        }
        Self::default()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // On wasm32 the app is served next to its backend, so requests
            // stay same-origin.
            api_base_url: if cfg!(target_arch = "wasm32") {
                "".to_string()
            } else {
                "http://localhost:3000".to_string()
            },
        }
    }
}

impl State for AppConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send + 'static>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
