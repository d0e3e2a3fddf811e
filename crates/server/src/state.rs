use crate::config::ServerConfig;
use dashmap::DashMap;
use export::{HttpPdfEngine, PdfEngine};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,

    /// PDF engine (shared across requests)
    pub pdf_engine: Arc<dyn PdfEngine>,
}

impl ServerState {
    /// Create new server state with the HTTP PDF engine from config
    pub fn new(config: ServerConfig) -> Self {
        let pdf_engine = Arc::new(HttpPdfEngine::new(config.pdf_engine_url.clone()));
        Self::with_engine(config, pdf_engine)
    }

    /// Create server state with an explicit engine (used by tests)
    pub fn with_engine(config: ServerConfig, pdf_engine: Arc<dyn PdfEngine>) -> Self {
        Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            pdf_engine,
        }
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        // Check limit
        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_enforced_per_key() {
        let config = ServerConfig {
            rate_limit_per_minute: 2,
            ..Default::default()
        };
        let state = ServerState::new(config);

        assert!(state.check_rate_limit("k1"));
        assert!(state.check_rate_limit("k1"));
        assert!(!state.check_rate_limit("k1"));
        // Separate key has its own window
        assert!(state.check_rate_limit("k2"));
    }
}
