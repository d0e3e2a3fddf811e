use serde::{Deserialize, Serialize};

/// Configuration for the ingest stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestConfig {
    /// Maximum accepted upload size in bytes. `None` disables the check.
    pub max_payload_bytes: Option<usize>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            // 10 MiB, matching the HTTP layer's default body limit.
            max_payload_bytes: Some(10 * 1024 * 1024),
        }
    }
}
