//! Configuration for the placer module.

use serde::{Deserialize, Serialize};

/// Configuration for the tokio-backed filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Buffer size for file copies in bytes.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
        }
    }
}

impl PlacerConfig {
    /// Sets the buffer size for copies.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacerConfig::default();
        assert_eq!(config.buffer_size, 1024 * 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = PlacerConfig::default().with_buffer_size(4096);
        assert_eq!(config.buffer_size, 4096);
    }
}
