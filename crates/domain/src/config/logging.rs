use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Level as an env-filter directive, falling back to `info` when blank.
    pub fn filter_directive(&self) -> String {
        let level = self.level.trim();
        if level.is_empty() {
            default_log_level()
        } else {
            level.to_ascii_lowercase()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
