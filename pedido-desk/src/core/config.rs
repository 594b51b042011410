use std::path::{Path, PathBuf};

/// Application configuration
///
/// # Environment variables
///
/// Every entry can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PEDIDO_WORK_DIR | ./pedido-data | Work directory (database, logs) |
/// | PEDIDO_EXPORT_DIR | . | Where exported files are written |
/// | CEP_API_URL | https://viacep.com.br | Postal code lookup endpoint |
/// | LOOKUP_TIMEOUT_MS | 5000 | Lookup request timeout (ms) |
/// | LOG_LEVEL | info | Log level |
/// | LOG_TO_FILE | false | Also write daily-rotating log files |
///
/// # Example
///
/// ```ignore
/// PEDIDO_WORK_DIR=/data/pedidos LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the order database and logs
    pub work_dir: String,
    /// Destination directory for PDF and text exports
    pub export_dir: String,
    /// Base URL of the ViaCEP-compatible lookup service
    pub cep_api_url: String,
    /// Timeout for one lookup request (milliseconds)
    pub lookup_timeout_ms: u64,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Whether to keep daily log files under the work directory
    pub log_to_file: bool,
}

impl Config {
    /// Load the configuration from environment variables, falling back
    /// to the defaults above.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("PEDIDO_WORK_DIR").unwrap_or_else(|_| "./pedido-data".into()),
            export_dir: std::env::var("PEDIDO_EXPORT_DIR").unwrap_or_else(|_| ".".into()),
            cep_api_url: std::env::var("CEP_API_URL")
                .unwrap_or_else(|_| "https://viacep.com.br".into()),
            lookup_timeout_ms: std::env::var("LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the directories, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, export_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.export_dir = export_dir.into();
        config
    }

    /// Path of the order database file.
    pub fn db_path(&self) -> PathBuf {
        Path::new(&self.work_dir).join("pedidos.redb")
    }

    /// Directory for daily log files.
    pub fn log_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
