//! Core module with configuration and environment setup
//!
//! # Module structure
//!
//! - [`Config`] - application configuration
//! - [`logging`] - tracing setup and log file retention
//! - [`setup_environment`] - one-call startup wiring

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::{cleanup_old_logs, init_logging};

/// Load `.env`, read the configuration, create the work and export
/// directories and bring up logging. Call once at startup, before
/// anything that logs.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    std::fs::create_dir_all(&config.export_dir)?;

    let log_dir = config.log_dir();
    let file_dir = config.log_to_file.then_some(log_dir.as_path());
    init_logging(&config.log_level, file_dir)?;

    if config.log_to_file {
        cleanup_old_logs(&log_dir)?;
    }

    Ok(config)
}
