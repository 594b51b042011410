//! Logging infrastructure
//!
//! Console logging for interactive use, with an optional daily-rotating
//! file stream under the work directory. File logs are pruned after 14
//! days at startup.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name prefix of the rotating log stream. The appender produces
/// `pedido.YYYY-MM-DD` files.
const LOG_FILE_PREFIX: &str = "pedido";

/// Days a daily log file is kept before cleanup removes it.
const LOG_RETENTION_DAYS: i64 = 14;

/// Initialize the logging system.
///
/// `RUST_LOG` wins over `level` when set. With a directory the daily
/// file stream is added next to the console output.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;

        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file_appender));

        subscriber.with(console_layer).with(file_layer).init();
    } else {
        subscriber.with(console_layer).init();
    }

    Ok(())
}

/// Remove daily log files older than the retention window.
///
/// Runs once at startup; the tool is not long-lived enough to need a
/// periodic task.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    if !log_dir.exists() {
        return Ok(());
    }

    let cutoff = Local::now() - chrono::Duration::days(LOG_RETENTION_DAYS);
    let prefix = format!("{LOG_FILE_PREFIX}.");

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(date_part) = name.strip_prefix(&prefix)
            && let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(local_datetime) = Local
                .from_local_datetime(&naive_date.and_hms_opt(0, 0, 0).unwrap_or_default())
                .single()
            && local_datetime < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_removes_only_expired_log_files() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("pedido.2020-01-01");
        let current = dir
            .path()
            .join(format!("pedido.{}", chrono::Local::now().format("%Y-%m-%d")));
        let unrelated = dir.path().join("notes.txt");
        std::fs::write(&old, "x").unwrap();
        std::fs::write(&current, "x").unwrap();
        std::fs::write(&unrelated, "x").unwrap();

        cleanup_old_logs(dir.path()).unwrap();

        assert!(!old.exists());
        assert!(current.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn test_cleanup_tolerates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-logs-here");

        assert!(cleanup_old_logs(&missing).is_ok());
    }
}
