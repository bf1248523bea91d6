//! Log sinks for the binary.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::ClientConfig;

/// Setup logging to a per-session file, plus stderr when `verbose`.
///
/// Logs land in `<log dir>/<session>/client.log`. The returned guard flushes
/// the file writer when dropped, so keep it alive until exit.
pub fn setup_logging(config: &ClientConfig, verbose: bool) -> Result<WorkerGuard> {
    let log_dir = match &config.log_dir {
        Some(dir) => dir.clone(),
        None => log_directory(),
    };

    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = verbose.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for gauge logs.
///
/// - macOS: `~/Library/Caches/combat-gauge/logs`
/// - Linux: `~/.cache/combat-gauge/logs` (or `$XDG_CACHE_HOME/combat-gauge/logs`)
/// - Windows: `%LOCALAPPDATA%\combat-gauge\cache\logs`
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "combat-gauge")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("combat-gauge"))
        .join("logs")
}
