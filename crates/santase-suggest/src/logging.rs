use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Keeps the background writer alive until the process exits.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub log_path: Option<PathBuf>,
}

/// Installs the global subscriber. Logs go to `log_file` when given, otherwise to stderr.
pub fn init_logging(logging: &LoggingConfig, log_file: Option<&Path>) -> Result<LoggingGuard> {
    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let (writer, guard, log_path) = match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating log directory at {}", dir.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("creating log file at {}", path.display()))?;
            let (writer, guard) = non_blocking::NonBlockingBuilder::default()
                .lossy(false)
                .finish(file);
            (writer, guard, Some(path.to_path_buf()))
        }
        None => {
            let (writer, guard) = non_blocking::NonBlockingBuilder::default()
                .lossy(false)
                .finish(std::io::stderr());
            (writer, guard, None)
        }
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer);

    // A global subscriber may already be installed when running under tests.
    if logging.json {
        let subscriber = builder.json().with_current_span(false).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = builder.with_ansi(false).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    Ok(LoggingGuard {
        _guard: guard,
        log_path,
    })
}
