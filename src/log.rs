// src/log.rs
//
// File logging for both binaries. The `logf!` / `logd!` / `loge!` macros
// forward to `tracing`; `init` installs the subscriber that writes them to
// `.store/debug.log` (optionally mirrored to stderr).

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};
use crate::error::{Error, Result};

#[doc(hidden)]
pub use tracing;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct LogOptions {
    pub dir: PathBuf,
    pub file: &'static str,
    /// Duplicate events to stderr as well as the file.
    pub emit_stderr: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(STORE_DIR),
            file: LOG_FILE,
            emit_stderr: false,
            default_filter: "info",
        }
    }
}

/// Install the global subscriber. Later calls are no-ops that return the
/// path chosen by the first one.
pub fn init(opts: LogOptions) -> Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    std::fs::create_dir_all(&opts.dir).map_err(|e| Error::io(&opts.dir, e))?;
    let path = opts.dir.join(opts.file);

    let appender = tracing_appender::rolling::never(&opts.dir, opts.file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(opts.default_filter));

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
    let stderr_layer = opts
        .emit_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    let _ = LOG_PATH.set(path.clone());
    Ok(path)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
