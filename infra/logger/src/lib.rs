//! # Logger
//!
//! Logging bootstrap shared by the workspace binaries.
//! Console output goes to `stderr` so that command output on `stdout` stays pipeable;
//! an optional rolling file sink writes through a non-blocking worker.
//!
//! * Filtering starts from [`LoggerBuilder::level`] and honours `RUST_LOG`, unless an
//!   explicit [`LoggerBuilder::env_filter`] is given.
//! * File output is configured with a [`FileOutput`] (directory, rotation, retention, JSON).
//!
//! ## Example
//!
//! ```rust
//! # use bikemgr_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("xtask")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Rolling file sink settings.
#[derive(Debug, Clone)]
pub struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOutput {
    /// Daily rotation, ten files kept, plain text.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES, json: false }
    }

    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    #[must_use]
    pub const fn json(mut self) -> Self {
        self.json = true;
        self
    }
}

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Builder state before a name is set.
#[derive(Debug)]
pub struct NoName;
/// Builder state once a name is set.
#[derive(Debug)]
pub struct WithName(String);

/// Configures and installs the global tracing subscriber. A name is required before
/// [`LoggerBuilder::init`] becomes available.
#[derive(Debug)]
pub struct LoggerBuilder<N = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Names the logger; the name prefixes rolling log files (`xtask.2026-10-19.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { config: self.config, name: WithName(name.into()) }
    }
}

impl LoggerBuilder<WithName> {
    /// Minimum level emitted when no filter overrides it.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Explicit directives (e.g., `bikemgr_assets=debug`) that replace `RUST_LOG`.
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Adds a rolling file sink.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, output: FileOutput) -> Self {
        self.config.file = Some(output);
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Returns
    /// A [`Logger`] holding the file worker guard, if any. Keep it alive until exit so
    /// buffered lines are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retained files,
    ///   a malformed filter, or no enabled sink.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name) } = self;
        validate(&config, &name)?;

        let filter = env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = match config.file {
            Some(output) => {
                fs::create_dir_all(&output.dir).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("Failed to create path: {}", output.dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(output.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(output.max_files)
                    .build(&output.dir)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if output.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("No logging sinks enabled. Enable console or file output."));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Whether a file sink (and therefore a worker guard) is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

fn validate(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::invalid("Logger name cannot be empty"));
    }

    if config.file.as_ref().is_some_and(|output| output.max_files == 0) {
        return Err(LoggerError::invalid("max_files must be greater than zero"));
    }

    Ok(())
}

fn env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder
                .parse(filter)
                .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{filter}': {e}")))
        },
    )
}
