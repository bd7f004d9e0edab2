//! # Logger
//!
//! Installs the global `tracing` subscriber for native Atlas builds: a compact
//! console layer and, once a directory is given, a daily rolling file layer.
//! JSON output is a file-only option, so it is only reachable after
//! [`LoggerBuilder::dir`].
//!
//! `RUST_LOG` directives are layered on top of the configured level.
//!
//! ```rust
//! # use atlas_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder().name("atlas-shell").level(LevelFilter::DEBUG).init().unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::{BoxedLayer, FileOutput, Sealed};
use std::fs;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Daily files kept on disk before the oldest is removed.
pub const RETAINED_FILES: usize = 7;
const FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct Named(String);

/// File output settings; present only once a directory is chosen.
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct ToFile {
    dir: PathBuf,
    json: bool,
}

mod private {
    use super::LoggerError;
    use tracing_appender::non_blocking::WorkerGuard;

    pub type BoxedLayer<S> = Box<dyn tracing_subscriber::Layer<S> + Send + Sync + 'static>;

    pub trait Sealed {}

    /// File layer a builder state contributes, if any.
    pub trait FileOutput {
        fn layer<S>(&self, name: &str) -> Result<Option<(BoxedLayer<S>, WorkerGuard)>, LoggerError>
        where
            S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>;
    }
}
impl Sealed for NoName {}
impl Sealed for Named {}
impl Sealed for NoFile {}
impl Sealed for ToFile {}

/// Builder for the global subscriber. `init` needs a name.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    name: N,
    file: F,
    console: bool,
    level: LevelFilter,
}

impl<N: Sealed, F: Sealed> LoggerBuilder<N, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Also the prefix of every log file.
    #[must_use]
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { name: Named(name.into()), file: self.file, console: self.console, level: self.level }
    }
}

impl<N: Sealed> LoggerBuilder<N, NoFile> {
    /// Adds a rolling file layer writing into `dir`.
    #[must_use]
    pub fn dir(self, dir: impl Into<PathBuf>) -> LoggerBuilder<N, ToFile> {
        LoggerBuilder {
            name: self.name,
            file: ToFile { dir: dir.into(), json: false },
            console: self.console,
            level: self.level,
        }
    }
}

impl<N: Sealed> LoggerBuilder<N, ToFile> {
    /// Writes file entries as one JSON object per line.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.file.json = enabled;
        self
    }
}

impl FileOutput for NoFile {
    fn layer<S>(&self, _: &str) -> Result<Option<(BoxedLayer<S>, WorkerGuard)>, LoggerError>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        Ok(None)
    }
}

impl FileOutput for ToFile {
    fn layer<S>(&self, name: &str) -> Result<Option<(BoxedLayer<S>, WorkerGuard)>, LoggerError>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fs::create_dir_all(&self.dir).context(format!("Creating {}", self.dir.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(name)
            .filename_suffix(FILE_SUFFIX)
            .max_log_files(RETAINED_FILES)
            .build(&self.dir)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let plain = fmt::layer().with_writer(writer).with_ansi(false);
        let layer = if self.json { plain.json().boxed() } else { plain.boxed() };
        Ok(Some((layer, guard)))
    }
}

impl<F: Sealed + FileOutput> LoggerBuilder<Named, F> {
    /// Installs the global subscriber.
    ///
    /// Hold the returned [`Logger`] until shutdown; dropping it flushes file output.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name or when neither
    ///   console nor file output is enabled.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Named(name) = &self.name;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let file = self.file.layer(name)?;
        if !self.console && file.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Neither console nor file output is enabled".into(),
                context: Some(name.clone().into()),
            });
        }

        let (file_layer, guard) = file.unzip();
        let console_layer = self.console.then(|| fmt::layer().compact().boxed());
        let filter = EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy();

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        Ok(Logger { guard })
    }
}

/// Keeps the file writer alive.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Console on, `INFO`, no file output.
    #[must_use]
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder { name: NoName, file: NoFile, console: true, level: LevelFilter::INFO }
    }

    /// Whether a file layer was installed.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}
