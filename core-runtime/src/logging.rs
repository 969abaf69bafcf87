//! Subscriber setup for the gallery core.
//!
//! Events go to stdout in one of three [`LogFormat`]s. When the host hands
//! over a [`LoggerSink`] (Logcat, OSLog, a test recorder) every event that
//! passes both the filter and the sink's own level is mirrored to it.
//!
//! ```ignore
//! use bridge_traits::{ConsoleLogger, LogLevel};
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use std::sync::Arc;
//!
//! init_logging(
//!     LoggingConfig::default()
//!         .with_format(LogFormat::Compact)
//!         .with_level(LogLevel::Debug)
//!         .with_logger_sink(Arc::new(ConsoleLogger::default())),
//! )?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::logging::{LogEntry, LogLevel, LoggerSink};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{
    filter::EnvFilter,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

/// Crates whose events pass the default filter at the configured level.
const WORKSPACE_CRATES: &[&str] = &[
    "galeria_workspace",
    "bridge_desktop",
    "core_runtime",
    "core_gallery",
    "core_playback",
    "core_navigation",
    "core_service",
];

/// Everything outside [`WORKSPACE_CRATES`] is held at this level.
const FOREIGN_LEVEL: &str = "warn";

/// Stdout rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, colored
    Pretty,
    /// One JSON object per event
    Json,
    /// One line per event
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

#[derive(Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Level applied to the workspace crates
    pub level: LogLevel,
    /// Full `EnvFilter` directive string; replaces the per-crate default
    pub filter: Option<String>,
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Emit span open/close lines
    pub enable_spans: bool,
    pub display_target: bool,
    /// Thread ids and names, useful to spot the audio init worker
    pub display_thread_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            logger_sink: None,
            enable_spans: false,
            display_target: true,
            display_thread_info: false,
        }
    }
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("format", &self.format)
            .field("level", &self.level)
            .field("filter", &self.filter)
            .field("logger_sink", &self.logger_sink.is_some())
            .field("enable_spans", &self.enable_spans)
            .field("display_target", &self.display_target)
            .field("display_thread_info", &self.display_thread_info)
            .finish()
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the default per-crate filter entirely.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    pub fn with_spans(mut self, enable: bool) -> Self {
        self.enable_spans = enable;
        self
    }

    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    pub fn with_thread_info(mut self, display: bool) -> Self {
        self.display_thread_info = display;
        self
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// [`Error::Config`] when the filter does not parse or a global subscriber
/// is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(&config)?)
        .with(stdout_layer(&config))
        .with(config.logger_sink.clone().map(LoggerSinkLayer::new))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn stdout_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let span_events = if config.enable_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info);

    match config.format {
        LogFormat::Pretty => layer.pretty().with_span_events(span_events).boxed(),
        LogFormat::Compact => layer.compact().with_span_events(span_events).boxed(),
        // Span lines would break one-object-per-line; spans ride along as fields instead.
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(config.enable_spans)
            .with_span_list(config.enable_spans)
            .boxed(),
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = config.filter.clone().unwrap_or_else(|| {
        let level = config.level.as_str().to_ascii_lowercase();
        std::iter::once(FOREIGN_LEVEL.to_string())
            .chain(WORKSPACE_CRATES.iter().map(|krate| format!("{krate}={level}")))
            .collect::<Vec<_>>()
            .join(",")
    });

    EnvFilter::try_new(directives).map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))
}

/// Mirrors events into a host [`LoggerSink`].
struct LoggerSinkLayer {
    sink: Arc<dyn LoggerSink>,
}

impl LoggerSinkLayer {
    fn new(sink: Arc<dyn LoggerSink>) -> Self {
        Self { sink }
    }

    /// Spawned inside a runtime so logging never waits on the host pipeline.
    fn forward(&self, entry: LogEntry) {
        let sink = Arc::clone(&self.sink);
        let write = async move {
            if let Err(err) = sink.log(entry).await {
                eprintln!("LoggerSink error: {}", err);
            }
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(write);
            }
            Err(_) => futures::executor::block_on(write),
        }
    }
}

impl<S> Layer<S> for LoggerSinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = log_level(metadata.level());
        if level < self.sink.min_level() {
            return;
        }

        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let span = ctx.lookup_current();
        self.forward(fields.into_entry(level, metadata, span.as_ref().map(|s| s.name())));
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: HashMap<String, String>,
}

impl FieldCollector {
    fn insert(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            name => {
                self.fields.insert(name.to_owned(), value);
            }
        }
    }

    fn into_entry(self, level: LogLevel, metadata: &Metadata<'_>, span: Option<&str>) -> LogEntry {
        let message = self.message.unwrap_or_else(|| metadata.name().to_owned());
        let entry = self
            .fields
            .into_iter()
            .fold(LogEntry::new(level, metadata.target(), message), |entry, (k, v)| {
                entry.with_field(k, v)
            });
        match span {
            Some(name) => entry.with_span(name),
            None => entry,
        }
    }
}

// Integers and bools fall through to `record_debug`, which formats them the same way.
impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{:?}", value));
    }
}

fn log_level(level: &Level) -> LogLevel {
    match *level {
        Level::ERROR => LogLevel::Error,
        Level::WARN => LogLevel::Warn,
        Level::INFO => LogLevel::Info,
        Level::DEBUG => LogLevel::Debug,
        Level::TRACE => LogLevel::Trace,
    }
}

/// Strip a bundled asset path down to its basename.
///
/// ```
/// use core_runtime::logging::strip_path;
///
/// assert_eq!(strip_path("res/raw/cavadov.mp3"), "cavadov.mp3");
/// ```
pub fn strip_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
