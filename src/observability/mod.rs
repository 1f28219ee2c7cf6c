//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/movie-explorer/movie-explorer-otlp.json`
//! (seen as `/host/...` from inside the sandbox). The file rotates at 10 MB and
//! keeps 3 backups. The level comes from the `trace_level` config key and
//! defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-rotated line writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
