//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → zelmap-otlp.json
//! ```
//!
//! One line per exported batch, each a complete OTLP JSON document. The file
//! rolls over at 10 MB and keeps three backups. The `trace_level` plugin
//! option sets the filter (default `info`).
//!
//! ```no_run
//! use zelmap::observability::init_tracing;
//! use zelmap::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin loaded");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_filter, DEFAULT_TRACE_LEVEL, SERVICE_NAME};
