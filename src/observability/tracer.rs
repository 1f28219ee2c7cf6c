//! Tracer provider backed by a file span exporter.
//!
//! The plugin sandbox has no network collector to talk to, so finished spans
//! are serialized to OTLP JSON and appended to a rotating file instead.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one OTLP JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, formatter: SpanFormatter) -> Self {
        Self {
            writer,
            formatter,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

/// Creates a tracer provider that exports every span immediately to
/// `file_path`, tagged with `resource` and the instrumentation `scope`.
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(
        FileWriter::new(file_path),
        SpanFormatter::new(resource.clone(), scope),
    );

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    fn exporter(path: PathBuf) -> FileSpanExporter {
        let resource = Resource::new(vec![KeyValue::new("service.name", "MovieExplorer")]);
        FileSpanExporter::new(FileWriter::new(path), SpanFormatter::new(resource, "MovieExplorer"))
    }

    #[test]
    fn writes_one_line_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otlp.json");
        let exporter = exporter(path.clone());

        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let doc: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert!(doc["resourceSpans"].is_array());
    }

    #[test]
    fn refuses_export_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let mut exporter = exporter(dir.path().join("otlp.json"));
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
    }
}
