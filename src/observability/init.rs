//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths::{ensure_data_dir, get_data_dir};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name on every exported span.
pub const SERVICE_NAME: &str = "MovieExplorer";

/// Name of the OTLP JSON export file inside the data directory.
pub const TRACE_FILE_NAME: &str = "movie-explorer-otlp.json";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` (default `info`) feeding an OpenTelemetry layer that
/// exports to `movie-explorer-otlp.json` in the plugin data directory.
///
/// Tracing is optional. If the data directory cannot be created or the filter
/// does not parse, nothing is installed. Only the first successful call takes
/// effect.
///
/// ```rust
/// use movie_explorer::observability::init_tracing;
/// use movie_explorer::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    let Ok(data_dir) = ensure_data_dir(&get_data_dir()) else {
        return;
    };

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        resource,
        SERVICE_NAME,
    );

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
