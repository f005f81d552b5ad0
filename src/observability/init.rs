//! Subscriber setup: `tracing` macros → OpenTelemetry → trace file.

use super::tracer;
use crate::infrastructure::{get_data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute and tracer name.
pub const SERVICE_NAME: &str = "zelmap";

/// Filter used when `trace_level` is unset or blank.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Filter directive for the subscriber, from the plugin's `trace_level`.
#[must_use]
pub fn trace_filter(config: &Config) -> String {
    config
        .trace_level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_TRACE_LEVEL)
        .to_string()
}

/// Installs the global subscriber.
///
/// Spans go to `~/.local/share/zellij/zelmap/zelmap-otlp.json` (as seen
/// through the sandbox's `/host` mount). Tracing is optional: if the data
/// directory cannot be created nothing is installed. Only the first call
/// in a process takes effect.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(trace_filter(config))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(trace_file_path(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(trace_filter(&Config::default()), "info");

        let blank = Config {
            trace_level: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(trace_filter(&blank), "info");
    }

    #[test]
    fn uses_configured_directive() {
        let config = Config {
            trace_level: Some(" zelmap=debug ".to_string()),
            ..Config::default()
        };
        assert_eq!(trace_filter(&config), "zelmap=debug");
    }
}
