use crate::config::Config;
use opentelemetry::sdk::propagation::TraceContextPropagator;
use opentelemetry::sdk::trace::{self, RandomIdGenerator, Sampler, Tracer};
use opentelemetry::sdk::Resource;
use opentelemetry::trace::TraceError;
use opentelemetry::{global, KeyValue};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const SERVICE_NAME: &str = "league-server";
const DEFAULT_FILTER: &str = "league_server=debug,tower_http=debug,axum::rejection=trace,warn";

/// Installs the global subscriber: JSON logs to stdout, plus span export to
/// Jaeger when `config.enable_telemetry` is set. `RUST_LOG` overrides the
/// default filter.
pub async fn init_telemetry(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .json();

    let otel_layer = if config.enable_telemetry {
        global::set_text_map_propagator(TraceContextPropagator::new());
        Some(tracing_opentelemetry::layer().with_tracer(jaeger_tracer(config)?))
    } else {
        None
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    if config.enable_telemetry {
        tracing::info!(endpoint = %config.jaeger_endpoint, "Exporting spans to Jaeger");
    } else {
        tracing::info!("Span export disabled");
    }
    Ok(())
}

fn jaeger_tracer(config: &Config) -> Result<Tracer, TraceError> {
    opentelemetry_jaeger::new_collector_pipeline()
        .with_service_name(SERVICE_NAME)
        .with_endpoint(&config.jaeger_endpoint)
        .with_isahc()
        .with_trace_config(
            trace::config()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(Resource::new(vec![
                    KeyValue::new("service.name", SERVICE_NAME),
                    KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
                ])),
        )
        .with_timeout(Duration::from_secs(2))
        .install_batch(opentelemetry::runtime::Tokio)
}

/// Flushes pending spans before exit.
pub fn shutdown_telemetry(config: &Config) {
    if config.enable_telemetry {
        global::shutdown_tracer_provider();
    }
}
