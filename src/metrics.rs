//! Prometheus metrics for generation runs (feature `metrics`).

use once_cell::sync::Lazy;
use opentelemetry::{
    global,
    metrics::{Counter, Histogram},
    KeyValue,
};
use opentelemetry_sdk::metrics::SdkMeterProvider;
use prometheus::{Encoder, Registry, TextEncoder};
use std::time::Duration;

pub static METRICS: Lazy<RetailMetrics> = Lazy::new(RetailMetrics::init);

pub struct RetailMetrics {
    registry: Registry,
    _provider: Option<SdkMeterProvider>,
    pub rows_generated: Counter<u64>,
    pub stage_duration: Histogram<f64>,
    pub files_written: Counter<u64>,
}

impl RetailMetrics {
    pub fn init() -> Self {
        let registry = Registry::new();
        let provider = match opentelemetry_prometheus::exporter()
            .with_registry(registry.clone())
            .build()
        {
            Ok(exporter) => {
                let provider = SdkMeterProvider::builder().with_reader(exporter).build();
                global::set_meter_provider(provider.clone());
                Some(provider)
            }
            Err(e) => {
                log::warn!("prometheus exporter unavailable, metrics disabled: {}", e);
                None
            }
        };
        let meter = global::meter("retailsim");

        let rows_generated = meter
            .u64_counter("retailsim_rows_generated_total")
            .with_description("Rows generated per table")
            .build();

        let stage_duration = meter
            .f64_histogram("retailsim_stage_duration_seconds")
            .with_description("Duration of generation stages")
            .build();

        let files_written = meter
            .u64_counter("retailsim_files_written_total")
            .with_description("Table files written to disk")
            .build();

        Self {
            registry,
            _provider: provider,
            rows_generated,
            stage_duration,
            files_written,
        }
    }

    pub fn record_stage(&self, stage: &'static str, rows: u64, elapsed: Duration) {
        let attrs = [KeyValue::new("stage", stage)];
        self.rows_generated.add(rows, &attrs);
        self.stage_duration.record(elapsed.as_secs_f64(), &attrs);
    }

    pub fn record_file(&self, file: &'static str) {
        self.files_written.add(1, &[KeyValue::new("file", file)]);
    }

    /// Prometheus text exposition of everything recorded so far.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buffer) {
            log::warn!("failed to encode metrics: {}", e);
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
