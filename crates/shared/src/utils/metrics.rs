use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

/// Per-service request counter and latency histogram.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    pub fn register(&self, prefix: &str, registry: &mut Registry) {
        registry.register(
            format!("{prefix}_requests"),
            format!("Total {prefix} operations"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration_seconds"),
            format!("Duration of {prefix} operations in seconds"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

/// Timing handle for one service operation.
#[derive(Debug)]
pub struct TracingContext {
    pub operation: &'static str,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &'static str) -> Self {
        info!("Starting operation: {operation}");
        Self {
            operation,
            start_time: Instant::now(),
        }
    }
}

impl Metrics {
    pub fn complete_success(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete(ctx, method, true, message);
    }

    pub fn complete_error(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete(ctx, method, false, message);
    }

    fn complete(&self, ctx: &TracingContext, method: Method, is_success: bool, message: &str) {
        let elapsed = ctx.start_time.elapsed().as_secs_f64();

        if is_success {
            info!("✅ Operation {} completed successfully: {message}", ctx.operation);
            self.record(method, Status::Success, elapsed);
        } else {
            error!("❌ Operation {} failed: {message}", ctx.operation);
            self.record(method, Status::Error, elapsed);
        }
    }
}

/// Encodes the registry in the Prometheus text exposition format.
pub fn metrics_handler_body(registry: &Registry) -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();
    encode(&mut buffer, registry)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_operations_show_up_in_the_exposition() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register("product_query_service", &mut registry);

        metrics.record(Method::Get, Status::Success, 0.01);
        metrics.record(Method::Get, Status::Error, 0.02);

        let body = metrics_handler_body(&registry).unwrap();
        assert!(body.contains("product_query_service_requests_total"));
        assert!(body.contains("method=\"Get\""));
        assert!(body.contains("status=\"Error\""));
    }
}
