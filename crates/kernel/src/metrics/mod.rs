//! Prometheus metrics collection.
//!
//! Provides application metrics in Prometheus format.

use prometheus_client::encoding::{EncodeLabelSet, text::encode};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::histogram::{Histogram, exponential_buckets};
use prometheus_client::registry::Registry;

use crate::route::Route;

/// HTTP request labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    pub method: String,
    pub route: String,
    pub status: u16,
}

/// Application metrics.
pub struct Metrics {
    registry: Registry,

    /// HTTP request counter by method/route/status.
    pub http_requests: Family<HttpLabels, Counter>,

    /// HTTP request duration histogram.
    pub http_duration_seconds: Family<HttpLabels, Histogram>,

    /// Admin logins.
    pub admin_logins: Counter,

    /// Admin logouts.
    pub admin_logouts: Counter,

    /// Menu items appended.
    pub menu_items_added: Counter,

    /// Form submissions dropped by validation or CSRF checks.
    pub submissions_ignored: Counter,
}

impl Metrics {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests = Family::<HttpLabels, Counter>::default();
        registry.register(
            "http_requests_total",
            "Total HTTP requests",
            http_requests.clone(),
        );

        let http_duration_seconds = Family::<HttpLabels, Histogram>::new_with_constructor(|| {
            Histogram::new(exponential_buckets(0.0005, 2.0, 12))
        });
        registry.register(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
            http_duration_seconds.clone(),
        );

        let admin_logins = Counter::default();
        registry.register(
            "admin_logins_total",
            "Admin gate logins",
            admin_logins.clone(),
        );

        let admin_logouts = Counter::default();
        registry.register(
            "admin_logouts_total",
            "Admin gate logouts",
            admin_logouts.clone(),
        );

        let menu_items_added = Counter::default();
        registry.register(
            "menu_items_added_total",
            "Menu items appended",
            menu_items_added.clone(),
        );

        let submissions_ignored = Counter::default();
        registry.register(
            "form_submissions_ignored_total",
            "Form submissions ignored as invalid",
            submissions_ignored.clone(),
        );

        Self {
            registry,
            http_requests,
            http_duration_seconds,
            admin_logins,
            admin_logouts,
            menu_items_added,
            submissions_ignored,
        }
    }

    /// Record an HTTP request.
    pub fn record_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        let labels = HttpLabels {
            method: method.to_string(),
            route: route_label(path).to_string(),
            status,
        };

        self.http_requests.get_or_create(&labels).inc();
        self.http_duration_seconds
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    pub fn record_login(&self) {
        self.admin_logins.inc();
    }

    pub fn record_logout(&self) {
        self.admin_logouts.inc();
    }

    pub fn record_item_added(&self) {
        self.menu_items_added.inc();
    }

    pub fn record_ignored_submission(&self) {
        self.submissions_ignored.inc();
    }

    /// Encode metrics in Prometheus text format.
    ///
    /// # Panics
    ///
    /// Panics if Prometheus metric encoding to a `String` buffer fails.
    /// The `fmt::Write` impl for `String` is infallible.
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        // Prometheus encoding to String buffer is infallible
        #[allow(clippy::expect_used)]
        encode(&mut buffer, &self.registry).expect("encoding metrics");
        buffer
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish()
    }
}

/// Collapse a request path to a bounded route label.
///
/// Restaurant ids are arbitrary user input, so they never appear in labels.
fn route_label(path: &str) -> &'static str {
    match path {
        "/health" => return "health",
        "/metrics" => return "metrics",
        "/favicon.ico" => return "favicon",
        _ => {}
    }

    if let Some(prefix) = path.strip_suffix("/login")
        && matches!(Route::resolve(prefix), Route::Admin(_))
    {
        return "admin_login";
    }
    if let Some(prefix) = path.strip_suffix("/logout")
        && matches!(Route::resolve(prefix), Route::Admin(_))
    {
        return "admin_logout";
    }
    if let Some(prefix) = path.strip_suffix("/items")
        && matches!(Route::resolve(prefix), Route::Admin(_))
    {
        return "admin_items";
    }

    Route::resolve(path).kind()
}
