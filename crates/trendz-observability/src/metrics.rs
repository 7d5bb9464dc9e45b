//! Per-request metrics: upstream fetch timing and the state the page settled in.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use trendz_core::RequestId;

/// Metrics for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Component name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Upstream fetches, keyed by `tag:url`.
    pub dependencies: BTreeMap<String, DependencyMetrics>,
    /// View state the component settled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_state: Option<String>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for one upstream fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyMetrics {
    /// Dependency tag/name.
    pub tag: String,
    /// URL fetched.
    pub url: String,
    /// Fetch duration (microseconds).
    pub duration_us: u64,
    /// HTTP status code, when a response arrived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Whether the fetch produced usable data.
    pub success: bool,
    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DependencyMetrics {
    /// Create a dependency record.
    pub fn new(tag: &str, url: &str, duration: Duration) -> Self {
        Self {
            tag: tag.to_string(),
            url: url.to_string(),
            duration_us: duration.as_micros() as u64,
            status_code: None,
            success: false,
            error: None,
        }
    }

    /// Set the response status.
    pub fn with_status(mut self, status_code: Option<u16>) -> Self {
        self.status_code = status_code;
        self
    }

    /// Mark the fetch as successful.
    pub fn succeeded(mut self) -> Self {
        self.success = true;
        self.error = None;
        self
    }

    /// Mark the fetch as failed.
    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.success = false;
        self.error = Some(error.into());
        self
    }
}

/// Collector for request metrics.
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    request_id: RequestId,
    component: Option<String>,
    route: Option<String>,
    start: Instant,
    dependencies: BTreeMap<String, DependencyMetrics>,
    settled_state: Option<String>,
}

impl MetricsCollector {
    /// Create a new metrics collector; the request clock starts now.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            component: None,
            route: None,
            start: Instant::now(),
            dependencies: BTreeMap::new(),
            settled_state: None,
        }
    }

    /// Set component name.
    pub fn set_component(&mut self, component: impl Into<String>) {
        self.component = Some(component.into());
    }

    /// Set route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record an upstream fetch. A later record for the same tag and URL
    /// replaces the earlier one.
    pub fn record_dependency(&mut self, dependency: DependencyMetrics) {
        let key = format!("{}:{}", dependency.tag, dependency.url);
        self.dependencies.insert(key, dependency);
    }

    /// Record the view state the request settled in.
    pub fn record_settled(&mut self, state: &str) {
        self.settled_state = Some(state.to_string());
    }

    /// Recorded fetches.
    pub fn dependencies(&self) -> impl Iterator<Item = &DependencyMetrics> {
        self.dependencies.values()
    }

    /// Recorded settled state.
    pub fn settled_state(&self) -> Option<&str> {
        self.settled_state.as_deref()
    }

    /// Snapshot the metrics with the served status.
    pub fn finalize(&self, status_code: Option<u16>) -> RequestMetrics {
        RequestMetrics {
            request_id: self.request_id.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            dependencies: self.dependencies.clone(),
            settled_state: self.settled_state.clone(),
            total_duration_us: self.elapsed().as_micros() as u64,
            status_code,
        }
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = vec![format!("Request: {}", self.request_id)];

        if let Some(state) = &self.settled_state {
            lines.push(format!("  Settled: {}", state));
        }
        if let Some(status) = self.status_code {
            lines.push(format!("  Status: {}", status));
        }
        lines.push(format!(
            "  Total: {}us ({:.2}ms)",
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0
        ));

        if !self.dependencies.is_empty() {
            lines.push("  Dependencies:".to_string());
            for dep in self.dependencies.values() {
                let status = match (dep.success, dep.status_code) {
                    (true, Some(code)) => code.to_string(),
                    (false, Some(code)) => format!("FAILED {}", code),
                    (_, None) => "FAILED".to_string(),
                };
                lines.push(format!(
                    "    {} [{}]: {}us ({:.2}ms) - {}",
                    dep.tag,
                    status,
                    dep.duration_us,
                    dep.duration_us as f64 / 1000.0,
                    dep.url
                ));
            }
        }

        lines.join("\n")
    }
}
