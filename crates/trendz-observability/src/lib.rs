//! Observability for the Trendz storefront components.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogBuilder` - Fluent construction of log entries with typed fields
//! - `MetricsCollector` - Per-request upstream timing and settled state

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export RequestId from trendz-core for convenience
pub use trendz_core::RequestId;
