//! Heiti - metric naming and provider abstraction
//!
//! This crate lets application code declare counters, gauges, and
//! histograms once, through a [`Provider`], and record observations
//! through small polymorphic facades without coupling to a concrete
//! telemetry backend. Dimensional backends (prometheus-style) receive a
//! flat name plus orthogonal label dimensions; hierarchical backends
//! (statsd-style) receive one fully flattened name, produced by the
//! [`NameFormatter`] template engine.
//!
//! # Example
//!
//! ```rust
//! use heiti::{CounterOpts, DimensionalProvider, Provider};
//!
//! let provider = DimensionalProvider::new();
//! let requests = provider.new_counter(
//!     CounterOpts::new("requests_total")
//!         .namespace("gateway")
//!         .help("Total requests handled.")
//!         .label_names(["code"]),
//! );
//!
//! // Bind label values, then record. Without an installed `metrics`
//! // recorder the handle is a no-op.
//! requests.with(&["code", "200"]).add(1.0);
//! ```
//!
//! # Name templates
//!
//! Hierarchical backends flatten labels into the metric name using a
//! per-metric template, `%{#fqname}` by default. A declaration can
//! override it:
//!
//! ```rust
//! use heiti::{MetricIdentity, NameFormatter};
//!
//! let formatter = NameFormatter::new(
//!     MetricIdentity::new("gateway", "", "requests"),
//!     &["code".to_string()],
//!     "%{#fqname}.%{code}",
//! );
//! assert_eq!(formatter.format(&["code", "200"]), "gateway.requests.200");
//! ```
//!
//! Label values are sanitized for hierarchical names (`.`, `:`, `|`, and
//! whitespace become `_`); the reserved identity tokens are not.

pub mod error;
pub mod format;
pub mod providers;
pub mod traits;
pub mod types;

// Re-export the public surface at the crate root.
pub use error::{NamingError, Result};
pub use format::{DEFAULT_FORMAT, NameFormatter};
pub use providers::dimensional::DimensionalProvider;
pub use providers::statsd::{SinkCounter, SinkGauge, SinkTiming, StatsdProvider, StatsdSink};
pub use traits::{Counter, Gauge, Histogram, Provider};
pub use types::{CounterOpts, GaugeOpts, HistogramOpts, LabelSchema, MetricIdentity};
