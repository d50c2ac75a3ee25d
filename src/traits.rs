//! Core metric facade traits.
//!
//! Each metric kind is a small capability set rather than a class
//! hierarchy; every backend family implements the three kinds once, and
//! the [`Provider`] factory picks the implementation at declaration time.
//! No runtime type inspection is involved.
//!
//! # Binding contract
//!
//! A metric declared with label names has no backend handle until `with`
//! is called: mutating operations (`add`, `set`, `observe`) before the
//! first `with` panic, because they indicate the call site forgot to bind
//! labels. A metric declared with an empty label list is bound eagerly at
//! declaration time and is usable immediately.

use crate::types::{CounterOpts, GaugeOpts, HistogramOpts};

/// A monotonically accumulating counter.
pub trait Counter: Send + Sync {
    /// Bind label values, returning a counter for the resolved series.
    ///
    /// `label_values` alternates keys and values; a trailing unpaired key
    /// binds to `"unknown"`.
    ///
    /// # Panics
    ///
    /// Panics when a key is not among the declared label names.
    fn with(&self, label_values: &[&str]) -> Box<dyn Counter>;

    /// Add `delta` to the counter. Callers are expected to pass
    /// non-negative deltas; this is not enforced.
    ///
    /// # Panics
    ///
    /// Panics when the metric was declared with label names and `with`
    /// has not been called.
    fn add(&self, delta: f64);
}

/// A gauge: an absolute value that may move in either direction.
pub trait Gauge: Send + Sync {
    /// Bind label values, returning a gauge for the resolved series.
    ///
    /// # Panics
    ///
    /// Panics when a key is not among the declared label names.
    fn with(&self, label_values: &[&str]) -> Box<dyn Gauge>;

    /// Add `delta` to the current value.
    ///
    /// # Panics
    ///
    /// Panics when the metric was declared with label names and `with`
    /// has not been called.
    fn add(&self, delta: f64);

    /// Overwrite the current value.
    ///
    /// # Panics
    ///
    /// Panics when the metric was declared with label names and `with`
    /// has not been called.
    fn set(&self, value: f64);
}

/// A histogram recording individual observations into cumulative buckets.
///
/// Bucket semantics belong to the backend, not to this crate.
pub trait Histogram: Send + Sync {
    /// Bind label values, returning a histogram for the resolved series.
    ///
    /// # Panics
    ///
    /// Panics when a key is not among the declared label names.
    fn with(&self, label_values: &[&str]) -> Box<dyn Histogram>;

    /// Record one observation.
    ///
    /// # Panics
    ///
    /// Panics when the metric was declared with label names and `with`
    /// has not been called.
    fn observe(&self, value: f64);
}

/// Factory for metric facades bound to one telemetry backend.
pub trait Provider: Send + Sync {
    fn new_counter(&self, opts: CounterOpts) -> Box<dyn Counter>;
    fn new_gauge(&self, opts: GaugeOpts) -> Box<dyn Gauge>;
    fn new_histogram(&self, opts: HistogramOpts) -> Box<dyn Histogram>;
}
