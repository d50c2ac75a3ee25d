//! Dimensional (prometheus-style) provider over the `metrics` facade.
//!
//! Dimensional backends keep labels as orthogonal dimensions, so no name
//! templating happens here: `with` validates the keys against the
//! declared label set and forwards the pairs verbatim as dimensions on
//! the registered key. Handles are registered through whichever
//! `metrics::Recorder` is installed (globally or thread-locally); without
//! a recorder every handle is a no-op.
//!
//! Names follow the prometheus convention of joining the non-empty
//! identity parts with `_`.

use std::sync::Arc;

use metrics::{Key, Label, Level, Metadata, Recorder};
use tracing::debug;

use crate::error::NamingError;
use crate::traits;
use crate::types::{CounterOpts, GaugeOpts, HistogramOpts, LabelSchema, MetricIdentity};

static METADATA: Metadata<'static> =
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

/// Provider that registers metrics with the installed `metrics` recorder.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionalProvider;

impl DimensionalProvider {
    pub fn new() -> Self {
        Self
    }
}

fn flat_name(identity: &MetricIdentity) -> String {
    [
        identity.namespace.as_str(),
        identity.subsystem.as_str(),
        identity.name.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join("_")
}

fn to_labels(schema: &LabelSchema, label_values: &[&str]) -> Vec<Label> {
    let pairs = match schema.pairs(label_values) {
        Ok(pairs) => pairs,
        Err(err) => panic!("{err}"),
    };
    pairs
        .into_iter()
        .map(|(key, value)| Label::new(key.to_string(), value.to_string()))
        .collect()
}

fn register_counter(name: &str, labels: Vec<Label>) -> metrics::Counter {
    let key = Key::from_parts(name.to_string(), labels);
    metrics::with_recorder(|recorder| recorder.register_counter(&key, &METADATA))
}

fn register_gauge(name: &str, labels: Vec<Label>) -> metrics::Gauge {
    let key = Key::from_parts(name.to_string(), labels);
    metrics::with_recorder(|recorder| recorder.register_gauge(&key, &METADATA))
}

fn register_histogram(name: &str, labels: Vec<Label>) -> metrics::Histogram {
    let key = Key::from_parts(name.to_string(), labels);
    metrics::with_recorder(|recorder| recorder.register_histogram(&key, &METADATA))
}

impl traits::Provider for DimensionalProvider {
    fn new_counter(&self, opts: CounterOpts) -> Box<dyn traits::Counter> {
        let identity = MetricIdentity::new(
            opts.namespace.as_str(),
            opts.subsystem.as_str(),
            opts.name.as_str(),
        );
        let name = flat_name(&identity);
        if !opts.help.is_empty() {
            metrics::describe_counter!(name.clone(), opts.help.clone());
        }
        let schema = Arc::new(LabelSchema::new(&opts.label_names));
        let handle = if schema.is_empty() {
            debug!(metric = %name, "registered counter at declaration");
            Some(register_counter(&name, Vec::new()))
        } else {
            None
        };
        Box::new(Counter {
            name,
            schema,
            handle,
        })
    }

    fn new_gauge(&self, opts: GaugeOpts) -> Box<dyn traits::Gauge> {
        let identity = MetricIdentity::new(
            opts.namespace.as_str(),
            opts.subsystem.as_str(),
            opts.name.as_str(),
        );
        let name = flat_name(&identity);
        if !opts.help.is_empty() {
            metrics::describe_gauge!(name.clone(), opts.help.clone());
        }
        let schema = Arc::new(LabelSchema::new(&opts.label_names));
        let handle = if schema.is_empty() {
            debug!(metric = %name, "registered gauge at declaration");
            Some(register_gauge(&name, Vec::new()))
        } else {
            None
        };
        Box::new(Gauge {
            name,
            schema,
            handle,
        })
    }

    fn new_histogram(&self, opts: HistogramOpts) -> Box<dyn traits::Histogram> {
        let identity = MetricIdentity::new(
            opts.namespace.as_str(),
            opts.subsystem.as_str(),
            opts.name.as_str(),
        );
        let name = flat_name(&identity);
        if !opts.help.is_empty() {
            metrics::describe_histogram!(name.clone(), opts.help.clone());
        }
        // Bucket boundaries ride on the opts for the exporter; the
        // `metrics` facade itself has no per-registration buckets.
        let schema = Arc::new(LabelSchema::new(&opts.label_names));
        let handle = if schema.is_empty() {
            debug!(metric = %name, "registered histogram at declaration");
            Some(register_histogram(&name, Vec::new()))
        } else {
            None
        };
        Box::new(Histogram {
            name,
            schema,
            handle,
        })
    }
}

struct Counter {
    name: String,
    schema: Arc<LabelSchema>,
    handle: Option<metrics::Counter>,
}

impl traits::Counter for Counter {
    fn with(&self, label_values: &[&str]) -> Box<dyn traits::Counter> {
        let labels = to_labels(&self.schema, label_values);
        Box::new(Counter {
            name: self.name.clone(),
            schema: Arc::clone(&self.schema),
            handle: Some(register_counter(&self.name, labels)),
        })
    }

    fn add(&self, delta: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        // The facade's counters are monotone u64; fractional deltas truncate.
        handle.increment(delta as u64);
    }
}

struct Gauge {
    name: String,
    schema: Arc<LabelSchema>,
    handle: Option<metrics::Gauge>,
}

impl traits::Gauge for Gauge {
    fn with(&self, label_values: &[&str]) -> Box<dyn traits::Gauge> {
        let labels = to_labels(&self.schema, label_values);
        Box::new(Gauge {
            name: self.name.clone(),
            schema: Arc::clone(&self.schema),
            handle: Some(register_gauge(&self.name, labels)),
        })
    }

    fn add(&self, delta: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.increment(delta);
    }

    fn set(&self, value: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.set(value);
    }
}

struct Histogram {
    name: String,
    schema: Arc<LabelSchema>,
    handle: Option<metrics::Histogram>,
}

impl traits::Histogram for Histogram {
    fn with(&self, label_values: &[&str]) -> Box<dyn traits::Histogram> {
        let labels = to_labels(&self.schema, label_values);
        Box::new(Histogram {
            name: self.name.clone(),
            schema: Arc::clone(&self.schema),
            handle: Some(register_histogram(&self.name, labels)),
        })
    }

    fn observe(&self, value: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.record(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_name_joins_with_underscores() {
        let id = MetricIdentity::new("gateway", "http", "requests_total");
        assert_eq!(flat_name(&id), "gateway_http_requests_total");
    }

    #[test]
    fn flat_name_skips_empty_parts() {
        let id = MetricIdentity::new("", "http", "requests_total");
        assert_eq!(flat_name(&id), "http_requests_total");
        let id = MetricIdentity::new("", "", "requests_total");
        assert_eq!(flat_name(&id), "requests_total");
    }
}
