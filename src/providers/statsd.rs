//! Hierarchical (statsd-style) provider.
//!
//! Statsd encodes a metric's whole identity in one flat name, so this
//! provider runs every declaration through a [`NameFormatter`] and hands
//! the resolved name to the consumed [`StatsdSink`] collaborator. The
//! sink owns transport, buffering, and series memoization: two `with`
//! calls that resolve to the same name address the same series, and the
//! sink is expected to return the same underlying handle for them.

use std::sync::Arc;

use tracing::debug;

use crate::error::NamingError;
use crate::format::NameFormatter;
use crate::traits;
use crate::types::{CounterOpts, GaugeOpts, HistogramOpts};

/// Sample rate passed to the sink for counters and timings.
const SAMPLE_RATE: f64 = 1.0;

/// Backend counter handle created by a [`StatsdSink`].
pub trait SinkCounter: Send + Sync {
    fn add(&self, delta: f64);
}

/// Backend gauge handle created by a [`StatsdSink`].
pub trait SinkGauge: Send + Sync {
    fn add(&self, delta: f64);
    fn set(&self, value: f64);
}

/// Backend timing handle created by a [`StatsdSink`].
pub trait SinkTiming: Send + Sync {
    fn observe(&self, value: f64);
}

/// The consumed statsd client interface.
///
/// Implementations are external collaborators; their transport failures
/// surface through their own channels and are not translated here.
pub trait StatsdSink: Send + Sync {
    fn counter(&self, name: &str, sample_rate: f64) -> Arc<dyn SinkCounter>;
    fn gauge(&self, name: &str) -> Arc<dyn SinkGauge>;
    fn timing(&self, name: &str, sample_rate: f64) -> Arc<dyn SinkTiming>;
}

/// Provider that flattens metrics into statsd names.
pub struct StatsdProvider {
    sink: Arc<dyn StatsdSink>,
}

impl StatsdProvider {
    pub fn new(sink: Arc<dyn StatsdSink>) -> Self {
        Self { sink }
    }
}

impl traits::Provider for StatsdProvider {
    fn new_counter(&self, opts: CounterOpts) -> Box<dyn traits::Counter> {
        let formatter = Arc::new(NameFormatter::for_counter(&opts));
        let handle = if opts.label_names.is_empty() {
            let name = formatter.format(&[]);
            debug!(metric = %name, "bound statsd counter at declaration");
            Some(self.sink.counter(&name, SAMPLE_RATE))
        } else {
            None
        };
        Box::new(Counter {
            handle,
            formatter,
            sink: Arc::clone(&self.sink),
        })
    }

    fn new_gauge(&self, opts: GaugeOpts) -> Box<dyn traits::Gauge> {
        let formatter = Arc::new(NameFormatter::for_gauge(&opts));
        let handle = if opts.label_names.is_empty() {
            let name = formatter.format(&[]);
            debug!(metric = %name, "bound statsd gauge at declaration");
            Some(self.sink.gauge(&name))
        } else {
            None
        };
        Box::new(Gauge {
            handle,
            formatter,
            sink: Arc::clone(&self.sink),
        })
    }

    fn new_histogram(&self, opts: HistogramOpts) -> Box<dyn traits::Histogram> {
        let formatter = Arc::new(NameFormatter::for_histogram(&opts));
        let handle = if opts.label_names.is_empty() {
            let name = formatter.format(&[]);
            debug!(metric = %name, "bound statsd timing at declaration");
            Some(self.sink.timing(&name, SAMPLE_RATE))
        } else {
            None
        };
        Box::new(Histogram {
            handle,
            formatter,
            sink: Arc::clone(&self.sink),
        })
    }
}

struct Counter {
    handle: Option<Arc<dyn SinkCounter>>,
    formatter: Arc<NameFormatter>,
    sink: Arc<dyn StatsdSink>,
}

impl traits::Counter for Counter {
    fn with(&self, label_values: &[&str]) -> Box<dyn traits::Counter> {
        let name = self.formatter.format(label_values);
        Box::new(Counter {
            handle: Some(self.sink.counter(&name, SAMPLE_RATE)),
            formatter: Arc::clone(&self.formatter),
            sink: Arc::clone(&self.sink),
        })
    }

    fn add(&self, delta: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.add(delta);
    }
}

struct Gauge {
    handle: Option<Arc<dyn SinkGauge>>,
    formatter: Arc<NameFormatter>,
    sink: Arc<dyn StatsdSink>,
}

impl traits::Gauge for Gauge {
    fn with(&self, label_values: &[&str]) -> Box<dyn traits::Gauge> {
        let name = self.formatter.format(label_values);
        Box::new(Gauge {
            handle: Some(self.sink.gauge(&name)),
            formatter: Arc::clone(&self.formatter),
            sink: Arc::clone(&self.sink),
        })
    }

    fn add(&self, delta: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.add(delta);
    }

    fn set(&self, value: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.set(value);
    }
}

struct Histogram {
    handle: Option<Arc<dyn SinkTiming>>,
    formatter: Arc<NameFormatter>,
    sink: Arc<dyn StatsdSink>,
}

impl traits::Histogram for Histogram {
    fn with(&self, label_values: &[&str]) -> Box<dyn traits::Histogram> {
        let name = self.formatter.format(label_values);
        Box::new(Histogram {
            handle: Some(self.sink.timing(&name, SAMPLE_RATE)),
            formatter: Arc::clone(&self.formatter),
            sink: Arc::clone(&self.sink),
        })
    }

    fn observe(&self, value: f64) {
        let Some(handle) = &self.handle else {
            panic!("{}", NamingError::Unbound);
        };
        handle.observe(value);
    }
}
