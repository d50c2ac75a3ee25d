//! Plain data types shared across providers.

mod identity;
mod options;
mod schema;

pub use identity::MetricIdentity;
pub use options::{CounterOpts, GaugeOpts, HistogramOpts};
pub use schema::LabelSchema;
