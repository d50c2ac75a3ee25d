//! Metric declaration options.
//!
//! One options record per metric kind, mirroring the declaration surface
//! of both backend families. Hierarchical (statsd-style) providers read
//! `statsd_format`; dimensional (prometheus-style) providers read `help`,
//! `label_help`, and `buckets`. Unread fields are simply ignored by the
//! other family.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Options for declaring a counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterOpts {
    pub namespace: String,
    pub subsystem: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_names: Vec<String>,
    /// Per-label help text. Dimensional backends only.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub label_help: HashMap<String, String>,
    /// Name template override. Hierarchical backends only; empty means
    /// the default `%{#fqname}` template.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub statsd_format: String,
}

impl CounterOpts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn label_help<I, K, V>(mut self, help: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.label_help = help
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn statsd_format(mut self, format: impl Into<String>) -> Self {
        self.statsd_format = format.into();
        self
    }
}

/// Options for declaring a gauge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeOpts {
    pub namespace: String,
    pub subsystem: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_names: Vec<String>,
    /// Per-label help text. Dimensional backends only.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub label_help: HashMap<String, String>,
    /// Name template override. Hierarchical backends only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub statsd_format: String,
}

impl GaugeOpts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn label_help<I, K, V>(mut self, help: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.label_help = help
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn statsd_format(mut self, format: impl Into<String>) -> Self {
        self.statsd_format = format.into();
        self
    }
}

/// Options for declaring a histogram.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramOpts {
    pub namespace: String,
    pub subsystem: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help: String,
    /// Cumulative bucket upper bounds. Dimensional backends only; in the
    /// `metrics` ecosystem bucket boundaries are applied by the installed
    /// exporter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_names: Vec<String>,
    /// Per-label help text. Dimensional backends only.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub label_help: HashMap<String, String>,
    /// Name template override. Hierarchical backends only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub statsd_format: String,
}

impl HistogramOpts {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn buckets<I>(mut self, buckets: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.buckets = buckets.into_iter().collect();
        self
    }

    pub fn label_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn label_help<I, K, V>(mut self, help: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.label_help = help
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn statsd_format(mut self, format: impl Into<String>) -> Self {
        self.statsd_format = format.into();
        self
    }
}
