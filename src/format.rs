//! Name resolution for hierarchical metric backends.
//!
//! Dimensional backends keep labels as orthogonal dimensions, so a metric
//! name is just its identity. Hierarchical backends (statsd-style) encode
//! everything in one flat string where `.`, `:`, `|`, and whitespace are
//! structural separators. The [`NameFormatter`] bridges the two: it binds
//! a metric's identity, its declared label set, and a format template,
//! and resolves the template plus a set of label values into one concrete
//! name.
//!
//! # Template syntax
//!
//! Templates are literal text with `%{token}` placeholders, where a token
//! is a run of ASCII letters, digits, `#`, `?`, and `_`. The reserved
//! tokens `#namespace`, `#subsystem`, `#name`, and `#fqname` expand to the
//! metric identity and pass through unsanitized (fully-qualified names
//! intentionally contain `.`). Any other token is looked up among the
//! supplied label values and sanitized: each occurrence of `.`, `:`, `|`,
//! or whitespace becomes a `_`. Literal text is emitted verbatim.
//!
//! The default template is [`DEFAULT_FORMAT`], which resolves to the
//! dotted fully-qualified name.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NamingError, Result};
use crate::types::{CounterOpts, GaugeOpts, HistogramOpts, LabelSchema, MetricIdentity};

/// The template applied when a declaration does not override it.
pub const DEFAULT_FORMAT: &str = "%{#fqname}";

// An empty token is a valid match; it resolves as the empty-string label
// key and fails through the ordinary undeclared-label path.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\{([#?[:alnum:]_]*)\}").expect("placeholder pattern"));

// Characters that act as separators in hierarchical names. Each match is
// replaced independently; adjacent separators do not collapse.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.|:\s]").expect("separator pattern"));

/// Resolves concrete metric names for one declared metric.
///
/// One formatter is created per declaration and never mutated afterwards,
/// so it is safe to share across threads without synchronization.
#[derive(Debug, Clone)]
pub struct NameFormatter {
    identity: MetricIdentity,
    schema: LabelSchema,
    format: String,
}

impl NameFormatter {
    /// Bind an identity, declared label names, and a format template.
    ///
    /// An empty template falls back to [`DEFAULT_FORMAT`].
    pub fn new(identity: MetricIdentity, label_names: &[String], format: &str) -> Self {
        let format = if format.is_empty() {
            DEFAULT_FORMAT
        } else {
            format
        };
        Self {
            identity,
            schema: LabelSchema::new(label_names),
            format: format.to_string(),
        }
    }

    pub fn for_counter(opts: &CounterOpts) -> Self {
        Self::new(
            MetricIdentity::new(
                opts.namespace.as_str(),
                opts.subsystem.as_str(),
                opts.name.as_str(),
            ),
            &opts.label_names,
            &opts.statsd_format,
        )
    }

    pub fn for_gauge(opts: &GaugeOpts) -> Self {
        Self::new(
            MetricIdentity::new(
                opts.namespace.as_str(),
                opts.subsystem.as_str(),
                opts.name.as_str(),
            ),
            &opts.label_names,
            &opts.statsd_format,
        )
    }

    pub fn for_histogram(opts: &HistogramOpts) -> Self {
        Self::new(
            MetricIdentity::new(
                opts.namespace.as_str(),
                opts.subsystem.as_str(),
                opts.name.as_str(),
            ),
            &opts.label_names,
            &opts.statsd_format,
        )
    }

    /// The declared label set.
    pub fn schema(&self) -> &LabelSchema {
        &self.schema
    }

    /// The dotted join of the non-empty identity parts.
    pub fn fully_qualified_name(&self) -> String {
        self.identity.fully_qualified()
    }

    /// Resolve the template against an alternating key/value sequence.
    ///
    /// A trailing unpaired key binds to `"unknown"`; duplicate keys are
    /// last-write-wins.
    ///
    /// # Panics
    ///
    /// Panics when a supplied key is not among the declared label names,
    /// or when a non-reserved placeholder references a label that was not
    /// supplied. Both indicate a mismatch between the declaration and the
    /// call site; see [`Self::try_format`] for the checked variant.
    pub fn format(&self, label_values: &[&str]) -> String {
        match self.try_format(label_values) {
            Ok(name) => name,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked variant of [`Self::format`].
    pub fn try_format(&self, label_values: &[&str]) -> Result<String> {
        let labels: HashMap<&str, &str> =
            self.schema.pairs(label_values)?.into_iter().collect();

        let mut out = String::with_capacity(self.format.len());
        let mut cursor = 0;

        for caps in PLACEHOLDER.captures_iter(&self.format) {
            let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > cursor {
                out.push_str(&self.format[cursor..whole.start()]);
            }
            match token.as_str() {
                "#namespace" => out.push_str(&self.identity.namespace),
                "#subsystem" => out.push_str(&self.identity.subsystem),
                "#name" => out.push_str(&self.identity.name),
                "#fqname" => out.push_str(&self.fully_qualified_name()),
                key => {
                    let value = labels
                        .get(key)
                        .ok_or_else(|| NamingError::MissingTemplateLabel(key.to_string()))?;
                    out.push_str(&SEPARATOR.replace_all(value, "_"));
                }
            }
            cursor = whole.end();
        }

        if cursor != self.format.len() {
            out.push_str(&self.format[cursor..]);
        }

        Ok(out)
    }
}
