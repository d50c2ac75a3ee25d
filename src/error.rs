//! Heiti error types.

/// Violations of a metric's declaration contract.
///
/// Every variant signals a bug at the call site, not a runtime condition:
/// the facade operations abort by panicking with the Display text of one
/// of these values rather than degrading or substituting a default name.
/// [`NameFormatter::try_format`] returns them for callers that want a
/// checked probe.
///
/// [`NameFormatter::try_format`]: crate::format::NameFormatter::try_format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// A label key supplied at observation time that is not part of the
    /// metric's declared label names.
    #[error("undeclared label name: {0}")]
    UndeclaredLabel(String),

    /// A template placeholder referencing a label that was not supplied.
    #[error("template references missing label: {0}")]
    MissingTemplateLabel(String),

    /// A mutating operation on a labeled metric before any `with` call.
    #[error("metric used before labels were bound; call with() first")]
    Unbound,
}

/// Result type alias for naming operations.
pub type Result<T> = std::result::Result<T, NamingError>;
