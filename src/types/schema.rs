//! Declared label sets.

use std::collections::HashSet;

use crate::error::NamingError;

/// The closed set of label keys a metric accepts.
///
/// Built once at declaration time from the caller-supplied label names;
/// duplicates collapse and order is irrelevant. Every key supplied at
/// observation time must be a member of this set.
#[derive(Debug, Clone, Default)]
pub struct LabelSchema {
    names: HashSet<String>,
}

impl LabelSchema {
    pub fn new(label_names: &[String]) -> Self {
        Self {
            names: label_names.iter().cloned().collect(),
        }
    }

    /// True when the metric was declared without any label names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(key)
    }

    /// Pair up an alternating key/value sequence, validating each key
    /// against the schema.
    ///
    /// A trailing unpaired key binds to the literal value `"unknown"`.
    /// Duplicate keys are not collapsed here; callers that need
    /// last-write-wins semantics collect the pairs into a map.
    pub fn pairs<'a>(
        &self,
        label_values: &[&'a str],
    ) -> Result<Vec<(&'a str, &'a str)>, NamingError> {
        let mut pairs = Vec::with_capacity(label_values.len() / 2 + 1);
        for chunk in label_values.chunks(2) {
            let key = chunk[0];
            if !self.contains(key) {
                return Err(NamingError::UndeclaredLabel(key.to_string()));
            }
            pairs.push((key, chunk.get(1).copied().unwrap_or("unknown")));
        }
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> LabelSchema {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        LabelSchema::new(&names)
    }

    #[test]
    fn duplicates_collapse() {
        let s = schema(&["a", "a", "b"]);
        assert!(s.contains("a"));
        assert!(s.contains("b"));
        assert!(!s.contains("c"));
    }

    #[test]
    fn pairs_validates_keys() {
        let s = schema(&["region"]);
        let err = s.pairs(&["color", "red"]).unwrap_err();
        assert_eq!(err, NamingError::UndeclaredLabel("color".into()));
    }

    #[test]
    fn trailing_key_binds_unknown() {
        let s = schema(&["region"]);
        let pairs = s.pairs(&["region"]).unwrap();
        assert_eq!(pairs, vec![("region", "unknown")]);
    }

    #[test]
    fn empty_schema_accepts_empty_input() {
        let s = LabelSchema::default();
        assert!(s.is_empty());
        assert!(s.pairs(&[]).unwrap().is_empty());
    }
}
