//! # Label Index
//!
//! A deterministic set of vertex labels belonging to one model.
//!
//! Graph-construction code registers the label of every vertex it creates
//! here, then looks labels up by qualified name or by namespace. Composing
//! a reusable sub-model into a larger one is a [`LabelIndex::nested`] call:
//! every label gains the same extra outer scope, and the result is merged
//! into the parent index.
//!
//! Uses `BTreeSet` for deterministic iteration (ordered by qualified name
//! components, outermost scope first).

use crate::{PgmError, Result, VertexLabel};
use std::collections::BTreeSet;

/// Ordered, duplicate-free collection of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    labels: BTreeSet<VertexLabel>,
}

impl LabelIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from labels, rejecting duplicates.
    pub fn from_labels(labels: impl IntoIterator<Item = VertexLabel>) -> Result<Self> {
        let mut index = Self::new();
        for label in labels {
            index.insert(label)?;
        }
        Ok(index)
    }

    /// Register a label.
    ///
    /// Returns `PgmError::DuplicateLabel` if an equal label is present.
    pub fn insert(&mut self, label: VertexLabel) -> Result<()> {
        if self.labels.contains(&label) {
            return Err(PgmError::DuplicateLabel(label.qualified_name()));
        }
        self.labels.insert(label);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, label: &VertexLabel) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate labels in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexLabel> {
        self.labels.iter()
    }

    /// Find a label by its dotted qualified name.
    ///
    /// The name is parsed before lookup, so a label whose unqualified name
    /// itself contains `.` is never returned: `("a.b", [])` renders as
    /// `a.b` just like `("b", ["a"])`, and only the latter is found.
    #[must_use]
    pub fn get_by_qualified_name(&self, qualified: &str) -> Option<&VertexLabel> {
        let key = VertexLabel::parse(qualified).ok()?;
        self.labels.get(&key)
    }

    /// Labels whose namespace is exactly `namespace` (innermost-first).
    #[must_use]
    pub fn in_namespace<S: AsRef<str>>(&self, namespace: &[S]) -> Vec<&VertexLabel> {
        self.labels
            .iter()
            .filter(|label| label.is_in_namespace(namespace))
            .collect()
    }

    /// Labels with the given unqualified name, in any namespace.
    #[must_use]
    pub fn with_unqualified_name(&self, name: &str) -> Vec<&VertexLabel> {
        self.labels
            .iter()
            .filter(|label| label.has_unqualified_name(name))
            .collect()
    }

    /// Nest every label under an extra outer scope.
    ///
    /// Structural equality is preserved by adding the same level to all
    /// labels, so the result cannot contain duplicates.
    #[must_use]
    pub fn nested(&self, level: &str) -> Self {
        Self {
            labels: self
                .labels
                .iter()
                .map(|label| label.with_extra_namespace(level))
                .collect(),
        }
    }

    /// Strip the outermost scope from every label.
    ///
    /// Fails with `PgmError::EmptyNamespace` on the first global label, and
    /// with `PgmError::DuplicateLabel` if two labels collapse to one.
    pub fn unnested(&self) -> Result<Self> {
        let mut index = Self::new();
        for label in &self.labels {
            index.insert(label.without_outer_namespace()?)?;
        }
        Ok(index)
    }

    /// Insert every label of `other`.
    ///
    /// Checked before inserting anything, so a failed merge leaves `self`
    /// unchanged.
    pub fn merge(&mut self, other: &LabelIndex) -> Result<()> {
        if let Some(clash) = other.labels.intersection(&self.labels).next() {
            return Err(PgmError::DuplicateLabel(clash.qualified_name()));
        }
        self.labels.extend(other.labels.iter().cloned());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LabelIndex {
    type Item = &'a VertexLabel;
    type IntoIter = std::collections::btree_set::Iter<'a, VertexLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
