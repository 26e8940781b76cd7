//! # Vertex Labels
//!
//! Hierarchical identifiers for nodes in the external graph.
//!
//! A label is an unqualified name plus a chain of enclosing namespaces.
//! The chain is stored **innermost-first**: for `outer.inner.label1` the
//! stored namespace is `["inner", "outer"]`. Every operation that adds,
//! strips or reads a namespace level works on the *last* element, which is
//! the outermost scope.
//!
//! Labels are immutable. Deriving a label always returns a new value.

use crate::primitives::NAMESPACE_SEPARATOR;
use crate::{PgmError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// VERTEX LABEL
// =============================================================================

/// Identifies a vertex by name within an ordered chain of namespaces.
///
/// Equality and hashing are structural: two labels are equal iff their
/// unqualified names are equal and their namespace chains are equal
/// element-wise in the same order.
///
/// Comparing against a bare identifier is a separate, explicitly named
/// predicate ([`VertexLabel::has_unqualified_name`]) that ignores the
/// namespace entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLabel")]
pub struct VertexLabel {
    #[serde(rename = "name")]
    unqualified_name: String,
    namespace: Vec<String>,
}

impl VertexLabel {
    /// Create a label from a name and an innermost-first namespace chain.
    ///
    /// Returns `PgmError::InvalidArgument` if `name` is empty.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        namespace: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let unqualified_name = name.into();
        if unqualified_name.is_empty() {
            return Err(PgmError::InvalidArgument(
                "label name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            unqualified_name,
            namespace: namespace.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a top-level label with no enclosing namespace.
    pub fn global(name: impl Into<String>) -> Result<Self> {
        Self::new(name, std::iter::empty::<String>())
    }

    /// Parse a dotted qualified name such as `outer.inner.label1`.
    ///
    /// The last segment becomes the unqualified name; the preceding
    /// segments, reversed, become the innermost-first namespace. This is the
    /// inverse of [`VertexLabel::qualified_name`] for labels whose parts do
    /// not themselves contain the separator.
    pub fn parse(qualified: &str) -> Result<Self> {
        if qualified.is_empty() {
            return Err(PgmError::InvalidArgument(
                "qualified name must not be empty".to_string(),
            ));
        }

        let mut parts: Vec<&str> = qualified.split(NAMESPACE_SEPARATOR).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(PgmError::InvalidArgument(format!(
                "qualified name '{}' contains an empty segment",
                qualified
            )));
        }

        let name = parts.pop().unwrap_or_default();
        parts.reverse();
        Self::new(name, parts)
    }

    /// The name without any namespace.
    #[must_use]
    pub fn unqualified_name(&self) -> &str {
        &self.unqualified_name
    }

    /// The namespace chain, innermost scope first.
    #[must_use]
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// Number of enclosing namespace levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.namespace.len()
    }

    /// Check if this label sits at the top level.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Compare against a bare identifier.
    ///
    /// True iff `name` equals the unqualified name. The namespace is not
    /// consulted, so `outer.x` and `other.x` both match `"x"`.
    #[must_use]
    pub fn has_unqualified_name(&self, name: &str) -> bool {
        self.unqualified_name == name
    }

    /// Check if `candidate` is exactly this label's namespace chain.
    ///
    /// The candidate is read innermost-first, like the stored chain. Order
    /// and length both matter.
    #[must_use]
    pub fn is_in_namespace<S: AsRef<str>>(&self, candidate: &[S]) -> bool {
        self.namespace.len() == candidate.len()
            && self
                .namespace
                .iter()
                .zip(candidate)
                .all(|(level, other)| level == other.as_ref())
    }

    /// Return a copy of this label nested under one more outer scope.
    #[must_use]
    pub fn with_extra_namespace(&self, level: impl Into<String>) -> Self {
        let mut namespace = Vec::with_capacity(self.namespace.len() + 1);
        namespace.extend(self.namespace.iter().cloned());
        namespace.push(level.into());

        Self {
            unqualified_name: self.unqualified_name.clone(),
            namespace,
        }
    }

    /// Return a copy of this label with the outermost scope removed.
    ///
    /// Returns `PgmError::EmptyNamespace` for a global label rather than
    /// handing back an unchanged copy.
    pub fn without_outer_namespace(&self) -> Result<Self> {
        match self.namespace.split_last() {
            Some((_, inner)) => Ok(Self {
                unqualified_name: self.unqualified_name.clone(),
                namespace: inner.to_vec(),
            }),
            None => Err(self.empty_namespace()),
        }
    }

    /// The outermost enclosing scope.
    ///
    /// Returns `PgmError::EmptyNamespace` for a global label.
    pub fn outer_namespace(&self) -> Result<&str> {
        self.namespace
            .last()
            .map(String::as_str)
            .ok_or_else(|| self.empty_namespace())
    }

    /// Render the dotted qualified name, outermost scope first.
    ///
    /// `("label1", ["inner", "outer"])` renders as `outer.inner.label1`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        let mut qualified = String::new();
        for level in self.namespace.iter().rev() {
            qualified.push_str(level);
            qualified.push(NAMESPACE_SEPARATOR);
        }
        qualified.push_str(&self.unqualified_name);
        qualified
    }

    /// Parts of the qualified name in rendering order.
    fn components(&self) -> impl Iterator<Item = &str> {
        self.namespace
            .iter()
            .rev()
            .map(String::as_str)
            .chain(std::iter::once(self.unqualified_name.as_str()))
    }

    fn empty_namespace(&self) -> PgmError {
        PgmError::EmptyNamespace(self.qualified_name())
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

impl FromStr for VertexLabel {
    type Err = PgmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Outermost scope first, then inward, then the name. Labels sharing a
// prefix of scopes therefore sort next to each other.
impl Ord for VertexLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(other.components())
    }
}

impl PartialOrd for VertexLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// SERDE SUPPORT
// =============================================================================

/// Unvalidated wire form; converted through `VertexLabel::new`.
#[derive(Deserialize)]
struct RawLabel {
    name: String,
    #[serde(default)]
    namespace: Vec<String>,
}

impl TryFrom<RawLabel> for VertexLabel {
    type Error = PgmError;

    fn try_from(raw: RawLabel) -> Result<Self> {
        Self::new(raw.name, raw.namespace)
    }
}

// =============================================================================
// TESTS
// =============================================================================
