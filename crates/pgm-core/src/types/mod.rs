//! # Core Type Definitions
//!
//! Shared types for the pgm value layer:
//! - Error types (`PgmError`)
//! - The `Result` alias used by every fallible operation
//!
//! ## Failure Model
//!
//! Every check in this crate is a pure predicate evaluated at construction
//! or query time. There is no transient failure mode, so nothing here is
//! retried: an error means the caller supplied an argument combination the
//! value type does not admit.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the pgm value layer.
///
/// - No silent failures
/// - Use `Result<T, PgmError>` for fallible operations
/// - Library code never panics; construction is all-or-nothing
///
/// The proposal variants render the exact messages callers of the host
/// library already match on, so their wording must not drift.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PgmError {
    /// A value was rejected at construction (e.g. an empty label name).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A namespace level was queried or stripped on a global label.
    /// Carries the qualified name of the offending label.
    #[error("Label {0} has no enclosing namespace")]
    EmptyNamespace(String),

    /// A parameter was supplied for a proposal kind that forbids it.
    #[error("Parameter {parameter} is not valid unless type is \"{required_kind}\"")]
    ParameterNotApplicable {
        parameter: String,
        required_kind: String,
    },

    /// A parameter required by the proposal kind was absent.
    #[error("{kind} Proposal Distribution requires a value for {parameter}")]
    MissingRequiredParameter { kind: String, parameter: String },

    /// The proposal tag is outside the closed set.
    #[error("Unknown Proposal Distribution type {0}")]
    UnrecognizedKind(String),

    /// A parameter name no proposal kind understands.
    #[error("Unknown Proposal Distribution parameter {0}")]
    UnrecognizedParameter(String),

    /// A label collection already holds a structurally equal label.
    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A configuration document was malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result alias for the pgm value layer.
pub type Result<T> = std::result::Result<T, PgmError>;

// =============================================================================
// TESTS
// =============================================================================
