//! # pgm-core
//!
//! Identity and configuration values for a probabilistic-graph facade.
//!
//! The graph itself (vertex evaluation, sampling, differentiation) is owned
//! by an external engine. This crate holds the two pieces of logic that sit
//! in front of it and never cross the process boundary:
//!
//! - **Vertex labels**: a name plus an ordered chain of enclosing
//!   namespaces, with containment queries and derivation of nested labels.
//! - **Proposal configuration**: a validated choice between proposing from
//!   the prior or from a symmetric Gaussian of given spread.
//!
//! ## Architectural Constraints
//!
//! - Pure values: immutable after construction, safe to share across threads
//! - All validation happens at construction; no partial values are observable
//! - NO async, NO network, NO file I/O

// =============================================================================
// MODULES
// =============================================================================

pub mod formats;
pub mod index;
pub mod label;
pub mod primitives;
pub mod proposal;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{PgmError, Result};

// =============================================================================
// RE-EXPORTS: Labels
// =============================================================================

pub use index::LabelIndex;
pub use label::VertexLabel;

// =============================================================================
// RE-EXPORTS: Proposals
// =============================================================================

pub use proposal::{ProposalDistribution, ProposalKind, ProposalParameters};

// =============================================================================
// RE-EXPORTS: Formats
// =============================================================================

pub use formats::{index_from_bytes, index_to_bytes};
