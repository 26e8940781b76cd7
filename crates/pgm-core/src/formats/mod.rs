//! # Formats Module
//!
//! Binary encoding of label collections.
//!
//! File I/O lives in the app layer; this module only turns values into
//! bytes and back.

mod snapshot;

pub use snapshot::*;
