//! # Primitives
//!
//! Fixed constants shared by labels, proposals and the snapshot format.
//! These are compiled in and never configurable at runtime.

/// Separator between the parts of a qualified label name.
///
/// Qualified names are rendered outermost scope first:
/// `outer.inner.name`.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Tag selecting the prior as proposal mechanism.
pub const PRIOR_TAG: &str = "prior";

/// Tag selecting a symmetric Gaussian perturbation as proposal mechanism.
pub const GAUSSIAN_TAG: &str = "gaussian";

/// Spread parameter of the Gaussian proposal.
pub const SIGMA_PARAMETER: &str = "sigma";

/// Magic bytes for the label snapshot header.
///
/// - File Header = Magic Bytes ("PGML") + Version (u8) before payload.
pub const MAGIC_BYTES: &[u8; 4] = b"PGML";

/// Current snapshot format version.
///
/// Increment this when making breaking changes to the snapshot layout.
pub const FORMAT_VERSION: u8 = 1;

/// Maximum allowed snapshot payload size (64 MB).
///
/// Checked before any decoding takes place.
pub const MAX_SNAPSHOT_SIZE: usize = 64 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes_correct() {
        assert_eq!(MAGIC_BYTES, b"PGML");
    }

    #[test]
    fn tags_are_lowercase() {
        assert_eq!(PRIOR_TAG, PRIOR_TAG.to_lowercase());
        assert_eq!(GAUSSIAN_TAG, GAUSSIAN_TAG.to_lowercase());
    }
}
