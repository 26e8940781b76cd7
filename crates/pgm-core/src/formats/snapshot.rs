//! # Label Snapshot Format
//!
//! Binary serialization for a [`LabelIndex`], used to hand the labels of a
//! composed model from one run to the next.
//!
//! Format: Header (5 bytes) + postcard-serialized label list.
//! - 4 bytes: Magic ("PGML")
//! - 1 byte: Version
//!
//! Size and header are validated before the payload is decoded. Decoded
//! labels pass through the same validation as freshly constructed ones,
//! and duplicates are rejected.

use crate::primitives::{FORMAT_VERSION, MAGIC_BYTES, MAX_SNAPSHOT_SIZE};
use crate::{LabelIndex, PgmError, Result, VertexLabel};
use serde::{Deserialize, Serialize};

/// Header length in bytes: magic followed by the version byte.
const HEADER_SIZE: usize = MAGIC_BYTES.len() + 1;

#[derive(Serialize, Deserialize)]
struct SnapshotPayload {
    labels: Vec<VertexLabel>,
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Serialize a label index to bytes (header + payload).
pub fn index_to_bytes(index: &LabelIndex) -> Result<Vec<u8>> {
    let payload = SnapshotPayload {
        labels: index.iter().cloned().collect(),
    };

    let encoded =
        postcard::to_stdvec(&payload).map_err(|e| PgmError::SerializationError(e.to_string()))?;

    let mut result = Vec::with_capacity(HEADER_SIZE + encoded.len());
    result.extend_from_slice(MAGIC_BYTES);
    result.push(FORMAT_VERSION);
    result.extend_from_slice(&encoded);

    Ok(result)
}

/// Deserialize a label index from bytes.
///
/// Validates, in order: minimum size, maximum size, magic, version, then
/// payload. Bytes left over after the payload are an error.
pub fn index_from_bytes(bytes: &[u8]) -> Result<LabelIndex> {
    if bytes.len() > MAX_SNAPSHOT_SIZE {
        return Err(PgmError::DeserializationError(format!(
            "Data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_SNAPSHOT_SIZE
        )));
    }

    let (magic, rest) = bytes.split_first_chunk::<4>().ok_or_else(too_short)?;
    let (&version, body) = rest.split_first().ok_or_else(too_short)?;

    if magic != MAGIC_BYTES {
        return Err(PgmError::DeserializationError(
            "Invalid magic bytes".to_string(),
        ));
    }
    if version != FORMAT_VERSION {
        return Err(PgmError::DeserializationError(format!(
            "Unsupported version: {} (expected {})",
            version, FORMAT_VERSION
        )));
    }

    let (payload, remainder): (SnapshotPayload, _) =
        postcard::take_from_bytes(body).map_err(|e| {
            PgmError::DeserializationError(format!("Failed to decode label data: {}", e))
        })?;
    if !remainder.is_empty() {
        return Err(PgmError::DeserializationError(format!(
            "{} trailing bytes after label data",
            remainder.len()
        )));
    }

    LabelIndex::from_labels(payload.labels)
}

fn too_short() -> PgmError {
    PgmError::DeserializationError(format!(
        "Data too short: minimum {} bytes required",
        HEADER_SIZE
    ))
}

// =============================================================================
// TESTS
// =============================================================================
