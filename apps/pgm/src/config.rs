//! # Inference Configuration
//!
//! TOML document describing one inference run:
//!
//! ```toml
//! [proposal]
//! type = "gaussian"
//! sigma = 0.5
//!
//! [model]
//! namespace = ["submodel", "world"]   # innermost-first, optional
//! latents = ["temperature", "world.submodel.pressure"]
//! ```
//!
//! The proposal table is decoded through the core validator, so a config
//! file is rejected with the same messages as a programmatic call. Bare
//! latent names are placed in `model.namespace`; dotted names are taken as
//! fully qualified.

use pgm_core::{LabelIndex, PgmError, ProposalDistribution, VertexLabel};
use serde::Deserialize;
use std::path::Path;

/// Maximum configuration file size (1 MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// RAW DOCUMENT
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    proposal: ProposalDistribution,
    #[serde(default)]
    model: RawModel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModel {
    #[serde(default)]
    namespace: Vec<String>,
    #[serde(default)]
    latents: Vec<String>,
}

// =============================================================================
// VALIDATED CONFIGURATION
// =============================================================================

/// A fully validated inference configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceConfig {
    /// How candidate values are proposed.
    pub proposal: ProposalDistribution,
    /// Namespace bare latent names are placed in (innermost-first).
    pub namespace: Vec<String>,
    /// Labels of the vertices to sample.
    pub latents: LabelIndex,
}

impl InferenceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, PgmError> {
        let raw: RawConfig =
            toml::from_str(source).map_err(|e| PgmError::ConfigError(e.to_string()))?;

        let mut latents = LabelIndex::new();
        for entry in &raw.model.latents {
            let parsed = VertexLabel::parse(entry)?;
            let label = if parsed.is_global() {
                VertexLabel::new(parsed.unqualified_name(), raw.model.namespace.iter().cloned())?
            } else {
                parsed
            };
            latents.insert(label)?;
        }

        Ok(Self {
            proposal: raw.proposal,
            namespace: raw.model.namespace,
            latents,
        })
    }

    /// Read, size-check and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, PgmError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PgmError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PgmError::ConfigError(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            PgmError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;

        tracing::debug!("Loaded {} bytes from {}", source.len(), path.display());
        Self::from_toml_str(&source)
    }
}

// =============================================================================
// TESTS
// =============================================================================
