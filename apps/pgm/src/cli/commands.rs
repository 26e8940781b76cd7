//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::InferenceConfig;
use pgm_core::{
    LabelIndex, PgmError, ProposalDistribution, ProposalParameters, VertexLabel,
    formats::{index_from_bytes, index_to_bytes},
    primitives::{MAX_SNAPSHOT_SIZE, SIGMA_PARAMETER},
};
use std::path::{Path, PathBuf};

// =============================================================================
// HELPERS
// =============================================================================

/// Validate output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, PgmError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        PgmError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(PgmError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| PgmError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Print a JSON value.
fn print_json(value: &serde_json::Value) -> Result<(), PgmError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| PgmError::SerializationError(e.to_string()))?;
    println!("{}", rendered);
    Ok(())
}

/// JSON view of a label, including its rendered name.
fn label_json(label: &VertexLabel) -> serde_json::Value {
    serde_json::json!({
        "name": label.unqualified_name(),
        "namespace": label.namespace(),
        "qualified_name": label.qualified_name(),
        "outer_namespace": label.outer_namespace().ok(),
    })
}

fn print_label(json_mode: bool, label: &VertexLabel) -> Result<(), PgmError> {
    if json_mode {
        print_json(&label_json(label))
    } else {
        println!("{}", label);
        Ok(())
    }
}

// =============================================================================
// LABEL COMMANDS
// =============================================================================

/// Render the qualified name for a name and innermost-first namespace.
pub fn cmd_qualify(json_mode: bool, name: &str, namespace: Vec<String>) -> Result<(), PgmError> {
    let label = VertexLabel::new(name, namespace)?;
    print_label(json_mode, &label)
}

/// Split a qualified name into name and namespace.
pub fn cmd_parse(json_mode: bool, qualified: &str) -> Result<(), PgmError> {
    let label = VertexLabel::parse(qualified)?;
    tracing::debug!("Parsed '{}' at depth {}", qualified, label.depth());

    if json_mode {
        return print_json(&label_json(&label));
    }

    println!("Label: {}", label);
    println!("  Name:       {}", label.unqualified_name());
    if label.is_global() {
        println!("  Namespace:  (global)");
    } else {
        println!("  Namespace:  [{}]", label.namespace().join(", "));
        println!("  Outermost:  {}", label.outer_namespace()?);
    }
    Ok(())
}

/// Nest a label under an extra outer scope.
pub fn cmd_nest(json_mode: bool, qualified: &str, level: &str) -> Result<(), PgmError> {
    let label = VertexLabel::parse(qualified)?;
    print_label(json_mode, &label.with_extra_namespace(level))
}

/// Strip the outermost scope of a label.
pub fn cmd_unnest(json_mode: bool, qualified: &str) -> Result<(), PgmError> {
    let label = VertexLabel::parse(qualified)?;
    print_label(json_mode, &label.without_outer_namespace()?)
}

// =============================================================================
// PROPOSAL COMMAND
// =============================================================================

/// Validate a proposal tag and optional sigma.
pub fn cmd_proposal(json_mode: bool, kind: &str, sigma: Option<f64>) -> Result<(), PgmError> {
    let mut parameters = ProposalParameters::new();
    if let Some(sigma) = sigma {
        parameters = parameters.with(SIGMA_PARAMETER, sigma);
    }

    let proposal = ProposalDistribution::create(kind, &parameters)?;

    if json_mode {
        let value = serde_json::to_value(proposal)
            .map_err(|e| PgmError::SerializationError(e.to_string()))?;
        print_json(&value)
    } else {
        println!("Proposal: {}", proposal);
        Ok(())
    }
}

// =============================================================================
// CONFIGURATION COMMANDS
// =============================================================================

/// Validate a configuration file and summarise it.
pub fn cmd_check(json_mode: bool, path: &Path) -> Result<(), PgmError> {
    let config = InferenceConfig::load(path)?;
    tracing::info!(
        "Configuration {} is valid ({} latents)",
        path.display(),
        config.latents.len()
    );

    if json_mode {
        let proposal = serde_json::to_value(config.proposal)
            .map_err(|e| PgmError::SerializationError(e.to_string()))?;
        let output = serde_json::json!({
            "config": path.to_string_lossy(),
            "proposal": proposal,
            "namespace": config.namespace,
            "latents": config
                .latents
                .iter()
                .map(VertexLabel::qualified_name)
                .collect::<Vec<_>>(),
        });
        return print_json(&output);
    }

    println!("Configuration: {}", path.display());
    println!("  Proposal:   {}", config.proposal);
    if !config.namespace.is_empty() {
        println!("  Namespace:  [{}]", config.namespace.join(", "));
    }
    println!("  Latents:    {}", config.latents.len());
    for label in &config.latents {
        println!("    {}", label);
    }
    Ok(())
}

/// Write the latent labels of a configuration to a snapshot file.
pub fn cmd_snapshot(config: &Path, output: &Path, nest: Option<&str>) -> Result<(), PgmError> {
    let config = InferenceConfig::load(config)?;
    let latents = match nest {
        Some(level) => config.latents.nested(level),
        None => config.latents,
    };

    let target = validate_output_path(output)?;
    let bytes = index_to_bytes(&latents)?;
    std::fs::write(&target, &bytes).map_err(|e| {
        PgmError::IoError(format!("Cannot write '{}': {}", target.display(), e))
    })?;

    tracing::info!(
        "Wrote {} labels ({} bytes) to {}",
        latents.len(),
        bytes.len(),
        target.display()
    );
    Ok(())
}

/// Read a label snapshot file.
pub fn load_snapshot(path: &Path) -> Result<LabelIndex, PgmError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PgmError::IoError(format!("Cannot read '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SNAPSHOT_SIZE as u64 {
        return Err(PgmError::DeserializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_SNAPSHOT_SIZE
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| PgmError::IoError(format!("Cannot read '{}': {}", path.display(), e)))?;
    index_from_bytes(&bytes)
}

/// List the labels in a snapshot, optionally filtered by namespace.
pub fn cmd_inspect(
    json_mode: bool,
    input: &Path,
    namespace: Option<&[String]>,
) -> Result<(), PgmError> {
    let index = load_snapshot(input)?;
    let labels: Vec<&VertexLabel> = match namespace {
        Some(namespace) => index.in_namespace(namespace),
        None => index.iter().collect(),
    };

    if json_mode {
        let output = serde_json::json!({
            "snapshot": input.to_string_lossy(),
            "total": index.len(),
            "labels": labels.iter().map(|label| label_json(label)).collect::<Vec<_>>(),
        });
        return print_json(&output);
    }

    println!("Snapshot: {} ({} labels)", input.display(), index.len());
    for label in labels {
        println!("  {}", label);
    }
    Ok(())
}
