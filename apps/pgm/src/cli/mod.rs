//! # pgm CLI Module
//!
//! This module implements the CLI interface for pgm.
//!
//! ## Available Commands
//!
//! - `label` - Build, parse and re-scope vertex labels
//! - `proposal` - Validate a proposal configuration
//! - `check` - Validate an inference configuration file
//! - `snapshot` - Write the latent labels of a configuration to a snapshot
//! - `inspect` - Read a label snapshot

mod commands;

use clap::{Parser, Subcommand};
use pgm_core::PgmError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// pgm - vertex labels and proposal configuration
///
/// Builds and inspects the identifiers and inference settings handed to a
/// probabilistic graph engine.
#[derive(Parser, Debug)]
#[command(name = "pgm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build, parse and re-scope vertex labels
    Label {
        #[command(subcommand)]
        action: LabelAction,
    },

    /// Validate a proposal configuration
    Proposal {
        /// Proposal type (prior, gaussian)
        #[arg(short = 't', long = "type")]
        kind: String,

        /// Gaussian spread
        #[arg(short, long, allow_negative_numbers = true)]
        sigma: Option<f64>,
    },

    /// Validate an inference configuration file
    Check {
        /// Path to the TOML configuration
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Write the latent labels of a configuration to a snapshot file
    Snapshot {
        /// Path to the TOML configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Nest every label under this extra outer scope first
        #[arg(long)]
        nest: Option<String>,
    },

    /// Read a label snapshot
    Inspect {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Only list labels in this namespace (innermost-first, comma-separated)
        #[arg(long, value_delimiter = ',')]
        namespace: Option<Vec<String>>,
    },
}

/// Label subcommands.
#[derive(Subcommand, Debug)]
pub enum LabelAction {
    /// Render the qualified name of a label
    Qualify {
        /// Unqualified name
        #[arg(short, long)]
        name: String,

        /// Enclosing namespaces, innermost first (comma-separated)
        #[arg(long, value_delimiter = ',')]
        namespace: Vec<String>,
    },

    /// Split a qualified name into its parts
    Parse {
        /// Dotted qualified name (outermost first)
        qualified: String,
    },

    /// Nest a label under an extra outer scope
    Nest {
        /// Dotted qualified name
        qualified: String,

        /// New outermost scope
        #[arg(short, long)]
        level: String,
    },

    /// Strip the outermost scope of a label
    Unnest {
        /// Dotted qualified name
        qualified: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), PgmError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Label { action } => match action {
            LabelAction::Qualify { name, namespace } => cmd_qualify(json_mode, &name, namespace),
            LabelAction::Parse { qualified } => cmd_parse(json_mode, &qualified),
            LabelAction::Nest { qualified, level } => cmd_nest(json_mode, &qualified, &level),
            LabelAction::Unnest { qualified } => cmd_unnest(json_mode, &qualified),
        },
        Commands::Proposal { kind, sigma } => cmd_proposal(json_mode, &kind, sigma),
        Commands::Check { config } => cmd_check(json_mode, &config),
        Commands::Snapshot {
            config,
            output,
            nest,
        } => cmd_snapshot(&config, &output, nest.as_deref()),
        Commands::Inspect { input, namespace } => {
            cmd_inspect(json_mode, &input, namespace.as_deref())
        }
    }
}
