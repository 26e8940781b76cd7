//! # pgm
//!
//! Command-line front end for vertex labels and proposal configuration.
//!
//! ## Usage
//!
//! ```bash
//! # Labels
//! pgm label qualify --name label1 --namespace inner,outer
//! pgm label parse outer.inner.label1
//! pgm label nest outer.inner.label1 --level top_level
//!
//! # Proposals and configuration
//! pgm proposal --type gaussian --sigma 0.5
//! pgm check --config inference.toml
//! pgm snapshot --config inference.toml --output model.pgml --nest world
//! pgm inspect --input model.pgml --namespace world
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` overrides the filter and
//! `PGM_LOG_FORMAT=json` switches to machine-parseable output.

use clap::Parser;
use pgm::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments first so --verbose can pick the default filter.
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the global subscriber. Stdout is reserved for command output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("PGM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose { "pgm=debug" } else { "pgm=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
