//! # pgm
//!
//! Library half of the pgm binary: CLI definitions, command
//! implementations and inference-configuration loading. Exposed as a library
//! so integration tests can drive commands without spawning a process.

pub mod cli;
pub mod config;

pub use config::InferenceConfig;
