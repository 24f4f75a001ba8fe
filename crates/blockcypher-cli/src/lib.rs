/*
[INPUT]:  Public API exports for blockcypher-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod commands;
pub mod config;

// Re-export main types for convenience
pub use cli::{Cli, Command};
pub use config::{FileConfig, Overrides, ResolvedConfig};
