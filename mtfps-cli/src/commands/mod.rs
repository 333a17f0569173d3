//! Command implementations for the CLI.

/// Module containing the probe run: selection, probing and printing.
pub mod probe;
