//! CLI integration tests for rstdoc.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, check)
//! - Stdin/stdout handling
//! - Exit codes
//! - Configuration discovery

mod check;
mod common;
mod parse;
