//! Tests for the CLI module
//!
//! Argument parsing and config resolution are kept in separate files.
