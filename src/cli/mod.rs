//! CLI module for toolcat - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for submitting,
//! listing, moderating and searching catalog entries, plus ad-hoc
//! intent classification.

pub mod commands;

pub use commands::Cli;
