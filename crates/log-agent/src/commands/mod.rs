//! Subcommands.

pub mod sync;
