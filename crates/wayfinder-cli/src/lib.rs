//! Facility wayfinding CLI library.
//!
//! Command handlers, output formatting, and terminal styling for the
//! `wayfinder-cli` binary. Handlers return rendered text so the binary only
//! has to print it.

pub mod commands;
pub mod output;
pub mod terminal;
