//! wavclip CLI library.
//!
//! Command implementations and logging setup for the `wavclip` binary.

pub mod commands;
pub mod logging;
