//! Command implementations backing the `gx` binary.

pub mod commands;
