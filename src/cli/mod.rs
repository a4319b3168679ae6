//! Command-line interface for minop.

pub mod args;
pub mod commands;
