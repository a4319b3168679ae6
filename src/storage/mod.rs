//! Storage layer for minop.
//!
//! This module provides SQLite-based persistence for:
//! - Host groups
//! - Hosts and their credentials

mod database;
mod hosts;
mod migrations;

pub use database::Database;
pub use hosts::HostStorage;
