//! minop - host inventory manager
//!
//! This crate keeps remote hosts, organised into host groups, in a local
//! `SQLite` database and provides a command-line interface over it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod inventory;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::MinopError;
pub use inventory::{Host, HostGroup, NewHost};
pub use storage::{Database, HostStorage};
