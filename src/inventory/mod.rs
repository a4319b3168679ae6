//! Host inventory domain types.

mod tree;
mod types;

pub use tree::{GroupNode, HostTree};
pub use types::{Host, HostGroup, NewHost, DEFAULT_PORT};
