//! Features built on top of host storage.
//!
//! - `import`: load plain-text host lists
//! - `completions`: shell completion scripts

pub mod completions;
pub mod import;
