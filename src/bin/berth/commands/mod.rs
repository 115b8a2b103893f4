//! Command implementations

pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod tree;
