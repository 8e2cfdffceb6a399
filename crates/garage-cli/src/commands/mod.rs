//! CLI command implementations.

pub mod add;
pub mod catalog;
pub mod common;
pub mod delete;
pub mod import;
pub mod list;
pub mod paths;
pub mod show;
