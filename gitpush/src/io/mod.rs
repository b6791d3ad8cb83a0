//! I/O adapters for the push flows.

pub mod config;
pub mod console;
pub mod files;
pub mod git;
pub mod process;
