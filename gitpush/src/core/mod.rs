//! Pure, deterministic pieces of the push flows.
//!
//! Nothing in this module spawns processes or touches the filesystem beyond
//! the metadata probe on [`types::RepoTarget`].

pub mod selection;
pub mod types;
