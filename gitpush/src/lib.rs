//! Interactive helper that pushes a working directory to a remote git
//! repository.
//!
//! The crate keeps the usual split:
//!
//! - **[`core`]**: Pure values and parsing (targets, step results, outcomes,
//!   menu and file selection).
//! - **[`io`]**: Side-effecting adapters (process execution, git, console,
//!   file listing, config).
//!
//! [`orchestrator`] sequences git steps for each flow and [`menu`] wires the
//! flows to the operator.

pub mod core;
pub mod io;
pub mod logging;
pub mod menu;
pub mod orchestrator;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
