//! Git adapter for the push flows.
//!
//! Every git invocation goes through [`GitRunner`] so the flows can be driven
//! by a scripted runner in tests. Arguments are always passed as a discrete
//! list; nothing is routed through a shell.

use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use crate::core::types::StepResult;
use crate::io::process::run_command;

/// Abstraction over git execution backends.
pub trait GitRunner {
    /// Run `git <args>` in `workdir` and report how it went.
    fn run(&self, workdir: &Path, args: &[&str]) -> StepResult;
}

/// Runner that spawns the real git executable.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    envs: Vec<(String, String)>,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable on every spawned git process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for SystemGit {
    #[instrument(skip_all, fields(workdir = %workdir.display()))]
    fn run(&self, workdir: &Path, args: &[&str]) -> StepResult {
        debug!(program = %self.program, args = %args.join(" "), "running git");
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .envs(self.envs.iter().map(|(key, value)| (key, value)))
            .current_dir(workdir);
        run_command(cmd)
    }
}
