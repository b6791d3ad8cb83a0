//! Command orchestration for the push flows.
//!
//! Each flow is a fixed sequence of git steps. A step's exit code decides
//! whether the sequence continues, stops with a diagnostic, or tolerates the
//! failure and moves on. All step output is relayed to the operator as soon as
//! the step finishes.
//!
//! - [`Orchestrator::push_full_project`]: init (if needed), stage, commit,
//!   configure remote, push with upstream tracking.
//! - [`Orchestrator::push_single_file`]: pick one file, stage, commit, push.
//! - [`Orchestrator::fix_rejected_push`]: re-assert remote, pull, push once.

mod fix;
mod push;
mod single_file;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, instrument, warn};

use crate::core::types::{AbortStage, RepoTarget, StepResult};
use crate::io::config::PushConfig;
use crate::io::console::Console;
use crate::io::git::GitRunner;

/// Drives git steps for one [`RepoTarget`] and reports to the console.
///
/// `Err` is reserved for console I/O failures; git failures are handled
/// inside the flows and surface as flow outcomes.
pub struct Orchestrator<'a, G, R, W> {
    git: &'a G,
    config: &'a PushConfig,
    console: &'a mut Console<R, W>,
}

impl<'a, G, R, W> Orchestrator<'a, G, R, W>
where
    G: GitRunner,
    R: BufRead,
    W: Write,
{
    pub fn new(git: &'a G, config: &'a PushConfig, console: &'a mut Console<R, W>) -> Self {
        Self {
            git,
            config,
            console,
        }
    }

    /// Run one git step in the target's working directory and relay its
    /// output (stdout, then stderr, each trimmed).
    #[instrument(skip_all, fields(args = %args.join(" ")))]
    pub fn run_step(&mut self, target: &RepoTarget, args: &[&str]) -> Result<StepResult> {
        let result = self.git.run(&target.workdir, args);
        match &result {
            StepResult::Completed {
                exit_code,
                stdout,
                stderr,
            } => {
                debug!(exit_code = ?exit_code, "step completed");
                let stdout = stdout.trim();
                if !stdout.is_empty() {
                    self.console.say(stdout)?;
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    self.console.say(stderr)?;
                }
            }
            StepResult::LaunchFailed { program, error } => {
                warn!(program = %program, err = %error, "step could not be launched");
                self.console
                    .say(&format!("Error: could not run {program}: {error}"))?;
            }
        }
        Ok(result)
    }

    /// `git init` plus primary-branch rename when `.git` is absent.
    ///
    /// Returns the abort stage if initialization failed. A failed rename is
    /// tolerated: on an unborn branch some git versions refuse it, and the
    /// full-project flow renames again after committing.
    fn ensure_metadata(&mut self, target: &RepoTarget) -> Result<Option<AbortStage>> {
        if target.has_metadata() {
            debug!("git metadata present");
            return Ok(None);
        }
        debug!("initializing git metadata");
        if !self.run_step(target, &["init"])?.exited_zero() {
            self.console
                .say("\n❌ Could not initialize a git repository here.")?;
            return Ok(Some(AbortStage::Initializing));
        }
        let config = self.config;
        let branch = &config.branch;
        let rename = self.run_step(target, &["branch", "-M", branch])?;
        if !rename.exited_zero() {
            warn!(branch = %branch, stderr = %rename.stderr().trim(), "initial branch rename failed");
        }
        Ok(None)
    }

    /// Point the configured remote at `target.repo_url`.
    ///
    /// Removal failure is expected when the remote does not exist yet; it is
    /// logged and ignored. Returns false if adding the remote failed.
    fn replace_remote(&mut self, target: &RepoTarget) -> Result<bool> {
        let config = self.config;
        let remote = &config.remote_name;
        let removed = self.run_step(target, &["remote", "remove", remote])?;
        if !removed.exited_zero() {
            warn!(
                remote = %remote,
                stderr = %removed.stderr().trim(),
                "remote removal failed (ignored)"
            );
        }
        self.add_remote(target)
    }

    fn add_remote(&mut self, target: &RepoTarget) -> Result<bool> {
        let config = self.config;
        let added = self.run_step(
            target,
            &["remote", "add", "--", &config.remote_name, &target.repo_url],
        )?;
        Ok(added.exited_zero())
    }

    fn rejection_guidance(&mut self) -> Result<()> {
        self.console
            .say("\n❌ Push rejected! Remote might contain new work.")?;
        self.console
            .say("Please try option 4 to automatically fix the synchronization issue.")
    }
}
