use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, instrument, warn};

use super::Orchestrator;
use crate::core::types::{FixOutcome, RepoTarget};
use crate::io::git::GitRunner;

impl<G, R, W> Orchestrator<'_, G, R, W>
where
    G: GitRunner,
    R: BufRead,
    W: Write,
{
    /// Recover from a rejected push: re-assert the remote, pull, and push
    /// exactly once if the pull succeeded.
    ///
    /// The pull always merges (`--no-rebase`), whatever the user's
    /// `pull.rebase`/`pull.ff` settings, and accepts a remote whose history
    /// was started independently. A failed pull (typically a merge conflict)
    /// ends the flow without any push attempt.
    #[instrument(skip_all, fields(workdir = %target.workdir.display()))]
    pub fn fix_rejected_push(&mut self, target: &RepoTarget) -> Result<FixOutcome> {
        let config = self.config;
        self.console
            .say("\n--- Starting Fix Process (Pulling Remote Changes) ---")?;

        if !self.replace_remote(target)? {
            self.console.say("Failed to set remote URL.")?;
            return Ok(FixOutcome::RemoteFailed);
        }

        self.console.say(&format!(
            "Running: git pull {} {}...",
            config.remote_name, config.branch
        ))?;
        let pulled = self.run_step(
            target,
            &[
                "pull",
                "--no-rebase",
                "--allow-unrelated-histories",
                &config.remote_name,
                &config.branch,
            ],
        )?;
        if !pulled.exited_zero() {
            warn!("pull failed, manual resolution required");
            self.console
                .say("\n❌ Auto-fix FAILED. Git could not automatically merge the changes.")?;
            self.console.say(
                "You may have merge conflicts. Please resolve them manually in the terminal.",
            )?;
            return Ok(FixOutcome::PullFailed);
        }

        self.console
            .say("\n--- Retrying Push after Successful Pull ---")?;
        if self
            .run_step(target, &["push", &config.remote_name, &config.branch])?
            .exited_zero()
        {
            info!("project synchronized");
            self.console
                .say("\n✅ Project successfully synchronized and pushed.")?;
            Ok(FixOutcome::Synchronized)
        } else {
            warn!("push failed after pull");
            self.console
                .say("\n❌ Push FAILED again. Check terminal output for errors.")?;
            Ok(FixOutcome::PushFailed)
        }
    }
}
