use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{info, instrument, warn};

use super::Orchestrator;
use crate::core::types::{AbortStage, PushOutcome, RepoTarget};
use crate::io::git::GitRunner;

impl<G, R, W> Orchestrator<'_, G, R, W>
where
    G: GitRunner,
    R: BufRead,
    W: Write,
{
    /// Commit everything in the working directory and push it with upstream
    /// tracking.
    ///
    /// Staging, branch rename and remote add failures abort. A failed commit
    /// (usually "nothing to commit") is tolerated. A failed push ends the flow
    /// as [`PushOutcome::Rejected`]; recovery is left to the fix flow.
    #[instrument(skip_all, fields(workdir = %target.workdir.display()))]
    pub fn push_full_project(&mut self, target: &RepoTarget) -> Result<PushOutcome> {
        let config = self.config;
        self.console.say("--- Preparing Commit ---")?;

        if let Some(stage) = self.ensure_metadata(target)? {
            return Ok(PushOutcome::Aborted(stage));
        }

        if !self.run_step(target, &["add", "."])?.exited_zero() {
            self.console
                .say("\n❌ Staging failed. Nothing was committed or pushed.")?;
            return Ok(PushOutcome::Aborted(AbortStage::Staging));
        }

        let commit = self.run_step(target, &["commit", "-m", &config.commit_message])?;
        if !commit.exited_zero() {
            warn!("commit failed or nothing to commit, continuing");
            self.console
                .say("Note: Nothing new to commit or commit failed.")?;
        }

        if !self
            .run_step(target, &["branch", "-M", &config.branch])?
            .exited_zero()
        {
            self.console.say(&format!(
                "\n❌ Could not rename the current branch to '{}'.",
                config.branch
            ))?;
            return Ok(PushOutcome::Aborted(AbortStage::BranchRename));
        }

        if !self.replace_remote(target)? {
            self.console.say("\n❌ Failed to set remote URL.")?;
            return Ok(PushOutcome::Aborted(AbortStage::RemoteAdd));
        }

        self.console.say("\n--- Attempting Push ---")?;
        let pushed = self.run_step(
            target,
            &["push", "-u", &config.remote_name, &config.branch],
        )?;
        if pushed.exited_zero() {
            info!("project pushed");
            self.console.say("\n✅ Project successfully pushed.")?;
            Ok(PushOutcome::Pushed)
        } else {
            warn!("push rejected");
            self.rejection_guidance()?;
            Ok(PushOutcome::Rejected)
        }
    }
}
