use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use super::Orchestrator;
use crate::core::selection::parse_selection;
use crate::core::types::{AbortStage, RepoTarget, SingleFileOutcome};
use crate::io::files::list_selectable_files;
use crate::io::git::GitRunner;

impl<G, R, W> Orchestrator<'_, G, R, W>
where
    G: GitRunner,
    R: BufRead,
    W: Write,
{
    /// Let the operator pick one file, then stage, commit and push only it.
    ///
    /// Nothing is run against git until a valid 1-based selection is made.
    /// On a first-time directory the repository and remote are set up before
    /// staging; an existing remote is left as is.
    #[instrument(skip_all, fields(workdir = %target.workdir.display()))]
    pub fn push_single_file(&mut self, target: &RepoTarget) -> Result<SingleFileOutcome> {
        let config = self.config;
        let files = list_selectable_files(&target.workdir)?;
        if files.is_empty() {
            self.console
                .say("No non-hidden files found in the working directory.")?;
            return Ok(SingleFileOutcome::NoFiles);
        }

        self.console.say("\nSelect a file to upload:\n")?;
        for (i, file) in files.iter().enumerate() {
            self.console.say(&format!("{}. {file}", i + 1))?;
        }

        let answer = self.console.prompt("\nEnter file number: ")?;
        let Some(index) = parse_selection(&answer, files.len()) else {
            debug!(answer = %answer, "invalid file selection");
            self.console.say("Invalid choice.")?;
            return Ok(SingleFileOutcome::InvalidSelection);
        };
        let path = files[index].clone();
        let name = file_name(&path);
        debug!(path = %path, "file selected");

        if !target.has_metadata() {
            if let Some(stage) = self.ensure_metadata(target)? {
                return Ok(SingleFileOutcome::Aborted(stage));
            }
            if !self.add_remote(target)? {
                self.console.say("\n❌ Failed to set remote URL.")?;
                return Ok(SingleFileOutcome::Aborted(AbortStage::RemoteAdd));
            }
        }

        if !self.run_step(target, &["add", "--", &path])?.exited_zero() {
            self.console
                .say(&format!("\n❌ Could not stage '{path}'. Nothing was pushed."))?;
            return Ok(SingleFileOutcome::Aborted(AbortStage::Staging));
        }

        let message = format!("Updated {name}");
        if !self.run_step(target, &["commit", "-m", &message])?.exited_zero() {
            warn!(path = %path, "commit failed or nothing to commit, continuing");
            self.console
                .say("Note: Nothing new to commit or commit failed.")?;
        }

        let pushed = self.run_step(target, &["push", &config.remote_name, &config.branch])?;
        if pushed.exited_zero() {
            info!(path = %path, "file pushed");
            self.console
                .say(&format!("\n✅ File '{name}' uploaded successfully."))?;
            Ok(SingleFileOutcome::Pushed { path })
        } else {
            warn!(path = %path, "push rejected");
            self.rejection_guidance()?;
            Ok(SingleFileOutcome::Rejected { path })
        }
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
