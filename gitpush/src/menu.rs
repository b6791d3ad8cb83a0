//! Interactive menu: pick a flow, supply the repository URL, run it, pause.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::core::types::{FixOutcome, MenuChoice, PushOutcome, RepoTarget, SingleFileOutcome};
use crate::io::config::PushConfig;
use crate::io::console::Console;
use crate::io::git::GitRunner;
use crate::orchestrator::Orchestrator;

/// What a menu run ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    InvalidChoice,
    MissingUrl,
    Project(PushOutcome),
    SingleFile(SingleFileOutcome),
    Fix(FixOutcome),
    /// The flow hit an environment error (e.g. unreadable working directory).
    Failed,
}

const OPTIONS: [&str; 4] = [
    "1. Upload full project (first time)",
    "2. Upload a specific file",
    "3. Upload / update whole project (existing repo)",
    "4. FIX: Push was rejected ('fetch first' error)",
];

/// Run the menu once against `workdir`.
///
/// Every path ends with the "Press Enter to close..." pause. Only console I/O
/// failures are returned as `Err`.
pub fn run_menu<G, R, W>(
    git: &G,
    config: &PushConfig,
    console: &mut Console<R, W>,
    workdir: &Path,
) -> Result<MenuOutcome>
where
    G: GitRunner,
    R: BufRead,
    W: Write,
{
    let outcome = select_and_run(git, config, console, workdir)?;
    info!(outcome = ?outcome, "menu run finished");
    console.pause()?;
    Ok(outcome)
}

fn select_and_run<G, R, W>(
    git: &G,
    config: &PushConfig,
    console: &mut Console<R, W>,
    workdir: &Path,
) -> Result<MenuOutcome>
where
    G: GitRunner,
    R: BufRead,
    W: Write,
{
    console.say("=== Git Push Utility ===\n")?;
    for option in OPTIONS {
        console.say(option)?;
    }

    let answer = console.prompt("\nEnter your choice (1/2/3/4): ")?;
    let Some(choice) = MenuChoice::parse(&answer) else {
        console.say("Invalid choice.")?;
        return Ok(MenuOutcome::InvalidChoice);
    };

    let repo_url = console.prompt("\nEnter your repository URL (ending with .git): ")?;
    if repo_url.is_empty() {
        console.say("Repository URL must not be empty.")?;
        return Ok(MenuOutcome::MissingUrl);
    }

    let target = RepoTarget::new(repo_url, workdir);
    info!(choice = ?choice, url = %target.repo_url, "running flow");
    let mut orchestrator = Orchestrator::new(git, config, console);
    let result = match choice {
        MenuChoice::PushProject | MenuChoice::UpdateProject => orchestrator
            .push_full_project(&target)
            .map(MenuOutcome::Project),
        MenuChoice::PushSingleFile => orchestrator
            .push_single_file(&target)
            .map(MenuOutcome::SingleFile),
        MenuChoice::FixRejectedPush => orchestrator
            .fix_rejected_push(&target)
            .map(MenuOutcome::Fix),
    };

    match result {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            error!(err = %format!("{err:#}"), "flow failed");
            console.say(&format!("Error: {err:#}"))?;
            Ok(MenuOutcome::Failed)
        }
    }
}
