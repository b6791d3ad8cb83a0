//! Value types shared by the push flows.

use std::path::PathBuf;

/// Remote URL and working directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub repo_url: String,
    pub workdir: PathBuf,
}

impl RepoTarget {
    pub fn new(repo_url: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            repo_url: repo_url.into(),
            workdir: workdir.into(),
        }
    }

    /// True if the working directory already carries git metadata.
    pub fn has_metadata(&self) -> bool {
        self.workdir.join(".git").exists()
    }
}

/// Result of one external command invocation.
///
/// A failed command is a value, not an error: callers branch on
/// [`StepResult::exited_zero`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    /// The process ran to completion. `exit_code` is `None` when it was
    /// terminated by a signal.
    Completed {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    /// The process could not be started at all.
    LaunchFailed { program: String, error: String },
}

impl StepResult {
    pub fn success() -> Self {
        Self::Completed {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn exited_zero(&self) -> bool {
        matches!(
            self,
            Self::Completed {
                exit_code: Some(0),
                ..
            }
        )
    }

    pub fn stdout(&self) -> &str {
        match self {
            Self::Completed { stdout, .. } => stdout,
            Self::LaunchFailed { .. } => "",
        }
    }

    pub fn stderr(&self) -> &str {
        match self {
            Self::Completed { stderr, .. } => stderr,
            Self::LaunchFailed { .. } => "",
        }
    }
}

/// Menu entries offered to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Option 1: first upload of a whole project.
    PushProject,
    /// Option 2: upload one selected file.
    PushSingleFile,
    /// Option 3: update an existing project (same flow as option 1).
    UpdateProject,
    /// Option 4: recover from a rejected push.
    FixRejectedPush,
}

impl MenuChoice {
    /// Parse the operator's menu input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::PushProject),
            "2" => Some(Self::PushSingleFile),
            "3" => Some(Self::UpdateProject),
            "4" => Some(Self::FixRejectedPush),
            _ => None,
        }
    }
}

/// Why a flow stopped before reaching its push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortStage {
    Initializing,
    Staging,
    BranchRename,
    RemoteAdd,
}

/// Terminal state of the full-project push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// Push exited non-zero; recovery is the fix flow.
    Rejected,
    Aborted(AbortStage),
}

/// Terminal state of the single-file push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleFileOutcome {
    Pushed { path: String },
    Rejected { path: String },
    NoFiles,
    InvalidSelection,
    Aborted(AbortStage),
}

/// Terminal state of the fix flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Synchronized,
    RemoteFailed,
    /// Pull failed; no push was attempted.
    PullFailed,
    PushFailed,
}
