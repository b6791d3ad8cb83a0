//! Test-only helpers: a scripted git runner and a captured console.

use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use crate::core::types::StepResult;
use crate::io::config::PushConfig;
use crate::io::console::Console;
use crate::io::git::GitRunner;
use crate::orchestrator::Orchestrator;

/// Console reading scripted input and capturing output.
pub type CapturedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Git runner that records invocations and replays scripted results.
///
/// Results are matched by argument prefix; the first matching rule wins.
/// Unmatched invocations succeed with empty output.
#[derive(Debug, Default)]
pub struct ScriptedGit {
    rules: Vec<(Vec<String>, StepResult)>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete invocations starting with `prefix` with the given exit code and output.
    pub fn respond(mut self, prefix: &[&str], exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.rules.push((
            to_owned_args(prefix),
            StepResult::Completed {
                exit_code: Some(exit_code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        ));
        self
    }

    /// Fail to launch invocations starting with `prefix`.
    pub fn launch_failure(mut self, prefix: &[&str], error: &str) -> Self {
        self.rules.push((
            to_owned_args(prefix),
            StepResult::LaunchFailed {
                program: "git".to_string(),
                error: error.to_string(),
            },
        ));
        self
    }

    /// Recorded invocations, each rendered as space-joined arguments.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|args| args.join(" "))
            .collect()
    }

    /// Number of invocations starting with `prefix`.
    pub fn count(&self, prefix: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|args| has_prefix(args, prefix))
            .count()
    }

    /// True if any invocation started with `prefix`.
    pub fn ran(&self, prefix: &[&str]) -> bool {
        self.count(prefix) > 0
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, _workdir: &Path, args: &[&str]) -> StepResult {
        self.calls.borrow_mut().push(to_owned_args(args));
        self.rules
            .iter()
            .find(|(prefix, _)| {
                args.len() >= prefix.len()
                    && prefix.iter().zip(args).all(|(want, arg)| want.as_str() == *arg)
            })
            .map(|(_, result)| result.clone())
            .unwrap_or_else(StepResult::success)
    }
}

fn to_owned_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

fn has_prefix(args: &[String], prefix: &[&str]) -> bool {
    args.len() >= prefix.len() && args.iter().zip(prefix).all(|(arg, want)| arg.as_str() == *want)
}

/// Console fed with `input`, capturing everything written.
pub fn captured_console(input: &str) -> CapturedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Drive one flow against `git` with default config and scripted operator input.
///
/// Returns the flow result and everything printed to the console.
pub fn run_with_console<G, T>(
    git: &G,
    input: &str,
    flow: impl FnOnce(&mut Orchestrator<'_, G, Cursor<Vec<u8>>, Vec<u8>>) -> Result<T>,
) -> (T, String)
where
    G: GitRunner + 'static,
{
    let config = PushConfig::default();
    let mut console = captured_console(input);
    let value = {
        let mut orchestrator = Orchestrator::new(git, &config, &mut console);
        flow(&mut orchestrator).expect("flow")
    };
    let output = String::from_utf8(console.into_output()).expect("utf8 console output");
    (value, output)
}
