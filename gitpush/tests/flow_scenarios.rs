//! End-to-end flow scenarios driven by a scripted git runner.
//!
//! Each test runs one orchestrator flow against a temp working directory and
//! checks the exact git invocations and the operator-facing output.

use std::fs;

use gitpush::core::types::{AbortStage, FixOutcome, PushOutcome, RepoTarget, SingleFileOutcome};
use gitpush::test_support::{ScriptedGit, run_with_console};

const URL: &str = "https://example.com/r.git";

#[test]
fn empty_directory_full_push_initializes_before_staging() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new();

    let (outcome, out) = run_with_console(&git, "", |orch| orch.push_full_project(&target));

    assert_eq!(outcome, PushOutcome::Pushed);
    assert_eq!(
        git.calls(),
        vec![
            "init",
            "branch -M main",
            "add .",
            "commit -m Auto commit from gitpush",
            "branch -M main",
            "remote remove origin",
            "remote add -- origin https://example.com/r.git",
            "push -u origin main",
        ]
    );
    assert!(out.contains("Project successfully pushed."));
}

#[test]
fn missing_origin_remote_does_not_abort() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join(".git")).expect("mkdir .git");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new().respond(
        &["remote", "remove"],
        2,
        "",
        "error: No such remote: 'origin'",
    );

    let (outcome, out) = run_with_console(&git, "", |orch| orch.push_full_project(&target));

    assert_eq!(outcome, PushOutcome::Pushed);
    assert!(git.ran(&["remote", "add", "--", "origin", URL]));
    assert!(git.ran(&["push", "-u", "origin", "main"]));
    assert!(out.contains("No such remote"));
}

#[test]
fn staging_failure_short_circuits() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join(".git")).expect("mkdir .git");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new().respond(&["add"], 128, "", "fatal: index.lock exists");

    let (outcome, out) = run_with_console(&git, "", |orch| orch.push_full_project(&target));

    assert_eq!(outcome, PushOutcome::Aborted(AbortStage::Staging));
    assert_eq!(git.calls(), vec!["add ."]);
    assert!(!git.ran(&["commit"]));
    assert!(!git.ran(&["remote"]));
    assert!(!git.ran(&["push"]));
    assert!(out.contains("index.lock"));
}

#[test]
fn nothing_to_commit_still_pushes() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join(".git")).expect("mkdir .git");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new().respond(
        &["commit"],
        1,
        "On branch main\nnothing to commit, working tree clean",
        "",
    );

    let (outcome, out) = run_with_console(&git, "", |orch| orch.push_full_project(&target));

    assert_eq!(outcome, PushOutcome::Pushed);
    assert!(out.contains("nothing to commit"));
    assert!(out.contains("Note: Nothing new to commit or commit failed."));
    assert!(git.ran(&["remote", "add"]));
    assert!(git.ran(&["push", "-u"]));
}

#[test]
fn rejected_push_prints_guidance_without_recovery() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join(".git")).expect("mkdir .git");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new().respond(
        &["push"],
        1,
        "",
        "! [rejected]        main -> main (fetch first)",
    );

    let (outcome, out) = run_with_console(&git, "", |orch| orch.push_full_project(&target));

    assert_eq!(outcome, PushOutcome::Rejected);
    assert!(out.contains("Push rejected!"));
    assert!(out.contains("option 4"));
    assert!(!out.contains("successfully pushed"));
    assert!(!git.ran(&["pull"]));
    assert_eq!(git.count(&["push"]), 1);
}

#[test]
fn single_file_lists_non_hidden_files_and_stages_selection() {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path();
    fs::write(root.join("a.txt"), "a").expect("write a");
    fs::create_dir_all(root.join("b")).expect("mkdir b");
    fs::write(root.join("b/c.txt"), "c").expect("write c");
    fs::write(root.join(".env"), "TOKEN=x").expect("write env");
    fs::create_dir_all(root.join(".git")).expect("mkdir .git");
    let target = RepoTarget::new(URL, root);
    let git = ScriptedGit::new();

    let (outcome, out) = run_with_console(&git, "2\n", |orch| orch.push_single_file(&target));

    assert_eq!(
        outcome,
        SingleFileOutcome::Pushed {
            path: "b/c.txt".to_string()
        }
    );
    assert!(out.contains("1. a.txt\n2. b/c.txt\n"));
    assert!(!out.contains("3."));
    assert!(!out.contains(".env"));
    assert_eq!(
        git.calls(),
        vec!["add -- b/c.txt", "commit -m Updated c.txt", "push origin main"]
    );
}

#[test]
fn invalid_single_file_selection_runs_no_git() {
    for input in ["0\n", "3\n", "abc\n", "\n", "-1\n"] {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.txt"), "a").expect("write a");
        fs::write(temp.path().join("b.txt"), "b").expect("write b");
        let target = RepoTarget::new(URL, temp.path());
        let git = ScriptedGit::new();

        let (outcome, out) =
            run_with_console(&git, input, |orch| orch.push_single_file(&target));

        assert_eq!(outcome, SingleFileOutcome::InvalidSelection, "input {input:?}");
        assert!(out.contains("Invalid choice."));
        assert!(git.calls().is_empty(), "input {input:?} ran git");
        assert!(!temp.path().join(".git").exists());
    }
}

#[test]
fn failing_pull_prevents_push() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new().respond(
        &["pull"],
        1,
        "CONFLICT (content): Merge conflict in a.txt",
        "Automatic merge failed; fix conflicts and then commit the result.",
    );

    let (outcome, out) = run_with_console(&git, "", |orch| orch.fix_rejected_push(&target));

    assert_eq!(outcome, FixOutcome::PullFailed);
    assert!(!git.ran(&["push"]));
    assert!(out.contains("resolve them manually"));
    assert!(out.contains("CONFLICT (content)"));
}

#[test]
fn successful_pull_pushes_exactly_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = RepoTarget::new(URL, temp.path());
    let git = ScriptedGit::new().respond(&["remote", "remove"], 2, "", "error: No such remote");

    let (outcome, _) = run_with_console(&git, "", |orch| orch.fix_rejected_push(&target));

    assert_eq!(outcome, FixOutcome::Synchronized);
    assert_eq!(
        git.count(&["pull", "--no-rebase", "--allow-unrelated-histories", "origin", "main"]),
        1
    );
    assert_eq!(git.count(&["push"]), 1);
    assert!(git.ran(&["push", "origin", "main"]));
}
