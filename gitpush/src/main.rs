//! Menu-driven git push utility.
//!
//! Offers four flows against one working directory: push the whole project,
//! push one selected file, update an existing project, and recover from a
//! rejected push by pulling first.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use gitpush::io::config::{CONFIG_FILE_NAME, load_config};
use gitpush::io::console::Console;
use gitpush::io::git::SystemGit;
use gitpush::logging;
use gitpush::menu::run_menu;

#[derive(Parser)]
#[command(
    name = "gitpush",
    version,
    about = "Interactive helper for pushing a project to a remote git repository"
)]
struct Cli {
    /// Working directory to push.
    #[arg(short, long, default_value = ".")]
    workdir: PathBuf,

    /// Config file (defaults to `<workdir>/gitpush.toml`; missing means defaults).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| cli.workdir.join(CONFIG_FILE_NAME));
    let config = load_config(&config_path).context("load config")?;
    debug!(config = ?config, workdir = %cli.workdir.display(), "starting");

    let git = SystemGit::new(config.git_program.clone());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_menu(&git, &config, &mut console, &cli.workdir)?;
    io::stdout().flush().context("flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let cli = Cli::parse_from(["gitpush"]);
        assert_eq!(cli.workdir, PathBuf::from("."));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_workdir_and_config() {
        let cli = Cli::parse_from(["gitpush", "--workdir", "proj", "-c", "alt.toml"]);
        assert_eq!(cli.workdir, PathBuf::from("proj"));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }
}
