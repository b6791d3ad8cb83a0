//! Optional settings stored in `gitpush.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gitpush.toml";

/// Push settings (TOML).
///
/// Missing fields fall back to the defaults the menu flows were written for.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PushConfig {
    /// Executable used for every git step.
    pub git_program: String,

    /// Remote that the flows remove and re-add.
    pub remote_name: String,

    /// Primary branch: renamed to, pushed and pulled.
    pub branch: String,

    /// Commit message for full-project pushes.
    pub commit_message: String,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
            remote_name: "origin".to_string(),
            branch: "main".to_string(),
            commit_message: "Auto commit from gitpush".to_string(),
        }
    }
}

impl PushConfig {
    pub fn validate(&self) -> Result<()> {
        if self.git_program.trim().is_empty() {
            return Err(anyhow!("git_program must be non-empty"));
        }
        if self.commit_message.trim().is_empty() {
            return Err(anyhow!("commit_message must be non-empty"));
        }
        validate_ref_like("remote_name", &self.remote_name)?;
        validate_ref_like("branch", &self.branch)?;
        Ok(())
    }
}

fn validate_ref_like(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(anyhow!("{field} must be non-empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(anyhow!("{field} must not contain whitespace: '{value}'"));
    }
    Ok(())
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PushConfig::default()`.
pub fn load_config(path: &Path) -> Result<PushConfig> {
    if !path.exists() {
        let cfg = PushConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PushConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
