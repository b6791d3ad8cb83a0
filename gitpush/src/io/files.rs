//! Listing of files the operator can pick for a single-file push.

use std::cmp::Ordering;
use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// List non-hidden files under `root`, relative to `root`, `/`-separated.
///
/// Hidden directories (including `.git`) are not descended into. Symlinks to
/// files are listed; symlinked directories are not followed. Within each
/// directory, files come before subdirectories and names are sorted, so the
/// order is stable across runs.
pub fn list_selectable_files(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(anyhow!("not a directory: {}", root.display()));
    }

    let walker = WalkDir::new(root)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(err = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !is_listable_file(&entry) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        files.push(to_slash_path(relative));
    }

    debug!(count = files.len(), "listed selectable files");
    Ok(files)
}

fn is_listable_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
