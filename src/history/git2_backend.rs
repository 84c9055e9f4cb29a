use anyhow::{Context, Result, anyhow};
use git2::{Repository, Sort};
use std::path::Path;

use super::{History, HistoryEntry, HistoryError};

/// Derive an `owner/repo` name from a remote URL.
///
/// Handles both `https://host/owner/repo(.git)` and `git@host:owner/repo(.git)`.
fn repo_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let mut parts = trimmed
        .rsplit(['/', ':'])
        .filter(|s| !s.is_empty());
    let repo = parts.next()?;
    let owner = parts.next()?;
    Some(format!("{}/{}", owner, repo))
}

/// Name the repository after its `origin` remote, falling back to the
/// work-tree directory name.
fn repo_name(repo: &Repository) -> Option<String> {
    if let Ok(remote) = repo.find_remote("origin")
        && let Some(name) = remote.url().and_then(repo_name_from_url)
    {
        return Some(name);
    }
    let dir = repo.workdir().unwrap_or_else(|| repo.path());
    dir.file_name()
        .map(|s| s.to_string_lossy().into_owned())
}

/// Walk commits reachable from HEAD, newest first, like `git log`.
///
/// # Errors
/// - No repository can be discovered at or above `path`.
/// - The repository has no commits yet.
/// - A commit cannot be read.
pub fn read_history(path: &Path) -> Result<History> {
    let repo = Repository::discover(path)
        .with_context(|| format!("not a git repository: {}", path.display()))?;

    if repo.is_empty()? {
        return Err(HistoryError::EmptyRepository {
            path: path.display().to_string(),
        }
        .into());
    }

    let mut walk = repo.revwalk()?;
    walk.set_sorting(Sort::TIME)?;
    walk.push_head().context("git log HEAD")?;

    let mut entries = Vec::new();
    for oid in walk {
        let commit = repo.find_commit(oid?)?;
        let short = commit.as_object().short_id()?;
        let short_hash = short
            .as_str()
            .ok_or_else(|| anyhow!("invalid short id for {}", commit.id()))?
            .to_string();
        let author = commit.author();
        let email = String::from_utf8_lossy(author.email_bytes()).into_owned();
        entries.push(HistoryEntry::new(short_hash, email));
    }

    Ok(History {
        name: repo_name(&repo),
        entries,
    })
}
