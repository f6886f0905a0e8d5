// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{CmtError, Result};
use git2::{Commit, ErrorCode, Repository as Git2Repo, RepositoryOpenFlags, Status, StatusOptions};
use std::ffi::OsStr;
use std::path::Path;

/// Status flags that mean "staged in the index".
pub fn staged_mask() -> Status {
    Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE
}

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open the repository rooted at the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::open(&current_dir)
    }

    /// Open the repository rooted exactly at `path`.
    ///
    /// Parent directories are not searched.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = Git2Repo::open_ext(
            path,
            RepositoryOpenFlags::NO_SEARCH,
            std::iter::empty::<&OsStr>(),
        )?;
        tracing::debug!("Opened repository at {:?}", inner.path());
        Ok(Self { inner })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Check whether any status entry is staged in the index.
    ///
    /// Working-tree-only changes do not count.
    pub fn has_staged_changes(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false).include_ignored(false);

        let statuses = self.inner.statuses(Some(&mut opts))?;
        let mask = staged_mask();
        let staged = statuses.iter().any(|entry| entry.status().intersects(mask));

        tracing::debug!(
            "{} status entries, staged changes: {}",
            statuses.len(),
            staged
        );
        Ok(staged)
    }

    /// Resolve `HEAD` to its commit.
    ///
    /// Returns `None` on an unborn branch, where the next commit is the root.
    pub fn head_parent(&self) -> Result<Option<Commit<'_>>> {
        match self.inner.revparse_ext("HEAD") {
            Ok((object, _reference)) => Ok(Some(object.peel_to_commit()?)),
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) => {
                tracing::debug!("HEAD does not resolve: {}", e.message());
                Ok(None)
            }
            Err(e) => Err(CmtError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use std::fs;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        (dir, repo)
    }

    fn stage(repo: &Git2Repo, name: &str, contents: &str) {
        let workdir = repo.workdir().unwrap();
        fs::write(workdir.join(name), contents).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    fn commit_index(repo: &Git2Repo) -> git2::Oid {
        let sig = repo.signature().unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_open_repo() {
        let (dir, _repo) = init_repo();
        assert!(Repository::open(dir.path()).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CmtError::Repository(RepositoryError { code: -3, .. }))
        ));
    }

    #[test]
    fn test_open_does_not_search_parents() {
        let (dir, _repo) = init_repo();
        let nested = dir.path().join("sub");
        fs::create_dir(&nested).unwrap();
        assert!(Repository::open(&nested).is_err());
    }

    #[test]
    fn test_no_staged_changes_in_fresh_repo() {
        let (dir, _repo) = init_repo();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_untracked_files_are_not_staged() {
        let (dir, _repo) = init_repo();
        fs::write(dir.path().join("loose.txt"), "hello").unwrap();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_staged_new_file() {
        let (dir, raw) = init_repo();
        stage(&raw, "a.txt", "hello");
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_staged_modification() {
        let (dir, raw) = init_repo();
        stage(&raw, "a.txt", "hello");
        commit_index(&raw);

        stage(&raw, "a.txt", "changed");
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_staged_deletion() {
        let (dir, raw) = init_repo();
        stage(&raw, "a.txt", "hello");
        commit_index(&raw);

        let mut index = raw.index().unwrap();
        index.remove_path(Path::new("a.txt")).unwrap();
        index.write().unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_clean_after_commit() {
        let (dir, raw) = init_repo();
        stage(&raw, "a.txt", "hello");
        commit_index(&raw);

        let repo = Repository::open(dir.path()).unwrap();
        assert!(!repo.has_staged_changes().unwrap());
    }

    #[test]
    fn test_head_parent_unborn() {
        let (dir, _repo) = init_repo();
        let repo = Repository::open(dir.path()).unwrap();
        assert!(repo.head_parent().unwrap().is_none());
    }

    #[test]
    fn test_head_parent_existing() {
        let (dir, raw) = init_repo();
        stage(&raw, "a.txt", "hello");
        let oid = commit_index(&raw);

        let repo = Repository::open(dir.path()).unwrap();
        let parent = repo.head_parent().unwrap().unwrap();
        assert_eq!(parent.id(), oid);
    }
}
