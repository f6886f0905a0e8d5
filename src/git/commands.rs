// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit creation from the staged index.

use crate::error::{CmtError, Result};
use git2::Oid;

use super::repo::Repository;

/// Create a commit on `HEAD` from whatever is staged.
///
/// `on_first_commit` runs once, before anything is written, when `HEAD` is
/// unborn. Every git2 handle taken here is released on return. Returns the
/// id of the new commit.
pub fn create_commit(
    repo: &Repository,
    message: &str,
    on_first_commit: impl FnOnce(),
) -> Result<Oid> {
    if !repo.has_staged_changes()? {
        return Err(CmtError::NothingToCommit);
    }

    let parent = repo.head_parent()?;
    if parent.is_none() {
        on_first_commit();
    }

    let git = repo.inner();
    let mut index = git.index()?;
    let tree_id = index.write_tree()?;
    index.write()?;
    let tree = git.find_tree(tree_id)?;
    tracing::debug!("Wrote tree {}", tree_id);

    let sig = git.signature()?;

    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    let id = git.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;
    tracing::debug!("Created commit {} with {} parent(s)", id, parents.len());

    Ok(id)
}
