//! Git references
//!
//! Only the symbolic `HEAD` pointer is managed here. It is written once at
//! init time and always points at the default branch:
//!
//! ```text
//! ref: refs/heads/master
//! ```

use crate::errors::{StoreError, StoreResult};
use derive_new::new;
use std::path::Path;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch HEAD points at in a fresh repository
pub const DEFAULT_BRANCH: &str = "master";

const SYMREF_PREFIX: &str = "ref: ";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Point HEAD at `refs/heads/<branch>`
    ///
    /// Rewriting the same target produces identical bytes, so this is safe to
    /// repeat.
    pub fn set_head(&self, branch: &str) -> StoreResult<()> {
        let head_path = self.head_path();
        let content = format!("{SYMREF_PREFIX}refs/heads/{branch}\n");

        std::fs::write(&head_path, content).map_err(|e| StoreError::io(&*head_path, e))
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }
}
