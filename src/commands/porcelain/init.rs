use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::errors::{StoreError, StoreResult};
use std::fs;
use tracing::info;

impl Repository {
    /// Create `.git`, `.git/objects` and `.git/refs`, and point HEAD at the
    /// default branch
    ///
    /// Existing directories are left alone, so initializing twice succeeds and
    /// leaves the same layout behind.
    pub fn init(&self) -> StoreResult<()> {
        let objects_path = self.database().objects_path();
        fs::create_dir_all(objects_path).map_err(|e| StoreError::io(objects_path, e))?;

        let refs_path = self.refs().refs_path();
        fs::create_dir_all(&refs_path).map_err(|e| StoreError::io(&*refs_path, e))?;

        self.refs().set_head(DEFAULT_BRANCH)?;

        let git_path = self.git_path();
        info!(path = %git_path.display(), "initialized repository");

        Ok(())
    }
}
