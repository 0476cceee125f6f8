use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// Kind of a directory entry as it will be recorded in a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceEntryKind {
    File { executable: bool },
    Directory,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a whole file, relative to the work tree unless absolute
    ///
    /// Unreadable files are reported, never treated as empty.
    pub fn read_file(&self, file_path: &Path) -> StoreResult<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|e| StoreError::io(file_path, e))
    }

    /// List the files and directories directly inside `dir_path`, sorted by name
    ///
    /// The `.git` directory and anything that is neither a regular file nor a
    /// directory (symlinks, sockets) are skipped.
    pub fn list_dir(&self, dir_path: &Path) -> StoreResult<Vec<(PathBuf, WorkspaceEntryKind)>> {
        let dir_path = self.path.join(dir_path);
        let read_dir = std::fs::read_dir(&dir_path).map_err(|e| StoreError::io(&dir_path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| StoreError::io(&dir_path, e))?;
            let path = entry.path();

            if Self::is_ignored(&path) {
                continue;
            }

            let metadata = std::fs::symlink_metadata(&path).map_err(|e| StoreError::io(&path, e))?;
            let kind = if metadata.is_dir() {
                WorkspaceEntryKind::Directory
            } else if metadata.is_file() {
                WorkspaceEntryKind::File {
                    executable: Self::is_executable(&metadata),
                }
            } else {
                tracing::warn!(path = %path.display(), "skipping special file");
                continue;
            };

            entries.push((path, kind));
        }

        entries.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }

    fn is_ignored(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| IGNORED_PATHS.contains(&name))
    }

    #[cfg(unix)]
    fn is_executable(metadata: &std::fs::Metadata) -> bool {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    fn is_executable(_metadata: &std::fs::Metadata) -> bool {
        false
    }
}
