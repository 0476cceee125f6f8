use crate::areas::repository::Repository;
use crate::areas::workspace::WorkspaceEntryKind;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{DIRECTORY_MODE, REGULAR_FILE_MODE, TreeEntry};
use crate::errors::StoreResult;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;
use tracing::debug;

const EXECUTABLE_FILE_MODE: &str = "100755";

impl Repository {
    /// Snapshot the whole work tree into blobs and trees and print the root tree ID
    pub fn write_tree(&self) -> anyhow::Result<ObjectId> {
        let entries = self.snapshot_dir(Path::new(""))?;
        let tree_id = self.put_tree(entries)?;

        writeln!(self.writer(), "{}", tree_id)?;

        Ok(tree_id)
    }

    /// Store every file below `dir_path` and the subtrees that list them,
    /// returning the entries of `dir_path` itself
    ///
    /// Entries are ordered the way git orders them: by name, with directory
    /// names compared as if they ended in `/`. Directories without any file
    /// below them are left out, as git cannot record them either.
    fn snapshot_dir(&self, dir_path: &Path) -> StoreResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        for (path, kind) in self.workspace().list_dir(dir_path)? {
            let Some(file_name) = path.file_name() else {
                continue;
            };
            let name = Bytes::copy_from_slice(file_name.as_encoded_bytes());

            let entry = match kind {
                WorkspaceEntryKind::Directory => {
                    let children = self.snapshot_dir(&dir_path.join(file_name))?;
                    if children.is_empty() {
                        continue;
                    }

                    let oid = self.put_tree(children)?;
                    debug!(path = %path.display(), oid = %oid, "stored tree");
                    TreeEntry::try_new(DIRECTORY_MODE, name, oid)?
                }
                WorkspaceEntryKind::File { executable } => {
                    let content = self.workspace().read_file(&path)?;
                    let oid = self.put_blob(&content)?;
                    let mode = if executable {
                        EXECUTABLE_FILE_MODE
                    } else {
                        REGULAR_FILE_MODE
                    };
                    TreeEntry::try_new(mode, name, oid)?
                }
            };

            entries.push(entry);
        }

        entries.sort_by_key(sort_key);
        Ok(entries)
    }
}

fn sort_key(entry: &TreeEntry) -> Vec<u8> {
    let mut key = entry.name().to_vec();
    if entry.is_tree() {
        key.push(b'/');
    }
    key
}
