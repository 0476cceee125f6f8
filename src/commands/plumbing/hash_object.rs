use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Hash a file as a blob and print its ID, storing it only when `write` is set
    ///
    /// An unreadable file is an error; nothing is written for it.
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<ObjectId> {
        let content = self
            .workspace()
            .read_file(object_path)
            .with_context(|| format!("Unable to read {}", object_path.display()))?;

        let object_id = if write {
            self.put_blob(&content)?
        } else {
            self.database().hash(ObjectType::Blob, &content)
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(object_id)
    }
}
