use crate::artifacts::database::compression;
use crate::artifacts::objects::object::{Object, RawObject, frame, unframe};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use fake::rand;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Loose object database rooted at `.git/objects`
///
/// Objects are write-once: a path that already exists holds the same bytes
/// any new write would produce, so writes to it are skipped.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Compute the object ID of `content` framed as `object_type`, without writing
    pub fn hash(&self, object_type: ObjectType, content: &[u8]) -> ObjectId {
        ObjectId::hash(&frame(object_type, content))
    }

    /// Frame, hash, compress and persist `content`, returning its object ID
    pub fn put(&self, object_type: ObjectType, content: &[u8]) -> StoreResult<ObjectId> {
        let framed = frame(object_type, content);
        self.write_framed(framed)
    }

    /// Persist an already built object
    pub fn store(&self, object: &impl Object) -> StoreResult<ObjectId> {
        self.write_framed(object.serialize()?)
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Read, inflate and unframe the object stored under `object_id`
    pub fn load(&self, object_id: &ObjectId) -> StoreResult<RawObject> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_id, &object_path)?;

        unframe(object_content)
    }

    fn write_framed(&self, framed: Bytes) -> StoreResult<ObjectId> {
        let object_id = ObjectId::hash(&framed);
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            debug!(oid = %object_id, "object already stored, skipping write");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| StoreError::io(&object_path, ErrorKind::InvalidInput.into()))?;
        std::fs::create_dir_all(object_dir).map_err(|e| StoreError::io(object_dir, e))?;

        self.write_object(&object_path, &compression::compress(&framed)?)?;
        debug!(oid = %object_id, size = framed.len(), "stored object");

        Ok(object_id)
    }

    fn read_object(&self, object_id: &ObjectId, object_path: &Path) -> StoreResult<Bytes> {
        let object_content = std::fs::read(object_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::ObjectNotFound(object_id.to_string()),
            _ => StoreError::io(object_path, e),
        })?;
        debug!(oid = %object_id, compressed_size = object_content.len(), "read object");

        compression::decompress(&object_content)
    }

    /// Write through a temporary file and rename it into place, so a crash
    /// never leaves a truncated object behind
    fn write_object(&self, object_path: &Path, object_content: &[u8]) -> StoreResult<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| StoreError::io(object_path, ErrorKind::InvalidInput.into()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        Self::write_through_temp(&temp_object_path, object_path, object_content)
    }

    fn write_through_temp(
        temp_object_path: &Path,
        object_path: &Path,
        object_content: &[u8],
    ) -> StoreResult<()> {
        // a name collision must not touch the other writer's temp file
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_object_path)
            .map_err(|e| StoreError::io(temp_object_path, e))?;

        let write_result = file.write_all(object_content).and_then(|_| file.sync_all());
        drop(file);

        if let Err(e) = write_result.and_then(|_| std::fs::rename(temp_object_path, object_path)) {
            let _ = std::fs::remove_file(temp_object_path);
            return Err(StoreError::io(object_path, e));
        }

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
