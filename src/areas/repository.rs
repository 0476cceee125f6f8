use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::RawObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{Tree, TreeEntry, decode_tree};
use crate::errors::{StoreError, StoreResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the directory holding the object store inside a work tree
pub const GIT_DIR: &str = ".git";

/// Entry point for all store operations
///
/// The storage root is always explicit: `<path>/.git`, derived from the work
/// tree path handed to [`Repository::new`].
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> StoreResult<Self> {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|e| StoreError::io(path, e))?;

        let git_path = path.join(GIT_DIR);
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(GIT_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Store raw file content as a blob
    pub fn put_blob(&self, content: &[u8]) -> StoreResult<ObjectId> {
        self.database.put(ObjectType::Blob, content)
    }

    /// Encode `entries` in the given order and store them as a tree
    pub fn put_tree(&self, entries: Vec<TreeEntry>) -> StoreResult<ObjectId> {
        self.database.store(&Tree::new(entries))
    }

    /// Load any object by its hex address
    ///
    /// The address is validated before any path is derived from it.
    pub fn get_object(&self, address: &str) -> StoreResult<RawObject> {
        let object_id = ObjectId::try_parse(address)?;
        self.database.load(&object_id)
    }

    /// Names of the entries of the tree at `address`, sorted byte-wise
    pub fn list_tree_names(&self, address: &str) -> StoreResult<Vec<String>> {
        Ok(Tree::new(self.tree_entries(address)?).sorted_names())
    }

    /// Entries of the tree at `address`, in stored order
    pub fn tree_entries(&self, address: &str) -> StoreResult<Vec<TreeEntry>> {
        let raw = self.get_object(address)?;

        match raw.object_type {
            ObjectType::Tree => decode_tree(&raw.content),
            ObjectType::Blob => Err(StoreError::NotATree(raw.object_type, address.to_string())),
        }
    }
}
