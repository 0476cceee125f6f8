//! Git tree object
//!
//! Trees represent directory listings. They hold an ordered sequence of
//! entries naming blobs (files) and other trees (subdirectories).
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! There is no entry count or separator: the payload is consumed entry by
//! entry until it is exhausted.

use crate::artifacts::objects::OBJECT_ID_RAW_LENGTH;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;

/// Mode git writes for subdirectory entries
pub const DIRECTORY_MODE: &str = "40000";

/// Mode git writes for regular, non-executable files
pub const REGULAR_FILE_MODE: &str = "100644";

/// A single `(mode, name, oid)` line of a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: Bytes,
    name: Bytes,
    oid: ObjectId,
}

impl TreeEntry {
    /// Build an entry that can be encoded back into a tree payload
    ///
    /// The mode must be non-empty and free of spaces and NULs, the name
    /// non-empty and free of NULs.
    pub fn try_new(
        mode: impl Into<Bytes>,
        name: impl Into<Bytes>,
        oid: ObjectId,
    ) -> StoreResult<Self> {
        let mode = mode.into();
        let name = name.into();

        if mode.is_empty() || mode.iter().any(|&b| b == b' ' || b == b'\0') {
            return Err(StoreError::InvalidTreeEntry(format!(
                "mode {:?} must be a non-empty token",
                String::from_utf8_lossy(&mode)
            )));
        }
        if name.is_empty() || name.contains(&b'\0') {
            return Err(StoreError::InvalidTreeEntry(format!(
                "name {:?} must be non-empty and contain no NUL",
                String::from_utf8_lossy(&name)
            )));
        }

        Ok(TreeEntry { mode, name, oid })
    }

    pub fn mode(&self) -> &[u8] {
        &self.mode
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Name as text, with invalid UTF-8 replaced
    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }

    pub fn is_tree(&self) -> bool {
        &self.mode[..] == DIRECTORY_MODE.as_bytes()
    }

    pub fn object_type(&self) -> ObjectType {
        if self.is_tree() {
            ObjectType::Tree
        } else {
            ObjectType::Blob
        }
    }

    fn write_to(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.mode);
        buffer.push(b' ');
        buffer.extend_from_slice(&self.name);
        buffer.push(b'\0');
        buffer.extend_from_slice(&self.oid.to_raw());
    }
}

/// Git tree object
///
/// Entries keep the order they were decoded or built in; sorting is left to
/// whoever displays them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Entry names sorted byte-wise, independent of locale and input order
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names = self.entries.iter().map(|e| e.name()).collect::<Vec<_>>();
        names.sort_unstable();

        names
            .into_iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect()
    }

    /// Encode the entries into an (unframed) tree payload
    pub fn payload(&self) -> Bytes {
        let mut payload = Vec::new();
        for entry in &self.entries {
            entry.write_to(&mut payload);
        }

        Bytes::from(payload)
    }
}

/// Parse a tree payload into its entries, in payload order
pub fn decode_tree(payload: &[u8]) -> StoreResult<Vec<TreeEntry>> {
    let mut reader = EntryReader::new(payload);
    let mut entries = Vec::new();

    while !reader.is_exhausted() {
        let mode = reader.read_until(b' ', "missing space after mode")?;
        let name = reader.read_until(b'\0', "missing NUL after name")?;
        let oid = reader.read_oid()?;

        entries.push(TreeEntry {
            mode: Bytes::copy_from_slice(mode),
            name: Bytes::copy_from_slice(name),
            oid,
        });
    }

    Ok(entries)
}

/// Bounds-checked cursor over an immutable tree payload
struct EntryReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> EntryReader<'a> {
    fn new(buffer: &'a [u8]) -> Self {
        EntryReader { buffer, offset: 0 }
    }

    fn is_exhausted(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Read up to `delimiter`, consuming but not returning it
    fn read_until(&mut self, delimiter: u8, reason: &'static str) -> StoreResult<&'a [u8]> {
        let rest = &self.buffer[self.offset..];
        let end = rest
            .iter()
            .position(|&b| b == delimiter)
            .ok_or(StoreError::TruncatedTree {
                offset: self.offset,
                reason,
            })?;

        self.offset += end + 1;
        Ok(&rest[..end])
    }

    fn read_oid(&mut self) -> StoreResult<ObjectId> {
        let rest = &self.buffer[self.offset..];
        let raw: &[u8; OBJECT_ID_RAW_LENGTH] = rest
            .get(..OBJECT_ID_RAW_LENGTH)
            .and_then(|raw| raw.try_into().ok())
            .ok_or(StoreError::TruncatedTree {
                offset: self.offset,
                reason: "fewer than 20 bytes left for object id",
            })?;

        self.offset += OBJECT_ID_RAW_LENGTH;
        Ok(ObjectId::from_raw(raw))
    }
}

impl Packable for Tree {
    fn serialize(&self) -> StoreResult<Bytes> {
        Ok(frame(self.object_type(), &self.payload()))
    }
}

impl Unpackable for Tree {
    fn deserialize(content: Bytes) -> StoreResult<Self> {
        Ok(Tree::new(decode_tree(&content)?))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:0>6} {} {}\t{}",
                    String::from_utf8_lossy(entry.mode()),
                    entry.object_type(),
                    entry.oid(),
                    entry.name_lossy()
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn oid_of(byte: u8) -> ObjectId {
        ObjectId::from_raw(&[byte; OBJECT_ID_RAW_LENGTH])
    }

    fn two_entry_payload() -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend_from_slice(b"100644 file.txt\0");
        payload.extend_from_slice(&[0x11; 20]);
        payload.extend_from_slice(b"40000 subdir\0");
        payload.extend_from_slice(&[0x22; 20]);
        payload
    }

    #[test]
    fn test_decode_two_entries_in_order() {
        let entries = decode_tree(&two_entry_payload()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].mode(), b"100644");
        assert_eq!(entries[0].name(), b"file.txt");
        assert_eq!(entries[0].oid(), &oid_of(0x11));
        assert_eq!(entries[1].mode(), b"40000");
        assert_eq!(entries[1].name(), b"subdir");
        assert_eq!(entries[1].oid(), &oid_of(0x22));
        assert!(entries[1].is_tree());
    }

    #[test]
    fn test_decode_empty_payload() {
        assert!(decode_tree(b"").unwrap().is_empty());
    }

    #[test]
    fn test_decode_oid_with_nul_and_space_bytes() {
        let mut raw = [0u8; 20];
        raw[3] = b' ';
        raw[7] = b'\0';

        let mut payload = b"100644 a\0".to_vec();
        payload.extend_from_slice(&raw);
        payload.extend_from_slice(b"100755 b\0");
        payload.extend_from_slice(&raw);

        let entries = decode_tree(&payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].oid().to_raw(), raw);
        assert_eq!(entries[1].name(), b"b");
    }

    #[test]
    fn test_decode_short_oid_fails() {
        let mut payload = b"100644 file.txt\0".to_vec();
        payload.extend_from_slice(&[0x11; 19]);

        let result = decode_tree(&payload);
        assert!(matches!(
            result,
            Err(StoreError::TruncatedTree { offset: 16, .. })
        ));
    }

    #[test]
    fn test_decode_missing_space_fails() {
        let result = decode_tree(b"100644");
        assert!(matches!(result, Err(StoreError::TruncatedTree { offset: 0, .. })));
    }

    #[test]
    fn test_decode_missing_nul_fails() {
        let result = decode_tree(b"100644 file.txt");
        assert!(matches!(result, Err(StoreError::TruncatedTree { offset: 7, .. })));
    }

    #[test]
    fn test_sorted_names_ignore_input_order() {
        let tree = Tree::new(vec![
            TreeEntry::try_new(DIRECTORY_MODE, "subdir", oid_of(2)).unwrap(),
            TreeEntry::try_new(REGULAR_FILE_MODE, "file.txt", oid_of(1)).unwrap(),
            TreeEntry::try_new(REGULAR_FILE_MODE, "Zebra", oid_of(3)).unwrap(),
        ]);

        assert_eq!(tree.sorted_names(), vec!["Zebra", "file.txt", "subdir"]);
    }

    #[test]
    fn test_payload_decodes_to_same_entries() {
        let entries = decode_tree(&two_entry_payload()).unwrap();
        let tree = Tree::new(entries);

        assert_eq!(&tree.payload()[..], &two_entry_payload()[..]);
    }

    #[test]
    fn test_empty_tree_object_id_matches_git() {
        assert_eq!(
            Tree::default().object_id().unwrap().as_ref(),
            "4b825dc642cb6eb9a060e54bf8d69288fbee4904"
        );
    }

    #[test]
    fn test_entry_rejects_framing_bytes() {
        assert!(TreeEntry::try_new("100 644", "a", oid_of(1)).is_err());
        assert!(TreeEntry::try_new("", "a", oid_of(1)).is_err());
        assert!(TreeEntry::try_new(REGULAR_FILE_MODE, "a\0b", oid_of(1)).is_err());
        assert!(TreeEntry::try_new(REGULAR_FILE_MODE, "", oid_of(1)).is_err());
    }

    #[test]
    fn test_display_lists_entries() {
        let tree = Tree::new(decode_tree(&two_entry_payload()).unwrap());
        let expected = format!(
            "100644 blob {}\tfile.txt\n040000 tree {}\tsubdir",
            oid_of(0x11),
            oid_of(0x22)
        );

        assert_eq!(tree.display(), expected);
    }
}
