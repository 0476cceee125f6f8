//! Object framing
//!
//! Every object is hashed and compressed in its framed form:
//! `<type> <size>\0<content>`, where `<size>` is the decimal byte length of
//! the content. The content follows verbatim and may itself contain NUL or
//! space bytes, so unframing splits on the *first* NUL and then checks the
//! declared size against what actually remains.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use derive_new::new;

pub trait Packable {
    /// Produce the framed bytes of the object
    fn serialize(&self) -> StoreResult<Bytes>;
}

pub trait Unpackable {
    /// Rebuild the object from its unframed content
    fn deserialize(content: Bytes) -> StoreResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> StoreResult<ObjectId> {
        Ok(ObjectId::hash(&self.serialize()?))
    }
}

/// A decoded object, dispatched on its type
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
}

/// An object as it comes out of the database: its type and unframed content
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    pub object_type: ObjectType,
    pub content: Bytes,
}

impl RawObject {
    pub fn into_object(self) -> StoreResult<ObjectBox> {
        match self.object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(self.content)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(self.content)?))),
        }
    }
}

/// Prepend the `<type> <size>\0` header to `content`
pub fn frame(object_type: ObjectType, content: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), content.len());

    let mut framed = Vec::with_capacity(header.len() + content.len());
    framed.extend_from_slice(header.as_bytes());
    framed.extend_from_slice(content);

    Bytes::from(framed)
}

/// Split framed bytes back into their type and content
///
/// The declared size is authoritative: it must match the number of bytes
/// following the first NUL exactly.
pub fn unframe(framed: Bytes) -> StoreResult<RawObject> {
    let nul = framed
        .iter()
        .position(|&b| b == b'\0')
        .ok_or_else(|| StoreError::MalformedHeader("missing NUL terminator".to_string()))?;

    let header = &framed[..nul];
    let space = header
        .iter()
        .position(|&b| b == b' ')
        .ok_or_else(|| StoreError::MalformedHeader("missing space after type".to_string()))?;

    let object_type = ObjectType::try_from(&header[..space])?;
    let declared_size = parse_size(&header[space + 1..])?;

    let content = framed.slice(nul + 1..);
    if declared_size != content.len() {
        return Err(StoreError::MalformedHeader(format!(
            "declared size {declared_size} but {} bytes follow",
            content.len()
        )));
    }

    Ok(RawObject::new(object_type, content))
}

fn parse_size(size: &[u8]) -> StoreResult<usize> {
    if size.is_empty() || !size.iter().all(u8::is_ascii_digit) {
        return Err(StoreError::MalformedHeader(format!(
            "invalid size {:?}",
            String::from_utf8_lossy(size)
        )));
    }

    // all digits, so this is valid UTF-8; only overflow can fail
    std::str::from_utf8(size)
        .ok()
        .and_then(|size| size.parse::<usize>().ok())
        .ok_or_else(|| StoreError::MalformedHeader("size out of range".to_string()))
}
