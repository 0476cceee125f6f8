//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings representing
//! SHA-1 digests of an object's framed bytes.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`.
//! Because both halves end up as path components, an ID is only ever built
//! from a validated hex string or from a raw digest.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, OBJECT_ID_RAW_LENGTH};
use crate::errors::{StoreError, StoreResult};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Compute the 160-bit SHA-1 digest of `data`.
pub fn digest(data: &[u8]) -> [u8; OBJECT_ID_RAW_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(data);

    let mut raw = [0u8; OBJECT_ID_RAW_LENGTH];
    raw.copy_from_slice(&hasher.finalize());
    raw
}

/// Git object identifier (SHA-1 hash)
///
/// Holds the raw digest together with its 40 lowercase hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    raw: [u8; OBJECT_ID_RAW_LENGTH],
    hex: String,
}

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex digits are accepted and normalized to lowercase, any
    /// other length or character yields [`StoreError::InvalidAddress`].
    pub fn try_parse(id: impl AsRef<str>) -> StoreResult<Self> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH {
            return Err(StoreError::InvalidAddress(id.to_string()));
        }

        let mut raw = [0u8; OBJECT_ID_RAW_LENGTH];
        hex::decode_to_slice(id, &mut raw)
            .map_err(|_| StoreError::InvalidAddress(id.to_string()))?;

        Ok(Self::from_raw(&raw))
    }

    /// Hash `data` and wrap the digest as an object ID
    pub fn hash(data: &[u8]) -> Self {
        Self::from_raw(&digest(data))
    }

    /// Build an object ID from its 20 raw digest bytes
    pub fn from_raw(raw: &[u8; OBJECT_ID_RAW_LENGTH]) -> Self {
        Self {
            raw: *raw,
            hex: hex::encode(raw),
        }
    }

    /// The 20 raw digest bytes, as embedded in tree entries
    pub fn to_raw(&self) -> [u8; OBJECT_ID_RAW_LENGTH] {
        self.raw
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.hex.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex)
    }
}
