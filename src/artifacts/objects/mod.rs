//! Git object types and operations
//!
//! Every stored object is identified by the SHA-1 hash of its framed bytes.
//! Two kinds are understood by this store:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (modes, names, and object IDs)
//!
//! All objects share the same framing before hashing and compression:
//! `<type> <size>\0<content>`

pub mod blob;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw binary format
pub const OBJECT_ID_RAW_LENGTH: usize = OBJECT_ID_LENGTH / 2;
