//! Git data structures and codecs
//!
//! - `database`: Compression applied to stored objects
//! - `objects`: Object types, IDs and framing

pub mod database;
pub mod objects;
