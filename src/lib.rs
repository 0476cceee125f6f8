//! A content-addressable object store following git's loose object layout
//!
//! Content is framed as `<type> <size>\0<content>`, addressed by the SHA-1 of
//! the framed bytes and stored zlib-compressed under
//! `.git/objects/<first 2 hex chars>/<remaining 38>`.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
