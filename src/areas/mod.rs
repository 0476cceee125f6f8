//! Core repository components
//!
//! - `database`: Loose object database for storing blobs and trees
//! - `refs`: The symbolic HEAD pointer
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
