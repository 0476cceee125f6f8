//! Command implementations
//!
//! Commands are `Repository` methods that print their results to the
//! repository's writer, organized the way git splits them:
//!
//! - `plumbing`: Low-level object commands (hash-object, cat-file, ls-tree, write-tree)
//! - `porcelain`: User-facing commands (init)

pub mod plumbing;
pub mod porcelain;
