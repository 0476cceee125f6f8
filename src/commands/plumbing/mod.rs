//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute object ID and optionally store in database
//! - `cat-file`: Print the content of an object
//! - `ls-tree`: List contents of a tree object
//! - `write-tree`: Store the work tree as blobs and trees

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
