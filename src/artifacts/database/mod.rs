//! Database codecs
//!
//! This module contains the byte-level transforms applied to every object
//! before it reaches disk.

pub mod compression;
