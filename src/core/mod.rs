//! Core algorithms – directory listing, noise filtering, and tree-line
//! construction.
//!
//! Nothing in this module writes output; the renderer owns the file.

pub mod filter;
pub mod fs;
pub mod tree;
