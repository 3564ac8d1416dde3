//! I/O layer - file output helpers shared by the generators
//!
//! - **File system**: whole-document writes that never leave a partial file behind

pub mod file_system;

pub use file_system::{normalize_path, remove_if_exists, write_atomic};
