//! Filesystem module.
//!
//! Provides:
//! - Content-Disposition parsing and filename sanitization
//! - Collision-free destination paths

pub mod naming;
pub mod paths;

pub use naming::{parse_content_disposition, sanitize_filename, SvgName};
pub use paths::{ensure_dir, unique_destination};
