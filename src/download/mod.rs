//! Download module for board exports.
//!
//! This module provides:
//! - Run state tracking
//! - The board export loop
//! - The per-item locate/name/download pipeline
//! - Resource file writing

pub mod board;
pub mod item;
pub mod save;
pub mod state;

pub use board::export_board;
pub use item::{process_item, resolve_name, resolve_original_name};
pub use save::save_resource;
pub use state::{ItemOutcome, RunSummary, TypeScan};
