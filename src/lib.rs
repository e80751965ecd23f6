//! Board SVG Export - bulk-download SVG files from a Miro board.
//!
//! This library provides functionality for finding and saving the SVG
//! resources behind board items.
//!
//! # Features
//!
//! - Paginated item listing per item type
//! - Heuristic probing of resource URL variants for SVG content
//! - Original filenames from `Content-Disposition`, with collision-free fallbacks
//! - Fixed-delay request pacing
//!
//! # Example
//!
//! ```no_run
//! use board_svg_export::{export_board, BoardApi, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.board.board_id = "uXjVN1234=".to_string();
//!     config.board.access_token = std::env::var("MIRO_TOKEN")?;
//!
//!     let api = BoardApi::new(&config.board.access_token, &config.api)?;
//!     let summary = export_board(&api, &config).await?;
//!     println!("saved {} files", summary.saved);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod resource;

// Re-exports for convenience
pub use api::{BoardApi, Item, ItemType};
pub use config::Config;
pub use download::{export_board, ItemOutcome, RunSummary};
pub use error::{Error, Result};
pub use resource::{locate, MatchedResource, ResourceFetcher};
