//! Configuration module for board-svg-export.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ApiConfig, BoardConfig, Config, OptionsConfig};
pub use validation::validate_config;
