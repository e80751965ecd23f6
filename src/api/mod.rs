//! Board API module.
//!
//! This module provides:
//! - HTTP client for the board items REST API
//! - Request pacing policies
//! - API response types

pub mod client;
pub mod pacing;
pub mod types;

pub use client::BoardApi;
pub use pacing::{pacer_for, FixedDelay, NoDelay, Pacer};
pub use types::*;
