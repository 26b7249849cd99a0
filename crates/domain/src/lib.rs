//! # Flume Domain
//!
//! Data shapes for the Flume water-metering API.
//!
//! This crate contains:
//! - OAuth token and identity claim types
//! - The generic response envelope
//! - Per-resource records and their optional query-parameter sets
//! - Client configuration and the domain error type
//!
//! ## Architecture
//! - No I/O and no async; everything here is plain data
//! - `flume-infra` performs the HTTP calls that produce and consume these
//!   types

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
