//! Configuration loading
//!
//! Loads [`ClientConfig`](flume_domain::ClientConfig) from environment
//! variables and files.

pub mod loader;

// Re-export commonly used items
pub use loader::{
    config_from_vars, load, load_from_env, load_from_file, probe_config_paths, probe_in,
};
