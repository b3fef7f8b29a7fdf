//! Configuration utilities.

/// Environment-based server configuration.
pub mod config;
