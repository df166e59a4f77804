//! Core module for map-bridge
//!
//! Shared error types and result aliases used across the bridge.

pub mod error;

// Re-export commonly used items
pub use error::{BridgeError, LaunchError, Result};
