//! map-bridge - native half of the `openMap` channel
//!
//! This crate provides the platform-side handler that opens a street address
//! in an installed map application:
//! - Closed-enum dispatch over channel method calls
//! - geo-query URI construction with percent-encoding
//! - Preferred-provider resolution with generic-handler fallback
//! - JSON-backed configuration for the preferred provider
//! - Structured logging via tracing

pub mod bridge;
pub mod config;
pub mod core;
pub mod geo;
pub mod launcher;
pub mod logging;

// Re-export commonly used items
pub use bridge::{BridgeResponse, MapsBridge, MethodCall};
pub use config::BridgeConfig;
pub use core::error::{BridgeError, LaunchError, Result};
pub use geo::GeoQuery;
pub use launcher::{
    AddressLauncher, LocationLauncher, ProviderId, RecordingLauncher, SystemLauncher,
};
