//! Method-channel bridge for map requests
//!
//! Parses channel calls into a closed set of operations and maps launcher
//! outcomes onto the wire contract:
//! - `openMap` with an `address` argument → `true` on success
//! - missing address → `INVALID_ARGUMENT` / "Address not provided"
//! - failed launch → `ERROR` / "Could not open map." with platform detail
//! - any other method → not-implemented


use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::BridgeConfig;
use crate::core::error::BridgeError;
use crate::launcher::{AddressLauncher, LocationLauncher};

/// Method name for the open-map operation.
pub const METHOD_OPEN_MAP: &str = "openMap";

/// A channel call parsed into the bridge's closed method set.
///
/// Dispatch happens by pattern matching on this enum, keeping the method
/// surface exhaustive instead of scattering string comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodCall {
    OpenMap { address: Option<String> },
    Unknown { method: String },
}

impl MethodCall {
    /// Parse a raw method name and its argument map.
    ///
    /// A non-string `address` value is treated the same as an absent one.
    pub fn parse(method: &str, args: &Value) -> Self {
        match method {
            METHOD_OPEN_MAP => MethodCall::OpenMap {
                address: args
                    .get("address")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
            },
            _ => MethodCall::Unknown {
                method: method.to_string(),
            },
        }
    }
}

/// Response sent back across the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeResponse {
    Success {
        value: bool,
    },
    Error {
        code: String,
        message: String,
        detail: Option<String>,
    },
    NotImplemented,
}

impl BridgeResponse {
    fn from_error(err: &BridgeError) -> Self {
        let message = match err {
            BridgeError::InvalidArgument => "Address not provided",
            BridgeError::Launch(_) => "Could not open map.",
        };
        BridgeResponse::Error {
            code: err.code().to_string(),
            message: message.to_string(),
            detail: err.detail(),
        }
    }
}

/// Bridge handler: owns the launch branch and speaks the wire contract.
pub struct MapsBridge<L> {
    launcher: AddressLauncher<L>,
}

impl<L: LocationLauncher> MapsBridge<L> {
    pub fn new(launcher: L, config: &BridgeConfig) -> Self {
        Self {
            launcher: AddressLauncher::with_config(launcher, config),
        }
    }

    /// Handle one parsed channel call.
    pub fn handle(&self, call: MethodCall) -> BridgeResponse {
        match call {
            MethodCall::OpenMap { address } => {
                match self.launcher.open_map(address.as_deref()) {
                    Ok(()) => BridgeResponse::Success { value: true },
                    Err(err) => {
                        tracing::warn!(%err, "openMap failed");
                        BridgeResponse::from_error(&err)
                    }
                }
            }
            MethodCall::Unknown { method } => {
                tracing::debug!(method = %method, "unrecognized bridge method");
                BridgeResponse::NotImplemented
            }
        }
    }

    /// Parse and handle a raw channel call in one step.
    pub fn handle_raw(&self, method: &str, args: &Value) -> BridgeResponse {
        self.handle(MethodCall::parse(method, args))
    }
}
