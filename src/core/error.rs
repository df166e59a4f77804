//! Error types for map-bridge
//!
//! Two failure kinds exist on the bridge contract: the caller supplied no
//! usable address, or the platform could not resolve/launch any handler.
//! Neither is retried; both surface to the caller with a wire code.

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Wire code for a rejected call argument
pub const CODE_INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

/// Wire code for a failed platform launch
pub const CODE_ERROR: &str = "ERROR";

/// Main error type for bridge calls
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("address not provided")]
    InvalidArgument,

    #[error("map launch failed: {0}")]
    Launch(#[from] LaunchError),
}

impl BridgeError {
    /// Wire error code reported back across the bridge.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::InvalidArgument => CODE_INVALID_ARGUMENT,
            BridgeError::Launch(_) => CODE_ERROR,
        }
    }

    /// Diagnostic detail forwarded across the bridge, if any.
    ///
    /// Only launch failures carry detail: the underlying platform message.
    pub fn detail(&self) -> Option<String> {
        match self {
            BridgeError::InvalidArgument => None,
            BridgeError::Launch(e) => Some(e.to_string()),
        }
    }
}

/// Platform launch errors
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("no handler resolvable for {uri}")]
    NoHandler { uri: String },

    #[error("launch rejected: {reason}")]
    Rejected { reason: String },

    #[error("launcher process failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_code() {
        let err = BridgeError::InvalidArgument;
        assert_eq!(err.code(), CODE_INVALID_ARGUMENT);
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_launch_error_code_and_detail() {
        let err: BridgeError = LaunchError::Rejected {
            reason: "No Activity found to handle Intent".to_string(),
        }
        .into();
        assert_eq!(err.code(), CODE_ERROR);
        let detail = err.detail().unwrap();
        assert!(detail.contains("No Activity found to handle Intent"));
    }

    #[test]
    fn test_no_handler_carries_uri() {
        let err = LaunchError::NoHandler {
            uri: "geo:0,0?q=test".to_string(),
        };
        assert!(err.to_string().contains("geo:0,0?q=test"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "xdg-open missing");
        let err: BridgeError = LaunchError::from(io).into();
        assert_eq!(err.code(), CODE_ERROR);
        assert!(err.detail().unwrap().contains("xdg-open missing"));
    }
}
