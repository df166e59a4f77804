//! Location-query references
//!
//! Builds the `geo:` URI handed to the OS when launching a map application.
//! The address text is percent-encoded for inclusion in the query component,
//! matching the `geo:0,0?q=<query>` form map handlers register for.

use crate::core::error::{BridgeError, Result};

/// Scheme prefix shared by every query this bridge emits.
const GEO_PREFIX: &str = "geo:0,0?q=";

/// A validated location query for a street address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoQuery {
    address: String,
}

impl GeoQuery {
    /// Build a query from an address string.
    ///
    /// Empty and whitespace-only addresses are rejected: they would produce
    /// a well-formed but meaningless query the map application cannot show.
    pub fn new(address: &str) -> Result<Self> {
        if address.trim().is_empty() {
            return Err(BridgeError::InvalidArgument);
        }
        Ok(Self {
            address: address.to_string(),
        })
    }

    /// The original, unencoded address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The address percent-encoded as a URI query component.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.address).into_owned()
    }

    /// Full location-query URI, e.g. `geo:0,0?q=1600%20Amphitheatre%20Pkwy`.
    pub fn uri(&self) -> String {
        format!("{}{}", GEO_PREFIX, self.encoded())
    }
}
