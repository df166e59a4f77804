//! OS launch seam for map applications
//!
//! This module isolates handler resolution and launch behind a small trait
//! so the bridge branch logic is testable without an OS present:
//! - `LocationLauncher`: the seam (resolve a provider, launch a query)
//! - `SystemLauncher`: real implementation over the platform's opener
//! - `RecordingLauncher`: fake implementation that records calls
//! - `AddressLauncher`: the preferred-then-generic fallback branch

mod recording;
mod system;

#[cfg(test)]
mod tests;

pub use recording::{LaunchCall, RecordingLauncher};
pub use system::SystemLauncher;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BridgeConfig;
use crate::core::error::{BridgeError, LaunchError, Result};
use crate::geo::GeoQuery;

/// Identifier of a map application the OS can resolve.
///
/// Opaque to the bridge; each `LocationLauncher` interprets it in whatever
/// form its platform names applications (package id, bundle id, desktop
/// entry).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProviderId {
    fn default() -> Self {
        Self("com.google.android.apps.maps".to_string())
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolution and launch of map-capable applications.
pub trait LocationLauncher: Send + Sync {
    /// Whether the given provider is installed and able to service a
    /// location query.
    fn resolve(&self, provider: &ProviderId) -> bool;

    /// Open a location-viewing experience for the query.
    ///
    /// `Some(provider)` restricts the launch to that application; `None`
    /// lets the OS pick any capable handler.
    fn launch(
        &self,
        query: &GeoQuery,
        provider: Option<&ProviderId>,
    ) -> std::result::Result<(), LaunchError>;
}

impl<'a, L: LocationLauncher + ?Sized> LocationLauncher for &'a L {
    fn resolve(&self, provider: &ProviderId) -> bool {
        (**self).resolve(provider)
    }

    fn launch(
        &self,
        query: &GeoQuery,
        provider: Option<&ProviderId>,
    ) -> std::result::Result<(), LaunchError> {
        (**self).launch(query, provider)
    }
}

/// Two-step launch branch over any `LocationLauncher`.
///
/// Tries the preferred provider first; if the OS cannot resolve it, falls
/// back to any installed handler for the same query. Both steps are checked
/// the same way: a failed launch on either path surfaces as an error.
pub struct AddressLauncher<L> {
    launcher: L,
    preferred: ProviderId,
    fallback_to_any: bool,
}

impl<L: LocationLauncher> AddressLauncher<L> {
    pub fn new(launcher: L, preferred: ProviderId) -> Self {
        Self {
            launcher,
            preferred,
            fallback_to_any: true,
        }
    }

    pub fn with_config(launcher: L, config: &BridgeConfig) -> Self {
        Self {
            launcher,
            preferred: config.preferred_provider.clone(),
            fallback_to_any: config.fallback_to_any,
        }
    }

    /// Open a map for the given address.
    ///
    /// An absent, empty, or whitespace-only address fails with
    /// `InvalidArgument` before any launcher call is made. Exactly one
    /// launch call happens on every other path.
    pub fn open_map(&self, address: Option<&str>) -> Result<()> {
        let address = address.ok_or(BridgeError::InvalidArgument)?;
        let query = GeoQuery::new(address)?;

        if self.launcher.resolve(&self.preferred) {
            tracing::debug!(provider = %self.preferred, "launching preferred map provider");
            self.launcher.launch(&query, Some(&self.preferred))?;
            return Ok(());
        }

        if !self.fallback_to_any {
            return Err(LaunchError::NoHandler { uri: query.uri() }.into());
        }

        tracing::debug!(
            provider = %self.preferred,
            "preferred provider unresolvable, falling back to generic handler"
        );
        self.launcher.launch(&query, None)?;
        Ok(())
    }
}
