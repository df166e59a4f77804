//! Recording launcher for exercising the bridge without an OS present
//!
//! Stands in for `SystemLauncher` in tests: resolvability is configured up
//! front and every launch invocation is recorded instead of dispatched.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::core::error::LaunchError;
use crate::geo::GeoQuery;

use super::{LocationLauncher, ProviderId};

/// One recorded launch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCall {
    /// The full location-query URI handed to the launcher.
    pub uri: String,
    /// Provider restriction, `None` for a generic-handler launch.
    pub provider: Option<ProviderId>,
}

/// Fake launcher that records calls instead of touching the OS.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    resolvable: HashSet<ProviderId>,
    fail_with: Option<String>,
    calls: Mutex<Vec<LaunchCall>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a provider as resolvable.
    pub fn with_resolvable(mut self, provider: ProviderId) -> Self {
        self.resolvable.insert(provider);
        self
    }

    /// Make every launch fail with the given platform diagnostic.
    pub fn with_launch_failure(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }

    /// Snapshot of all recorded launch calls, in invocation order.
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl LocationLauncher for RecordingLauncher {
    fn resolve(&self, provider: &ProviderId) -> bool {
        self.resolvable.contains(provider)
    }

    fn launch(
        &self,
        query: &GeoQuery,
        provider: Option<&ProviderId>,
    ) -> Result<(), LaunchError> {
        self.calls.lock().push(LaunchCall {
            uri: query.uri(),
            provider: provider.cloned(),
        });
        match &self.fail_with {
            Some(reason) => Err(LaunchError::Rejected {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}
