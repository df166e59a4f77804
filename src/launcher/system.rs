//! System launcher backed by the platform's opener
//!
//! Resolution and launch go through the OS default scheme-handler
//! machinery: `xdg-mime`/`xdg-open` on Linux and other unixes, `open` on
//! macOS, `cmd /C start` on Windows.

use std::process::Command;

use crate::core::error::LaunchError;
use crate::geo::GeoQuery;

use super::{LocationLauncher, ProviderId};

/// Launcher that asks the OS to open geo-query URIs.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl LocationLauncher for SystemLauncher {
    fn resolve(&self, provider: &ProviderId) -> bool {
        resolve_provider(provider)
    }

    fn launch(
        &self,
        query: &GeoQuery,
        provider: Option<&ProviderId>,
    ) -> Result<(), LaunchError> {
        let uri = query.uri();
        let status = match provider {
            Some(provider) => {
                tracing::debug!(%provider, %uri, "launching provider-restricted handler");
                launch_with_provider(&uri, provider)?
            }
            None => {
                tracing::debug!(%uri, "launching default handler");
                launch_default(&uri)?
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Rejected {
                reason: format!("opener exited with {status}"),
            })
        }
    }
}

/// Whether the registered geo-scheme handler belongs to the provider.
#[cfg(all(unix, not(target_os = "macos")))]
fn resolve_provider(provider: &ProviderId) -> bool {
    Command::new("xdg-mime")
        .args(["query", "default", "x-scheme-handler/geo"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).contains(provider.as_str()))
        .unwrap_or(false)
}

#[cfg(target_os = "macos")]
fn resolve_provider(provider: &ProviderId) -> bool {
    // `open -Ra` succeeds only when the named application is installed.
    Command::new("open")
        .args(["-Ra", provider.as_str()])
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(windows)]
fn resolve_provider(provider: &ProviderId) -> bool {
    // Per-provider resolution needs a registry lookup; the generic handler
    // path covers Windows.
    tracing::warn!(%provider, "provider-restricted resolution not supported on this platform");
    false
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launch_with_provider(uri: &str, provider: &ProviderId) -> std::io::Result<std::process::ExitStatus> {
    // gtk-launch takes the desktop entry name registered by the provider.
    Command::new("gtk-launch").arg(provider.as_str()).arg(uri).status()
}

#[cfg(target_os = "macos")]
fn launch_with_provider(uri: &str, provider: &ProviderId) -> std::io::Result<std::process::ExitStatus> {
    Command::new("open").args(["-b", provider.as_str(), uri]).status()
}

#[cfg(windows)]
fn launch_with_provider(uri: &str, _provider: &ProviderId) -> std::io::Result<std::process::ExitStatus> {
    // Unreachable in practice since resolve_provider returns false here.
    launch_default(uri)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launch_default(uri: &str) -> std::io::Result<std::process::ExitStatus> {
    Command::new("xdg-open").arg(uri).status()
}

#[cfg(target_os = "macos")]
fn launch_default(uri: &str) -> std::io::Result<std::process::ExitStatus> {
    Command::new("open").arg(uri).status()
}

#[cfg(windows)]
fn launch_default(uri: &str) -> std::io::Result<std::process::ExitStatus> {
    Command::new("cmd").args(["/C", "start", "", uri]).status()
}
