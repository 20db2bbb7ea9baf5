//! # Error Suggestions
//!
//! Turns library errors into messages that also say how to fix the
//! problem. Each helper returns an `anyhow::Error` whose text ends with one
//! or more `hint:` lines.

use std::path::Path;

use crate::error::Error;
use crate::repository::HANDLE_SCHEME;

/// Error for a malformed short handle.
///
/// Suggests the `ppa:` prefix when the input already looks like
/// `<owner>/<name>`.
pub fn invalid_handle(handle: &str) -> anyhow::Error {
    let did_you_mean = missing_scheme(handle)
        .map(|fixed| format!("\nhint: Did you mean '{fixed}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "Invalid PPA name '{handle}': expected {HANDLE_SCHEME}:<owner>/<name>{did_you_mean}\n\n\
         hint: Copy the name from the PPA's Launchpad page, e.g. ppa:deadsnakes/ppa"
    )
}

/// Error for an install without `--distro` on a host with no codename.
pub fn distro_undetected(path: &Path, message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Could not detect the distro codename from {path}: {message}\n\n\
         hint: Pass the codename explicitly with --distro (e.g. --distro noble)",
        path = path.display()
    )
}

/// Error for an APT root without a `sources.list.d` directory.
pub fn apt_config_missing(root: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "No APT sources directory found under {root}\n\n\
         hint: Use --apt-config to point at your APT configuration directory\n\
         hint: Set PPA_APT_CONFIG environment variable",
        root = root.display()
    )
}

/// Error for a key server request that failed.
pub fn key_fetch_failed(url: &str, message: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Failed to download GPG key from {url}: {message}\n\n\
         hint: Check the key id on the PPA's Launchpad page ('Technical details')\n\
         hint: Use --keyserver or PPA_KEYSERVER to try another key server"
    )
}

/// Converts a library error into a user-facing error, adding hints where
/// one is known.
pub fn explain(error: Error, apt_root: &Path) -> anyhow::Error {
    match error {
        Error::InvalidHandle { handle } => invalid_handle(&handle),
        Error::DistroUndetected { path, message } => distro_undetected(&path, &message),
        Error::KeyFetch { url, message } => key_fetch_failed(&url, &message),
        Error::Scan { ref path, .. } if !path.exists() => apt_config_missing(apt_root),
        other => anyhow::Error::new(other),
    }
}

fn missing_scheme(handle: &str) -> Option<String> {
    if handle.contains(':') {
        return None;
    }
    let (owner, name) = handle.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some(format!("{HANDLE_SCHEME}:{handle}"))
}
