//! # Repository Identity
//!
//! This module defines [`Repository`], the record for one registered PPA,
//! together with the conversions between its short handle
//! (`ppa:<owner>/<name>`), its remote URL and the line that registers it in
//! a source-list file.
//!
//! Records are rebuilt from disk on every invocation by the source-file
//! parser; nothing here is cached. The short handle is the only identity the
//! removal logic looks at: two records with the same owner and name are the
//! same logical target even if they live in different files or point at
//! different distros.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::defaults::PPA_HOST;
use crate::error::{Error, Result};

/// Prefix of every short handle.
pub const HANDLE_SCHEME: &str = "ppa";

/// One registered third-party package source.
///
/// The JSON form is what `list --format json` prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Namespace (Launchpad account) that publishes the repository.
    pub owner: String,
    /// Repository name within the owner's namespace.
    pub name: String,
    /// Distribution codename the entry targets, e.g. `noble`.
    pub distro: String,
    /// Definition file this record was parsed from.
    pub source_file: PathBuf,
    /// Lowercase hex fingerprint of the first key in `keyring_file`.
    pub key_fingerprint: String,
    /// Path from the `signed-by` clause, empty for unsigned entries.
    pub keyring_file: String,
}

impl Repository {
    /// Parses a short handle of the exact shape `ppa:<owner>/<name>`.
    ///
    /// Only `owner` and `name` are filled in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] when the handle does not split into
    /// exactly two parts on `:` and then on `/`, when the scheme is not
    /// `ppa`, or when the owner or name is empty.
    pub fn from_short_handle(handle: &str) -> Result<Self> {
        let invalid = || Error::InvalidHandle {
            handle: handle.to_string(),
        };

        let parts: Vec<&str> = handle.split(':').collect();
        let [scheme, path] = parts.as_slice() else {
            return Err(invalid());
        };
        if *scheme != HANDLE_SCHEME {
            return Err(invalid());
        }

        let parts: Vec<&str> = path.split('/').collect();
        let [owner, name] = parts.as_slice() else {
            return Err(invalid());
        };
        if owner.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            ..Self::default()
        })
    }

    /// The canonical `ppa:<owner>/<name>` handle.
    pub fn short_handle(&self) -> String {
        format!("{HANDLE_SCHEME}:{}/{}", self.owner, self.name)
    }

    /// Remote URL of the repository archive.
    pub fn url(&self) -> String {
        format!("https://{PPA_HOST}/{}/{}/ubuntu", self.owner, self.name)
    }

    /// Whether `line` mentions this repository's archive over HTTPS or HTTP.
    pub fn mentioned_in(&self, line: &str) -> bool {
        let location = format!("://{PPA_HOST}/{}/{}/ubuntu", self.owner, self.name);
        ["https", "http"]
            .iter()
            .any(|scheme| line.contains(&format!("{scheme}{location}")))
    }

    /// The `deb` line registering this repository.
    ///
    /// Entries without a keyring fall back to the unsigned form, which the
    /// installer never writes.
    pub fn source_line(&self) -> String {
        if self.keyring_file.is_empty() {
            format!("deb {} {} main", self.url(), self.distro)
        } else {
            format!(
                "deb [signed-by={}] {} {} main",
                self.keyring_file,
                self.url(),
                self.distro
            )
        }
    }

    /// Whether this record is registered under `handle`.
    pub fn matches(&self, handle: &str) -> bool {
        self.short_handle() == handle
    }
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_short_handle(s)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_handle())
    }
}

/// Base name used for both the keyring and the source-list file.
///
/// This is the last `/`-separated segment of the handle, i.e. the repository
/// name, so `ppa:alice/tools` yields `tools`.
pub fn base_file_name(handle: &str) -> &str {
    handle.rsplit('/').next().unwrap_or(handle)
}
