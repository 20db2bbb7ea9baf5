//! # Error Handling
//!
//! This module defines the centralized error type for the `ppa-utils`
//! library. It uses `thiserror` to build an `Error` enum covering every
//! failure mode of the install, list and remove operations.
//!
//! ## Key Components
//!
//! - **`Error`**: all errors the library can return. Variants carry the path,
//!   URL or handle involved so the binary can print an actionable message.
//! - **`Result<T>`**: alias for `std::result::Result<T, Error>`.
//!
//! ## Fatal and non-fatal errors
//!
//! Most variants abort the running command. Two are handled differently:
//!
//! - `Fingerprint` is produced per record while scanning source files and is
//!   swallowed by the parser, leaving that record's fingerprint empty.
//! - `PartialRemoval` is returned only after every planned removal step has
//!   been attempted, so one failing file does not stop the others.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ppa-utils operations
#[derive(Error, Debug)]
pub enum Error {
    /// The short handle is not of the form `ppa:<owner>/<name>`.
    #[error("Invalid PPA name '{handle}': expected ppa:<owner>/<name>")]
    InvalidHandle { handle: String },

    /// The key server could not be reached or answered with a non-2xx status.
    #[error("Failed to download GPG key from {url}: {message}")]
    KeyFetch { url: String, message: String },

    /// The downloaded key was not a valid ASCII-armored OpenPGP block.
    #[error("Failed to decode GPG key: {message}")]
    KeyDecode { message: String },

    /// No distro was supplied and none could be read from the host.
    #[error("Failed to detect distro from {}: {message}", path.display())]
    DistroUndetected { path: PathBuf, message: String },

    /// The fingerprint of a keyring could not be read.
    ///
    /// Never fatal for a listing; the parser leaves the field empty.
    #[error("Failed to read fingerprint from {}: {message}", path.display())]
    Fingerprint { path: PathBuf, message: String },

    /// The directory walk over the APT configuration could not proceed.
    #[error("Failed to scan {}: {message}", path.display())]
    Scan { path: PathBuf, message: String },

    /// A source-list file matched by the scan could not be read.
    #[error("Failed to parse source file {}: {source}", path.display())]
    SourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating, writing, replacing or deleting a file failed.
    #[error("Failed to {operation} {}: {source}", path.display())]
    FileOperation {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Some steps of a removal failed; the others were still applied.
    #[error("{failed} removal step(s) failed:\n{}", details.join("\n"))]
    PartialRemoval { failed: usize, details: Vec<String> },

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for building a [`Error::FileOperation`].
    pub(crate) fn file(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Error::FileOperation {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
