//! Distribution codename detection from `os-release`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::OS_RELEASE_PATH;
use crate::error::{Error, Result};

/// Key holding the release codename.
const CODENAME_KEY: &str = "VERSION_CODENAME";

/// Source of the distribution codename used in source lines.
pub trait DistroSource {
    fn codename(&self) -> Result<String>;
}

/// Reads `VERSION_CODENAME` from an `os-release` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsRelease {
    path: PathBuf,
}

impl OsRelease {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for OsRelease {
    fn default() -> Self {
        Self::new(OS_RELEASE_PATH)
    }
}

impl DistroSource for OsRelease {
    fn codename(&self) -> Result<String> {
        let undetected = |message: String| Error::DistroUndetected {
            path: self.path.clone(),
            message,
        };

        let contents = fs::read_to_string(&self.path).map_err(|e| undetected(e.to_string()))?;
        parse_codename(&contents).ok_or_else(|| undetected(format!("no {CODENAME_KEY} entry")))
    }
}

/// Extracts the codename from `os-release` contents.
///
/// Values may be wrapped in single or double quotes. An empty value counts
/// as missing.
pub fn parse_codename(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.trim().split_once('='))
        .find(|(key, _)| key.trim() == CODENAME_KEY)
        .map(|(_, value)| unquote(value.trim()).to_string())
        .filter(|value| !value.is_empty())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
