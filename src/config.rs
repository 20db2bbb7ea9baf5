//! APT directory layout.
//!
//! [`AptConfig`] replaces the command-wide flags of a typical CLI with an
//! explicit value passed into every operation. All on-disk paths the tool
//! reads or writes are derived here, so the install and remove sides agree
//! on where a repository's files live.

use std::path::{Path, PathBuf};

use crate::defaults::{
    default_apt_config, DEFAULT_APT_CONFIG, KEYRINGS_DIR, KEYRING_EXTENSION, SOURCES_DIR,
    SOURCE_LIST_EXTENSION,
};

/// Location of an APT configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AptConfig {
    root: PathBuf,
    signed_by_root: PathBuf,
}

impl AptConfig {
    /// Creates a configuration rooted at `root`.
    ///
    /// The `signed-by` prefix stays at `/etc/apt` so that source files
    /// written into a staging root still point at the runtime keyring path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            signed_by_root: PathBuf::from(DEFAULT_APT_CONFIG),
        }
    }

    /// Overrides the prefix written into `signed-by` clauses.
    pub fn with_signed_by_root(mut self, signed_by_root: impl Into<PathBuf>) -> Self {
        self.signed_by_root = signed_by_root.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn keyrings_dir(&self) -> PathBuf {
        self.root.join(KEYRINGS_DIR)
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root.join(SOURCES_DIR)
    }

    /// Where the installer writes the keyring for `base_name`.
    pub fn keyring_path(&self, base_name: &str) -> PathBuf {
        self.keyrings_dir()
            .join(format!("{base_name}.{KEYRING_EXTENSION}"))
    }

    /// The keyring path as referenced from a source line.
    pub fn signed_by_path(&self, base_name: &str) -> PathBuf {
        self.signed_by_root
            .join(KEYRINGS_DIR)
            .join(format!("{base_name}.{KEYRING_EXTENSION}"))
    }

    /// Where the installer writes the source list for `base_name`.
    pub fn source_path(&self, base_name: &str) -> PathBuf {
        self.sources_dir()
            .join(format!("{base_name}.{SOURCE_LIST_EXTENSION}"))
    }

    /// Maps a `signed-by` value onto this tree's keyring directory.
    ///
    /// Only the file name is kept, so `/etc/apt/keyrings/x.gpg`,
    /// `keyrings/x.gpg` and `x.gpg` all resolve to `<root>/keyrings/x.gpg`.
    /// Returns `None` when the value has no file name.
    pub fn resolve_keyring(&self, keyring_file: &str) -> Option<PathBuf> {
        Path::new(keyring_file)
            .file_name()
            .map(|name| self.keyrings_dir().join(name))
    }
}

impl Default for AptConfig {
    fn default() -> Self {
        Self::new(default_apt_config())
    }
}
