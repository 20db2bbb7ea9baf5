//! # Installer
//!
//! Registers a new PPA: the signing key is downloaded, dearmored and written
//! to `<root>/keyrings/<name>.gpg`, then a single signed `deb` line is
//! written to `<root>/sources.list.d/<name>.list`.
//!
//! The key server and the distro lookup are injected through [`KeySource`]
//! and [`DistroSource`] so installs can run without network access or a
//! real `/etc/os-release`.
//!
//! There is no rollback. A failure after the keyring has been written
//! leaves it in place; installing again overwrites both files.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::AptConfig;
use crate::distro::{DistroSource, OsRelease};
use crate::error::{Error, Result};
use crate::keyring::dearmor;
use crate::keyserver::{KeySource, Keyserver};
use crate::repository::{base_file_name, Repository};

/// Parameters of one install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Short handle, `ppa:<owner>/<name>`.
    pub handle: String,
    /// Key server identifier of the signing key.
    pub key_id: String,
    /// Distro codename; detected from the host when `None`.
    pub distro: Option<String>,
}

/// Files written by a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub repository: Repository,
    pub keyring_path: PathBuf,
    pub source_path: PathBuf,
}

/// Installs repositories into an APT configuration tree.
pub struct Installer {
    config: AptConfig,
    keys: Box<dyn KeySource>,
    distro: Box<dyn DistroSource>,
}

impl Installer {
    /// Creates an installer using the default key server and `/etc/os-release`.
    pub fn new(config: AptConfig) -> Self {
        Self::with_sources(
            config,
            Box::new(Keyserver::default()),
            Box::new(OsRelease::default()),
        )
    }

    /// Creates an installer with custom key and distro sources.
    pub fn with_sources(
        config: AptConfig,
        keys: Box<dyn KeySource>,
        distro: Box<dyn DistroSource>,
    ) -> Self {
        Self {
            config,
            keys,
            distro,
        }
    }

    /// Installs the repository named by `request.handle`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidHandle`] before touching the network when
    /// the handle is malformed. Key download, decoding, distro detection and
    /// file writes each abort the install with their own variant.
    pub fn install(&self, request: &InstallRequest) -> Result<Installation> {
        let mut repository = Repository::from_short_handle(&request.handle)?;
        let base_name = base_file_name(&request.handle).to_string();

        let armored = self.keys.fetch_armored(&request.key_id)?;
        let key = dearmor(&armored)?;

        let keyring_path = self.config.keyring_path(&base_name);
        write_creating_parent(&keyring_path, &key)?;
        debug!(
            "Wrote {} byte keyring to {}",
            key.len(),
            keyring_path.display()
        );

        repository.distro = match &request.distro {
            Some(distro) => distro.clone(),
            None => self.distro.codename()?,
        };
        repository.keyring_file = self
            .config
            .signed_by_path(&base_name)
            .to_string_lossy()
            .into_owned();

        let source_path = self.config.source_path(&base_name);
        write_creating_parent(
            &source_path,
            format!("{}\n", repository.source_line()).as_bytes(),
        )?;
        repository.source_file = source_path.clone();

        debug!(
            "Installed {} for {} in {}",
            repository,
            repository.distro,
            source_path.display()
        );

        Ok(Installation {
            repository,
            keyring_path,
            source_path,
        })
    }
}

fn write_creating_parent(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::file("create directory", parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::file("write", path, e))
}
