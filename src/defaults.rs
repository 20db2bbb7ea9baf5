//! Default values for ppa-utils.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;
use std::time::Duration;

/// Root of the APT configuration on a standard host.
///
/// This is both the default `--apt-config` and the prefix written into the
/// `signed-by` clause of installed source files, since that is where APT
/// looks for the keyring at runtime.
pub const DEFAULT_APT_CONFIG: &str = "/etc/apt";

/// Directory under the APT root holding binary keyrings.
pub const KEYRINGS_DIR: &str = "keyrings";

/// Directory under the APT root holding source-list definitions.
pub const SOURCES_DIR: &str = "sources.list.d";

/// Extension of keyring files written by the installer.
pub const KEYRING_EXTENSION: &str = "gpg";

/// Extension marking a file as a source-list definition.
pub const SOURCE_LIST_EXTENSION: &str = "list";

/// Host serving every Launchpad PPA.
pub const PPA_HOST: &str = "ppa.launchpadcontent.net";

/// Key server queried for signing keys.
pub const DEFAULT_KEYSERVER: &str = "https://keyserver.ubuntu.com";

/// Global timeout for a key server request.
pub const KEYSERVER_TIMEOUT: Duration = Duration::from_secs(30);

/// File describing the running distribution.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Returns the default APT configuration root.
///
/// This can be overridden by the `--apt-config` CLI flag or the
/// `PPA_APT_CONFIG` environment variable.
pub fn default_apt_config() -> PathBuf {
    PathBuf::from(DEFAULT_APT_CONFIG)
}
