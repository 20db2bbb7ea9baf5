//! # Install Command Implementation
//!
//! Downloads the PPA's signing key from the key server, stores it in
//! `<apt-config>/keyrings/<name>.gpg` and writes
//! `<apt-config>/sources.list.d/<name>.list` with a single signed line.
//!
//! The distro codename comes from `--distro` or, when omitted, from
//! `/etc/os-release`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use ppa_utils::config::AptConfig;
use ppa_utils::defaults::{DEFAULT_APT_CONFIG, DEFAULT_KEYSERVER};
use ppa_utils::distro::OsRelease;
use ppa_utils::install::{InstallRequest, Installer};
use ppa_utils::keyserver::Keyserver;
use ppa_utils::output::{OutputConfig, Status};
use ppa_utils::suggestions;

/// Install a PPA
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// PPA to install, as ppa:<owner>/<name>
    #[arg(value_name = "PPA")]
    pub handle: String,

    /// Key server id of the PPA's signing key (see the PPA's Launchpad page)
    #[arg(long, value_name = "ID")]
    pub key_id: String,

    /// Distro codename to install for, e.g. noble.
    ///
    /// Detected from /etc/os-release when omitted.
    #[arg(long, value_name = "CODENAME")]
    pub distro: Option<String>,

    /// Root of the APT configuration.
    #[arg(long, value_name = "DIR", env = "PPA_APT_CONFIG", default_value = DEFAULT_APT_CONFIG)]
    pub apt_config: PathBuf,

    /// Key server to download the signing key from.
    #[arg(long, value_name = "URL", env = "PPA_KEYSERVER", default_value = DEFAULT_KEYSERVER)]
    pub keyserver: String,
}

/// Execute the `install` command.
pub fn execute(args: InstallArgs, out: &OutputConfig) -> Result<()> {
    let installer = Installer::with_sources(
        AptConfig::new(&args.apt_config),
        Box::new(Keyserver::new(args.keyserver)),
        Box::new(OsRelease::default()),
    );

    let request = InstallRequest {
        handle: args.handle,
        key_id: args.key_id,
        distro: args.distro,
    };

    let installation = installer
        .install(&request)
        .map_err(|e| suggestions::explain(e, &args.apt_config))?;

    println!(
        "{} Installed {} for {}",
        out.marker(Status::Installed),
        installation.repository,
        installation.repository.distro
    );
    println!("   keyring: {}", installation.keyring_path.display());
    println!("   source:  {}", installation.source_path.display());

    Ok(())
}
