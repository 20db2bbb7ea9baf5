//! # PPA Utilities Library
//!
//! This library installs, lists and removes Launchpad PPAs in an APT
//! configuration tree. It backs the `ppa` command-line tool but every
//! operation takes an explicit [`config::AptConfig`], so it can equally be
//! pointed at a staging directory or a container root.
//!
//! ## Quick Example
//!
//! ```
//! use ppa_utils::repository::Repository;
//!
//! let repo = Repository::from_short_handle("ppa:alice/tools").unwrap();
//! assert_eq!(repo.url(), "https://ppa.launchpadcontent.net/alice/tools/ubuntu");
//! assert_eq!(repo.short_handle(), "ppa:alice/tools");
//! ```
//!
//! ## Core Concepts
//!
//! - **Repository (`repository`)**: one registered PPA, identified by its
//!   short handle `ppa:<owner>/<name>`.
//! - **Source files (`sources`)**: `.list` files under `sources.list.d`,
//!   scanned on every invocation to rebuild the set of repositories.
//! - **Keyrings (`keyring`, `keyserver`)**: the binary signing key a source
//!   line points at through its `signed-by` clause.
//! - **Removal planning (`plan`)**: counts how many repositories use each
//!   source file and keyring, and decides what can be deleted, what must be
//!   edited, and what must be kept because another repository needs it.
//! - **File mutation (`filesystem`)**: applies a plan, honouring dry-run.
//!
//! ## Execution Flow
//!
//! - **Install** (`install`): fetch key, dearmor, write keyring, resolve the
//!   distro, write the source file.
//! - **List** (`registry::list`): scan source files into records.
//! - **Remove** (`registry::remove`): scan, plan, apply.

pub mod config;
pub mod defaults;
pub mod distro;
pub mod error;
pub mod filesystem;
pub mod install;
pub mod keyring;
pub mod keyserver;
pub mod output;
pub mod plan;
pub mod registry;
pub mod repository;
pub mod sources;
pub mod suggestions;

#[cfg(test)]
mod repository_proptest;
