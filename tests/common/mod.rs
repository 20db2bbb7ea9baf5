//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file and `use common::prelude::*;`, then
//! build an APT tree with [`AptFixture`]:
//!
//! ```rust,ignore
//! let fixture = AptFixture::new()
//!     .with_keyring("tools", keys::ALICE_GPG)
//!     .with_source("tools", lines::TOOLS);
//!
//! fixture.command().arg("list").assert().success();
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};
use std::env;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::keys;
    #[allow(unused_imports)]
    pub use super::lines;
    #[allow(unused_imports)]
    pub use super::mock_key_lookup;
    #[allow(unused_imports)]
    pub use super::should_skip_network_tests;
    pub use super::AptFixture;
}

/// Source-list lines used across tests.
#[allow(dead_code)]
pub mod lines {
    /// `ppa:alice/tools`, signed by `tools.gpg`.
    pub const TOOLS: &str = "deb [signed-by=/etc/apt/keyrings/tools.gpg] https://ppa.launchpadcontent.net/alice/tools/ubuntu noble main";

    /// `ppa:bob/editor`, signed by its own `editor.gpg`.
    pub const EDITOR: &str = "deb [signed-by=/etc/apt/keyrings/editor.gpg] https://ppa.launchpadcontent.net/bob/editor/ubuntu jammy main";

    /// `ppa:bob/editor`, signed by alice's `tools.gpg`.
    pub const EDITOR_SHARING_TOOLS_KEY: &str = "deb [signed-by=/etc/apt/keyrings/tools.gpg] https://ppa.launchpadcontent.net/bob/editor/ubuntu jammy main";

    /// A non-PPA archive line, ignored by the scanner.
    pub const ARCHIVE: &str = "deb http://archive.ubuntu.com/ubuntu noble main universe";
}

/// OpenPGP key fixtures exported with gpg.
#[allow(dead_code)]
pub mod keys {
    pub const ALICE_ASC: &[u8] = include_bytes!("../fixtures/alice.asc");
    pub const ALICE_GPG: &[u8] = include_bytes!("../fixtures/alice.gpg");
    pub const BOB_GPG: &[u8] = include_bytes!("../fixtures/bob.gpg");

    pub const ALICE_FINGERPRINT: &str = "997027e6e81f3e8c6fd0d6cfa2b6c2ca057a6ad3";
    pub const BOB_FINGERPRINT: &str = "a1fe7dc49c04377fd66cbc08fd0f9eb57cbecd4d";
}

/// Check if network tests should be skipped.
///
/// Returns `true` if the `SKIP_NETWORK_TESTS` environment variable is set.
#[allow(dead_code)]
pub fn should_skip_network_tests() -> bool {
    env::var("SKIP_NETWORK_TESTS").is_ok()
}

/// Registers a key server `lookup` response for `key_id` on `server`.
///
/// `key_id` is matched in its normalized form, `0x` plus lowercase hex.
#[allow(dead_code)]
pub fn mock_key_lookup(
    server: &mut ServerGuard,
    key_id: &str,
    status: usize,
    body: &[u8],
) -> Mock {
    server
        .mock("GET", "/pks/lookup")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("op".into(), "get".into()),
            Matcher::UrlEncoded("search".into(), key_id.into()),
        ]))
        .with_status(status)
        .with_body(body)
        .create()
}

/// A temporary APT configuration tree with `keyrings/` and
/// `sources.list.d/` already created.
pub struct AptFixture {
    temp_dir: assert_fs::TempDir,
}

impl AptFixture {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("keyrings")
            .create_dir_all()
            .expect("Failed to create keyrings dir");
        temp_dir
            .child("sources.list.d")
            .create_dir_all()
            .expect("Failed to create sources dir");
        Self { temp_dir }
    }

    /// Writes `sources.list.d/<name>.list` with each line newline-terminated.
    pub fn with_source(self, name: &str, content: &str) -> Self {
        self.source(name)
            .write_str(&terminate_lines(content))
            .expect("Failed to write source file");
        self
    }

    /// Writes `keyrings/<name>.gpg`.
    #[allow(dead_code)]
    pub fn with_keyring(self, name: &str, key: &[u8]) -> Self {
        self.keyring(name)
            .write_binary(key)
            .expect("Failed to write keyring");
        self
    }

    /// Writes an arbitrary file relative to the tree root.
    #[allow(dead_code)]
    pub fn child_file(&self, path: &str, content: &str) -> &Self {
        self.temp_dir
            .child(path)
            .write_str(&terminate_lines(content))
            .expect("Failed to write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(format!("sources.list.d/{name}.list"))
    }

    #[allow(dead_code)]
    pub fn keyring(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(format!("keyrings/{name}.gpg"))
    }

    /// A `ppa` command pointed at this tree through `PPA_APT_CONFIG`, with
    /// colours off and `RUST_LOG` cleared.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("ppa");
        cmd.env("PPA_APT_CONFIG", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for AptFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn terminate_lines(content: &str) -> String {
    if content.is_empty() || content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    }
}
