//! Key server client.
//!
//! Signing keys are fetched from an HKP key server's `lookup` endpoint,
//! which answers with an ASCII-armored public key block.

use std::time::Duration;

use log::debug;
use ureq::Agent;
use url::Url;

use crate::defaults::{DEFAULT_KEYSERVER, KEYSERVER_TIMEOUT};
use crate::error::{Error, Result};

/// Source of ASCII-armored signing keys.
pub trait KeySource {
    /// Returns the armored key block for `key_id`.
    fn fetch_armored(&self, key_id: &str) -> Result<Vec<u8>>;
}

/// Normalizes a key identifier: drops a leading `0x` and lowercases it.
pub fn normalize_key_id(key_id: &str) -> String {
    let trimmed = key_id.trim();
    let bare = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    bare.to_lowercase()
}

/// Builds the lookup URL for `key_id` on `keyserver`.
///
/// ```
/// use ppa_utils::keyserver::key_url;
///
/// let url = key_url("https://keyserver.ubuntu.com", "ABCD1234").unwrap();
/// assert_eq!(
///     url,
///     "https://keyserver.ubuntu.com/pks/lookup?op=get&search=0xabcd1234"
/// );
/// ```
pub fn key_url(keyserver: &str, key_id: &str) -> Result<String> {
    let base = format!("{}/pks/lookup", keyserver.trim_end_matches('/'));
    let search = format!("0x{}", normalize_key_id(key_id));

    let url = Url::parse_with_params(&base, [("op", "get"), ("search", search.as_str())])
        .map_err(|e| Error::KeyFetch {
            url: base.clone(),
            message: e.to_string(),
        })?;

    Ok(url.to_string())
}

/// HTTP key server client.
#[derive(Debug, Clone)]
pub struct Keyserver {
    base_url: String,
    agent: Agent,
}

impl Keyserver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, KEYSERVER_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .user_agent(concat!("ppa-utils/", env!("CARGO_PKG_VERSION")))
            .build()
            .into();

        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Keyserver {
    fn default() -> Self {
        Self::new(DEFAULT_KEYSERVER)
    }
}

impl KeySource for Keyserver {
    fn fetch_armored(&self, key_id: &str) -> Result<Vec<u8>> {
        let url = key_url(&self.base_url, key_id)?;
        debug!("Fetching key {} from {}", key_id, url);

        let fetch_error = |message: String| Error::KeyFetch {
            url: url.clone(),
            message,
        };

        let mut resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| fetch_error(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", resp.status().as_u16())));
        }

        resp.body_mut()
            .read_to_vec()
            .map_err(|e| fetch_error(e.to_string()))
    }
}
