//! OpenPGP keyring helpers.
//!
//! Two operations are needed on keys: turning the ASCII-armored block served
//! by a key server into the binary form APT expects in `keyrings/`, and
//! reading the primary fingerprint back out of such a binary keyring when
//! listing repositories.
//!
//! Fingerprint lookup sits behind [`FingerprintResolver`] so the source-file
//! parser can be exercised without real keyring files.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use pgp::types::KeyTrait;
use pgp::{Deserializable, SignedPublicKey};

use crate::config::AptConfig;
use crate::error::{Error, Result};

/// Resolves the fingerprint of the first key found in a keyring file.
pub trait FingerprintResolver {
    /// Returns the lowercase hex fingerprint of the first key in `keyring`.
    fn fingerprint(&self, keyring: &Path) -> Result<String>;
}

/// Reads fingerprints from the binary keyrings of an APT tree.
///
/// An absolute `signed-by` path is opened as written. When nothing exists
/// there, the file name is looked up in the tree's keyring directory, so a
/// tree staged under another root still resolves its own keyrings.
#[derive(Debug, Clone, Copy)]
pub struct KeyringFingerprints<'a> {
    config: &'a AptConfig,
}

impl<'a> KeyringFingerprints<'a> {
    pub fn new(config: &'a AptConfig) -> Self {
        Self { config }
    }
}

impl FingerprintResolver for KeyringFingerprints<'_> {
    fn fingerprint(&self, keyring: &Path) -> Result<String> {
        if keyring.is_absolute() && keyring.is_file() {
            return read_fingerprint(keyring);
        }

        let path = self
            .config
            .resolve_keyring(&keyring.to_string_lossy())
            .ok_or_else(|| Error::Fingerprint {
                path: keyring.to_path_buf(),
                message: "keyring path has no file name".to_string(),
            })?;
        read_fingerprint(&path)
    }
}

/// Reads the primary-key fingerprint of the first key in a binary keyring.
pub fn read_fingerprint(path: &Path) -> Result<String> {
    let unavailable = |message: String| Error::Fingerprint {
        path: path.to_path_buf(),
        message,
    };

    let file = File::open(path).map_err(|e| unavailable(e.to_string()))?;

    match SignedPublicKey::from_bytes_many(BufReader::new(file)).next() {
        Some(Ok(key)) => Ok(hex::encode(key.fingerprint())),
        Some(Err(e)) => Err(unavailable(e.to_string())),
        None => Err(unavailable("keyring contains no key".to_string())),
    }
}

/// Decodes an ASCII-armored OpenPGP block into its raw binary bytes.
pub fn dearmor(armored: &[u8]) -> Result<Vec<u8>> {
    let mut dearmor = pgp::armor::Dearmor::new(Cursor::new(armored));
    let mut raw = Vec::new();
    dearmor
        .read_to_end(&mut raw)
        .map_err(|e| Error::KeyDecode {
            message: e.to_string(),
        })?;

    if raw.is_empty() {
        return Err(Error::KeyDecode {
            message: "armored block is empty".to_string(),
        });
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const ALICE_ASC: &[u8] = include_bytes!("../tests/fixtures/alice.asc");
    const ALICE_GPG: &[u8] = include_bytes!("../tests/fixtures/alice.gpg");
    const BOB_GPG: &[u8] = include_bytes!("../tests/fixtures/bob.gpg");
    const ALICE_FINGERPRINT: &str = "997027e6e81f3e8c6fd0d6cfa2b6c2ca057a6ad3";

    #[test]
    fn test_dearmor_matches_binary_export() {
        let raw = dearmor(ALICE_ASC).unwrap();
        assert_eq!(raw, ALICE_GPG);
    }

    #[test]
    fn test_dearmor_rejects_garbage() {
        let err = dearmor(b"<html>404 Not Found</html>").unwrap_err();
        assert!(matches!(err, Error::KeyDecode { .. }));
    }

    #[test]
    fn test_read_fingerprint() {
        let temp_dir = TempDir::new().unwrap();
        let keyring = temp_dir.path().join("tools.gpg");
        fs::write(&keyring, ALICE_GPG).unwrap();

        assert_eq!(read_fingerprint(&keyring).unwrap(), ALICE_FINGERPRINT);
    }

    #[test]
    fn test_keyring_fingerprints_resolve_into_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = AptConfig::new(temp_dir.path());
        fs::create_dir_all(config.keyrings_dir()).unwrap();
        fs::write(config.keyring_path("tools"), ALICE_GPG).unwrap();

        let resolver = KeyringFingerprints::new(&config);
        assert_eq!(
            resolver
                .fingerprint(Path::new("/etc/apt/keyrings/tools.gpg"))
                .unwrap(),
            ALICE_FINGERPRINT
        );
        assert!(resolver.fingerprint(Path::new("/")).is_err());
    }

    #[test]
    fn test_keyring_fingerprints_open_signed_by_path_first() {
        let temp_dir = TempDir::new().unwrap();
        let config = AptConfig::new(temp_dir.path().join("apt"));
        fs::create_dir_all(config.keyrings_dir()).unwrap();
        // Same file name in the tree's keyring directory, different key.
        fs::write(config.keyring_path("tools"), BOB_GPG).unwrap();

        let outside = temp_dir.path().join("usr-share-keyrings");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("tools.gpg"), ALICE_GPG).unwrap();

        let resolver = KeyringFingerprints::new(&config);
        assert_eq!(
            resolver.fingerprint(&outside.join("tools.gpg")).unwrap(),
            ALICE_FINGERPRINT
        );
    }

    #[test]
    fn test_read_fingerprint_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_fingerprint(&temp_dir.path().join("missing.gpg")).unwrap_err();
        assert!(matches!(err, Error::Fingerprint { .. }));
    }

    #[test]
    fn test_read_fingerprint_empty_keyring() {
        let temp_dir = TempDir::new().unwrap();
        let keyring = temp_dir.path().join("empty.gpg");
        fs::write(&keyring, b"").unwrap();

        let err = read_fingerprint(&keyring).unwrap_err();
        assert!(matches!(err, Error::Fingerprint { .. }));
    }
}
