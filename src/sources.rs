//! # Source-File Parser
//!
//! Rebuilds [`Repository`] records by scanning source-list files.
//!
//! Every file with a `.list` extension under the scanned directory is read
//! line by line. A line registers a PPA when it has the shape
//!
//! ```text
//! deb [signed-by=<keyring>] https://ppa.launchpadcontent.net/<owner>/<name>/ubuntu <distro> main
//! ```
//!
//! where the `signed-by` clause is optional and trailing whitespace is
//! allowed. Anything else (comments, blank lines, other archives) is skipped
//! without error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use walkdir::WalkDir;

use crate::defaults::SOURCE_LIST_EXTENSION;
use crate::error::{Error, Result};
use crate::keyring::FingerprintResolver;
use crate::repository::Repository;

static SOURCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^deb (?:\[signed-by=(?P<keyring>[^\]]*)\] )?https?://ppa\.launchpadcontent\.net/(?P<owner>[^/]+)/(?P<name>[^/]+)/ubuntu (?P<distro>[^ ]+) main\s*$",
    )
    .expect("source line pattern is valid")
});

/// Parses one line of a source-list file.
///
/// The returned record has no fingerprint; see [`parse_source_file`].
pub fn parse_line(line: &str, source_file: &Path) -> Option<Repository> {
    let captures = SOURCE_LINE.captures(line)?;

    Some(Repository {
        owner: captures["owner"].to_string(),
        name: captures["name"].to_string(),
        distro: captures["distro"].to_string(),
        source_file: source_file.to_path_buf(),
        key_fingerprint: String::new(),
        keyring_file: captures
            .name("keyring")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    })
}

/// Parses every PPA line of a single source-list file, in line order.
///
/// # Errors
///
/// Returns [`Error::SourceFile`] if the file cannot be opened or read. An
/// unreadable keyring is not an error: the record's fingerprint stays empty.
pub fn parse_source_file(
    path: &Path,
    resolver: &dyn FingerprintResolver,
) -> Result<Vec<Repository>> {
    let read_error = |source| Error::SourceFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut repos = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_error)?;
        let Some(mut repo) = parse_line(&line, path) else {
            continue;
        };

        if !repo.keyring_file.is_empty() {
            match resolver.fingerprint(Path::new(&repo.keyring_file)) {
                Ok(fingerprint) => repo.key_fingerprint = fingerprint,
                Err(e) => debug!("{}: {}", repo.short_handle(), e),
            }
        }

        repos.push(repo);
    }

    Ok(repos)
}

/// Recursively scans `dir` and parses every source-list file found.
///
/// Files are visited in file-name order so output is stable between runs.
///
/// # Errors
///
/// Returns [`Error::Scan`] if the directory walk fails (for example when
/// `dir` does not exist) and [`Error::SourceFile`] if a candidate file
/// cannot be read. Either aborts the whole scan.
pub fn scan(dir: &Path, resolver: &dyn FingerprintResolver) -> Result<Vec<Repository>> {
    let mut repos = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Scan {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() || !is_source_list(entry.path()) {
            continue;
        }

        debug!("Parsing source file {}", entry.path().display());
        repos.extend(parse_source_file(entry.path(), resolver)?);
    }

    Ok(repos)
}

fn is_source_list(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == SOURCE_LIST_EXTENSION)
}
