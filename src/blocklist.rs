//! Blocklist management module
//!
//! Handles loading and querying the common-password blocklist.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::fallback::FALLBACK_PASSWORDS;

static BLOCKLIST: RwLock<Option<Blocklist>> = RwLock::new(None);

/// Where the cached blocklist entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Entries were read from the external list file.
    External,
    /// The external file was unreadable; the built-in fallback list is in use.
    Fallback,
}

/// Summary of the cached blocklist, returned by the initializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub source: ListSource,
    pub entries: usize,
}

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blocklist file: {0}")]
    ReadError(#[from] std::io::Error),
}

struct Blocklist {
    entries: HashSet<String>,
    source: ListSource,
}

/// Returns the blocklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLOCKLIST_PATH`
/// 2. Default path `./assets/blocklist.txt`
pub fn blocklist_path() -> PathBuf {
    std::env::var("PWD_BLOCKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blocklist.txt"))
}

/// Parses list-file content: one entry per line, `#` comments and blank
/// lines skipped, everything else ASCII-lowercased. Duplicates collapse.
fn parse_entries(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_ascii_lowercase())
        .collect()
}

fn read_external(path: &Path) -> Result<HashSet<String>, BlocklistError> {
    if !path.exists() {
        return Err(BlocklistError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Two-tier construction: try the external file, substitute the built-in
/// fallback list on any read failure. A file that exists but yields zero
/// entries produces an empty blocklist, not the fallback.
fn build(path: &Path) -> Blocklist {
    match read_external(path) {
        Ok(entries) => {
            #[cfg(feature = "tracing")]
            tracing::info!("Blocklist loaded: {} entries from {:?}", entries.len(), path);
            Blocklist {
                entries,
                source: ListSource::External,
            }
        }
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Blocklist file unavailable ({}), using built-in fallback list",
                _err
            );
            Blocklist {
                entries: FALLBACK_PASSWORDS.iter().map(|p| (*p).to_string()).collect(),
                source: ListSource::Fallback,
            }
        }
    }
}

/// Idempotence check and load both run under the write lock, so the
/// load-and-parse step happens at most once per process and no caller
/// ever observes a partially built set.
fn ensure_loaded(path: &Path) -> LoadReport {
    let mut guard = BLOCKLIST.write().unwrap();
    let list = guard.get_or_insert_with(|| build(path));
    LoadReport {
        source: list.source,
        entries: list.entries.len(),
    }
}

/// Initializes the password blocklist from the external file.
///
/// Idempotent: the first call loads and caches the list for the process
/// lifetime; later calls report the cached list without touching the
/// filesystem. If the file is missing or unreadable, the built-in fallback
/// list is cached instead and no error is raised.
///
/// # Environment Variable
///
/// Set `PWD_BLOCKLIST_PATH` to specify a custom list file location.
/// If not set, defaults to `./assets/blocklist.txt`.
pub fn init_blocklist() -> LoadReport {
    init_blocklist_from_path(blocklist_path())
}

/// Initializes the password blocklist from a specific file path.
///
/// Use this when the caller resolves the path itself instead of relying
/// on environment variables. Same idempotence and fallback behavior as
/// [`init_blocklist`].
pub fn init_blocklist_from_path<P: AsRef<Path>>(path: P) -> LoadReport {
    ensure_loaded(path.as_ref())
}

/// Checks if a password is on the blocklist.
///
/// Comparison is case-insensitive (ASCII folding). The first call triggers
/// the one-time load if no explicit initialization happened; after that the
/// check is an in-memory set lookup with no I/O. Never raises an error: a
/// read failure during the lazy load is absorbed by the fallback list.
pub fn is_blocked(password: &str) -> bool {
    let needle = password.to_ascii_lowercase();
    {
        let guard = BLOCKLIST.read().unwrap();
        if let Some(list) = guard.as_ref() {
            return list.entries.contains(&needle);
        }
    }
    ensure_loaded(&blocklist_path());
    let guard = BLOCKLIST.read().unwrap();
    guard
        .as_ref()
        .is_some_and(|list| list.entries.contains(&needle))
}

/// Returns where the cached entries came from.
///
/// Returns `None` if the blocklist has not been loaded yet.
pub fn blocklist_source() -> Option<ListSource> {
    let guard = BLOCKLIST.read().unwrap();
    guard.as_ref().map(|list| list.source)
}

/// Returns the number of cached entries.
///
/// Returns `None` if the blocklist has not been loaded yet.
pub fn blocklist_len() -> Option<usize> {
    let guard = BLOCKLIST.read().unwrap();
    guard.as_ref().map(|list| list.entries.len())
}

/// Resets the blocklist for testing purposes.
#[cfg(test)]
pub fn reset_blocklist_for_testing() {
    let mut guard = BLOCKLIST.write().unwrap();
    *guard = None;
}
