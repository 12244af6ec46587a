use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::models::ResolvedLocation;

/// Persistent query-string -> resolved-location cache, stored as one flat
/// JSON file.
///
/// The cache is an optimization, never a correctness requirement: lookups
/// fail soft to a miss, stores fail soft to a logged warning, and there is
/// no locking or TTL. Concurrent writers can lose updates; a lost entry is
/// simply re-resolved on the next miss.
#[derive(Debug, Clone)]
pub struct LocationCache {
    path: PathBuf,
}

impl LocationCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Returns the cached location for `query`, or `None` if the cache file
    /// is missing, unreadable, or not valid JSON.
    pub fn lookup(&self, query: &str) -> Option<ResolvedLocation> {
        self.read_entries().remove(query)
    }

    /// Inserts or overwrites the entry for `query` and writes the whole map
    /// back. I/O failures are logged and swallowed; the caller keeps the
    /// in-memory value either way.
    pub fn store(&self, query: &str, location: &ResolvedLocation) {
        if let Err(e) = self.try_store(query, location) {
            tracing::warn!("Failed to cache location key for '{}': {}", query, e);
        }
    }

    fn try_store(&self, query: &str, location: &ResolvedLocation) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut entries = self.read_entries();
        entries.insert(query.to_string(), location.clone());

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }

    fn read_entries(&self) -> HashMap<String, ResolvedLocation> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }
}
