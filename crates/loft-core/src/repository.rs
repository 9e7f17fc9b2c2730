use std::{fs, io, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    constants::API_VERSION_V1,
    error::{ErrorContext, LoftError},
    LoftResult,
};

/// A named source providing a stack index document.
///
/// `name` is the identity key for lookups; uniqueness is enforced by the
/// command layer on add, not by the store itself.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub url: String,
}

/// The persisted list of configured repository sources.
///
/// This is the only entity loft writes to disk. It is loaded whole on every
/// repo operation, mutated in memory, and rewritten whole; there is no
/// incremental update and no locking.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryFile {
    pub api_version: String,
    pub generated: DateTime<Utc>,
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,
}

impl RepositoryFile {
    /// A fresh repository file with the current schema version, the current
    /// timestamp, and no entries. Used only when bootstrapping.
    pub fn new() -> Self {
        Self {
            api_version: API_VERSION_V1.to_string(),
            generated: Utc::now(),
            repositories: Vec::new(),
        }
    }

    /// Reads and decodes the repository file at `path`.
    pub fn load(path: &Path) -> LoftResult<Self> {
        let raw = match fs::read(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LoftError::RepoFileMissing {
                    path: path.to_path_buf(),
                })
            }
            Err(err) => {
                return Err(LoftError::IoError {
                    action: format!("reading repository file {}", path.display()),
                    source: err,
                })
            }
        };

        serde_yaml_ng::from_slice(&raw).map_err(|source| LoftError::RepoFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Appends entries in order. No deduplication is performed here.
    pub fn add(&mut self, entries: impl IntoIterator<Item = RepositoryEntry>) {
        self.repositories.extend(entries);
    }

    pub fn has(&self, name: &str) -> bool {
        self.repositories.iter().any(|entry| entry.name == name)
    }

    pub fn has_url(&self, url: &str) -> bool {
        self.repositories.iter().any(|entry| entry.url == url)
    }

    /// Removes the first entry named `name`, preserving the relative order of
    /// every other entry. Returns whether an entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.repositories.iter().position(|entry| entry.name == name) {
            Some(index) => {
                self.repositories.remove(index);
                true
            }
            None => false,
        }
    }

    /// Encodes the whole structure and overwrites `path` in a single write.
    pub fn write(&self, path: &Path) -> LoftResult<()> {
        let data = serde_yaml_ng::to_string(self)?;
        fs::write(path, data)
            .with_context(|| format!("writing repository file {}", path.display()))
    }
}

impl Default for RepositoryFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: &str) -> RepositoryEntry {
        RepositoryEntry {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn new_file_is_empty_and_versioned() {
        let file = RepositoryFile::new();
        assert_eq!(file.api_version, API_VERSION_V1);
        assert!(file.repositories.is_empty());
    }

    #[test]
    fn encode_decode_round_trip() {
        let mut file = RepositoryFile::new();
        file.add([
            entry("lofthub", "https://example.com/index.yaml"),
            entry("internal", "https://internal.example.com/index.yaml"),
        ]);

        let encoded = serde_yaml_ng::to_string(&file).unwrap();
        let decoded: RepositoryFile = serde_yaml_ng::from_str(&encoded).unwrap();

        assert_eq!(decoded, file);
    }

    #[test]
    fn has_is_true_right_after_add() {
        let mut file = RepositoryFile::new();
        file.add([entry("first", "u0"), entry("second", "u1")]);

        file.add([entry("fresh", "u2")]);
        assert!(file.has("fresh"));
        assert!(!file.has("absent"));
    }

    #[test]
    fn has_url_matches_exactly() {
        let mut file = RepositoryFile::new();
        file.add([entry("a", "u1")]);
        file.add([entry("b", "u2")]);

        assert!(file.has_url("u2"));
        assert!(!file.has_url("u3"));
    }

    #[test]
    fn remove_only_entry_leaves_empty_store() {
        let mut file = RepositoryFile::new();
        file.add([entry("solo", "u")]);

        assert!(file.remove("solo"));
        assert!(file.repositories.is_empty());
    }

    #[test]
    fn remove_absent_name_changes_nothing() {
        let mut file = RepositoryFile::new();
        file.add([entry("a", "u1"), entry("b", "u2")]);
        let before = file.repositories.clone();

        assert!(!file.remove("missing"));
        assert_eq!(file.repositories, before);
    }

    #[test]
    fn remove_preserves_order_of_remaining_entries() {
        let mut file = RepositoryFile::new();
        file.add([entry("a", "u1"), entry("b", "u2"), entry("c", "u3")]);

        assert!(file.remove("b"));
        let names: Vec<_> = file
            .repositories
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut file = RepositoryFile::new();
        file.add([entry("dup", "u1"), entry("dup", "u2")]);

        assert!(file.remove("dup"));
        assert_eq!(file.repositories, vec![entry("dup", "u2")]);
    }

    #[test]
    fn load_missing_file_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repository.yaml");

        let err = RepositoryFile::load(&path).unwrap_err();
        assert!(matches!(err, LoftError::RepoFileMissing { .. }));
    }

    #[test]
    fn load_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repository.yaml");
        fs::write(&path, "repositories: [not, a, mapping").unwrap();

        let err = RepositoryFile::load(&path).unwrap_err();
        assert!(matches!(err, LoftError::RepoFileParse { .. }));
    }

    #[test]
    fn write_then_load_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repository.yaml");

        let mut file = RepositoryFile::new();
        file.add([entry("lofthub", "https://example.com/index.yaml")]);
        file.write(&path).unwrap();

        let loaded = RepositoryFile::load(&path).unwrap();
        assert_eq!(loaded, file);
    }
}
