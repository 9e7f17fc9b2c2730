//! Builds the aggregate stack catalog from all configured sources.

use loft_dl::download;
use tracing::debug;

use crate::{error::LoftError, index::StackIndex, repository::RepositoryFile, LoftResult};

/// Downloads and decodes one source's index document.
///
/// Transport failures surface as [`loft_dl::error::DownloadError`]; a
/// document that downloads but does not decode is reported as an index
/// formatting error carrying the offending URL.
pub fn fetch_index(url: &str) -> LoftResult<StackIndex> {
    debug!("downloading stack index from {url}");

    let mut buffer = Vec::new();
    download(url, &mut buffer)?;

    serde_yaml_ng::from_slice(&buffer).map_err(|source| {
        debug!(
            "contents of downloaded index from {url}:\n{}",
            String::from_utf8_lossy(&buffer)
        );
        LoftError::IndexFormat {
            url: url.to_string(),
            source,
        }
    })
}

/// Fetches every configured source in file order and merges the results into
/// one catalog.
///
/// The catalog's `apiVersion` and `generated` come from the first source;
/// later sources only contribute stacks. A stack defined by more than one
/// source keeps the version list of the last source that provides it. Any
/// fetch or decode failure aborts the whole build; there is no partial
/// catalog.
pub fn build_catalog(repos: &RepositoryFile) -> LoftResult<StackIndex> {
    let mut catalog = StackIndex::default();
    let mut seeded = false;

    for entry in &repos.repositories {
        let index = fetch_index(&entry.url)?;
        if !seeded {
            catalog.api_version = index.api_version.clone();
            catalog.generated = index.generated;
            seeded = true;
        }
        catalog.merge(index);
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use url::Url;

    use super::*;
    use crate::repository::RepositoryEntry;

    fn file_url(path: &Path) -> String {
        Url::from_file_path(path).unwrap().to_string()
    }

    fn repo_file(entries: &[(&str, &Path)]) -> RepositoryFile {
        let mut file = RepositoryFile::new();
        file.add(entries.iter().map(|(name, path)| RepositoryEntry {
            name: name.to_string(),
            url: file_url(path),
        }));
        file
    }

    #[test]
    fn fetch_index_rejects_non_index_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.yaml");
        fs::write(&path, "- just\n- a\n- list\n").unwrap();

        let err = fetch_index(&file_url(&path)).unwrap_err();
        assert!(matches!(err, LoftError::IndexFormat { .. }));
    }

    #[test]
    fn later_source_wins_for_shared_stack_names() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.yaml");
        let second = dir.path().join("second.yaml");
        fs::write(
            &first,
            "apiVersion: v1\nprojects:\n  foo:\n    - version: \"1.0\"\n",
        )
        .unwrap();
        fs::write(
            &second,
            "apiVersion: v2\nprojects:\n  foo:\n    - version: \"2.0\"\n",
        )
        .unwrap();

        let repos = repo_file(&[("a", &first), ("b", &second)]);
        let catalog = build_catalog(&repos).unwrap();

        let foo = &catalog.projects["foo"];
        assert_eq!(foo.len(), 1);
        assert_eq!(foo[0].version, "2.0");
    }

    #[test]
    fn catalog_metadata_comes_from_first_source() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.yaml");
        let second = dir.path().join("second.yaml");
        fs::write(
            &first,
            "apiVersion: v1\ngenerated: 2024-01-01T00:00:00Z\nprojects:\n  foo:\n    - version: \"1.0\"\n",
        )
        .unwrap();
        fs::write(
            &second,
            "apiVersion: v9\ngenerated: 2030-01-01T00:00:00Z\nprojects:\n  bar:\n    - version: \"0.1\"\n",
        )
        .unwrap();

        let repos = repo_file(&[("a", &first), ("b", &second)]);
        let catalog = build_catalog(&repos).unwrap();

        assert_eq!(catalog.api_version, "v1");
        assert_eq!(
            catalog.generated.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
        assert!(catalog.projects.contains_key("foo"));
        assert!(catalog.projects.contains_key("bar"));
    }

    #[test]
    fn any_failing_source_fails_the_whole_build() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        fs::write(
            &good,
            "apiVersion: v1\nprojects:\n  foo:\n    - version: \"1.0\"\n",
        )
        .unwrap();
        let absent = dir.path().join("absent.yaml");

        let repos = repo_file(&[("good", &good), ("bad", &absent)]);
        assert!(build_catalog(&repos).is_err());
    }

    #[test]
    fn empty_repository_list_yields_empty_catalog() {
        let repos = RepositoryFile::new();
        let catalog = build_catalog(&repos).unwrap();
        assert!(catalog.projects.is_empty());
        assert!(catalog.api_version.is_empty());
    }
}
