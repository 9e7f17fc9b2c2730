//! Error types for loft-core.

use std::path::PathBuf;

use loft_dl::error::DownloadError;
use miette::Diagnostic;
use thiserror::Error;

/// Core error type for loft operations.
#[derive(Error, Diagnostic, Debug)]
pub enum LoftError {
    #[error("Repository file does not exist at {}", .path.display())]
    #[diagnostic(
        code(loft::repo_file_missing),
        help("Run `loft init` to set up the local registry first")
    )]
    RepoFileMissing { path: PathBuf },

    #[error("Failed to parse repository file {}", .path.display())]
    #[diagnostic(
        code(loft::repo_file_parse),
        help("Check the YAML structure, or move the file aside and re-run `loft init`")
    )]
    RepoFileParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Stack index formatting error in document from {url}")]
    #[diagnostic(
        code(loft::index_format),
        help("The source did not serve a valid stack index document")
    )]
    IndexFormat {
        url: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Download(#[from] DownloadError),

    #[error("YAML serialization error: {0}")]
    #[diagnostic(code(loft::yaml))]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("Error while {action}")]
    #[diagnostic(code(loft::io), help("Check file permissions and disk space"))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {action} directory `{}`", .path.display())]
    #[diagnostic(code(loft::directory))]
    Directory {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` must be a directory", .path.display())]
    #[diagnostic(code(loft::not_a_directory))]
    NotADirectory { path: PathBuf },

    #[error("`{}` must be a file, not a directory", .path.display())]
    #[diagnostic(code(loft::not_a_file))]
    NotAFile { path: PathBuf },

    #[error("Repository `{0}` already exists")]
    #[diagnostic(
        code(loft::duplicate_repository),
        help("Each repository must have a unique name")
    )]
    DuplicateRepository(String),

    #[error("Repository `{0}` is not configured")]
    #[diagnostic(
        code(loft::missing_repository),
        help("Run `loft repo list` to see configured repositories")
    )]
    MissingRepository(String),
}

/// Trait for adding context to IO errors.
pub trait ErrorContext<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, LoftError>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> std::result::Result<T, LoftError>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| LoftError::IoError {
            action: context(),
            source: err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_file_missing_display() {
        let err = LoftError::RepoFileMissing {
            path: PathBuf::from("/home/dev/.loft/repository/repository.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("repository.yaml"));
    }

    #[test]
    fn test_io_error_context() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .with_context(|| "writing repository file".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Error while writing repository file");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_duplicate_repository_display() {
        let err = LoftError::DuplicateRepository("lofthub".to_string());
        assert_eq!(err.to_string(), "Repository `lofthub` already exists");
    }
}
