//! First-run preparation of the loft home directory.

use std::fs;

use tracing::{debug, info};

use crate::{
    constants::{DEFAULT_HUB_NAME, DEFAULT_HUB_URL},
    error::{ErrorContext, LoftError},
    fs::ensure_dir_exists,
    repository::{RepositoryEntry, RepositoryFile},
    settings::Settings,
    LoftResult,
};

/// Ensures the home layout exists: the home and repository directories, a
/// repository file seeded with the default hub, and an empty application
/// config for the configuration layer to fill in later.
///
/// With `dry_run` set, every mutating step is skipped and logged instead.
/// Safe to run repeatedly; existing files are left alone.
pub fn ensure_environment(settings: &Settings, dry_run: bool) -> LoftResult<()> {
    for dir in [settings.home().to_path_buf(), settings.repo_dir()] {
        if !dir.exists() {
            if dry_run {
                info!("dry run: skipping creation of directory {}", dir.display());
            } else {
                debug!("creating {}", dir.display());
                ensure_dir_exists(&dir)?;
            }
        } else if !dir.is_dir() {
            return Err(LoftError::NotADirectory { path: dir });
        }
    }

    let repo_file_path = settings.repo_file_path();
    if !repo_file_path.exists() {
        if dry_run {
            info!(
                "dry run: skipping creation of {DEFAULT_HUB_NAME} repository entry for {DEFAULT_HUB_URL}"
            );
        } else {
            let mut repo_file = RepositoryFile::new();
            repo_file.add([RepositoryEntry {
                name: DEFAULT_HUB_NAME.to_string(),
                url: DEFAULT_HUB_URL.to_string(),
            }]);
            debug!("creating {}", repo_file_path.display());
            repo_file.write(&repo_file_path)?;
        }
    } else if repo_file_path.is_dir() {
        return Err(LoftError::NotAFile {
            path: repo_file_path,
        });
    }

    let config_file = settings.config_file_path();
    if !config_file.exists() {
        if dry_run {
            info!(
                "dry run: skipping creation of default config file {}",
                config_file.display()
            );
        } else {
            debug!("creating {}", config_file.display());
            fs::write(&config_file, b"")
                .with_context(|| format!("creating default config file {}", config_file.display()))?;
        }
    }

    Ok(())
}
