use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE, REPOSITORY_DIR, REPOSITORY_FILE};

/// Resolved location of the loft home directory.
///
/// Constructed once at startup and passed into every component that touches
/// the filesystem; nothing in the core reads process-wide state.
#[derive(Clone, Debug)]
pub struct Settings {
    home: PathBuf,
}

impl Settings {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolves the home directory from `$LOFT_HOME`, falling back to
    /// `$HOME/.loft`, then to `.loft` in the working directory.
    pub fn from_env() -> Self {
        let home = std::env::var_os("LOFT_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| match std::env::var_os("HOME") {
                Some(home) => PathBuf::from(home).join(".loft"),
                None => PathBuf::from(".loft"),
            });
        Self { home }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.home.join(REPOSITORY_DIR)
    }

    pub fn repo_file_path(&self) -> PathBuf {
        self.repo_dir().join(REPOSITORY_FILE)
    }

    pub fn config_file_path(&self) -> PathBuf {
        self.home.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_home() {
        let settings = Settings::new("/tmp/loft-home");

        assert_eq!(settings.home(), Path::new("/tmp/loft-home"));
        assert_eq!(settings.repo_dir(), Path::new("/tmp/loft-home/repository"));
        assert_eq!(
            settings.repo_file_path(),
            Path::new("/tmp/loft-home/repository/repository.yaml")
        );
        assert_eq!(
            settings.config_file_path(),
            Path::new("/tmp/loft-home/config.yaml")
        );
    }

    #[test]
    fn loft_home_env_override_wins() {
        std::env::set_var("LOFT_HOME", "/tmp/loft-env-home");
        let settings = Settings::from_env();
        std::env::remove_var("LOFT_HOME");

        assert_eq!(settings.home(), Path::new("/tmp/loft-env-home"));
    }
}
