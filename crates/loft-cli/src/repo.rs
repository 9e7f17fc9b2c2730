use loft_core::{
    error::LoftError,
    repository::{RepositoryEntry, RepositoryFile},
    settings::Settings,
    LoftResult,
};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Style, Width},
};
use tracing::{debug, info, warn};

const URL_WIDTH: usize = 120;

pub fn list_repositories(settings: &Settings) -> LoftResult<()> {
    let file = RepositoryFile::load(&settings.repo_file_path())?;
    info!("{}", render_repositories(&file));
    Ok(())
}

/// One row per configured source: NAME, URL.
pub fn render_repositories(file: &RepositoryFile) -> String {
    let mut builder = Builder::new();
    builder.push_record(["NAME", "URL"]);

    for entry in &file.repositories {
        builder.push_record([&entry.name, &entry.url]);
    }

    builder
        .build()
        .with(Style::blank())
        .modify(Columns::one(1), Width::wrap(URL_WIDTH))
        .to_string()
}

/// Adds a source to the repository file and persists it. A duplicate name is
/// an error; a duplicate URL under a different name is allowed but noted.
pub fn add_repository(settings: &Settings, name: &str, url: &str) -> LoftResult<()> {
    let path = settings.repo_file_path();
    let mut file = RepositoryFile::load(&path)?;

    if file.has(name) {
        return Err(LoftError::DuplicateRepository(name.to_string()));
    }
    if file.has_url(url) {
        warn!("{url} is already configured under another repository name");
    }

    file.add([RepositoryEntry {
        name: name.to_string(),
        url: url.to_string(),
    }]);
    file.write(&path)?;

    debug!("persisted repository file {}", path.display());
    info!("Added repository {name}");
    Ok(())
}

pub fn remove_repository(settings: &Settings, name: &str) -> LoftResult<()> {
    let path = settings.repo_file_path();
    let mut file = RepositoryFile::load(&path)?;

    if !file.remove(name) {
        return Err(LoftError::MissingRepository(name.to_string()));
    }
    file.write(&path)?;

    info!("Removed repository {name}");
    Ok(())
}
