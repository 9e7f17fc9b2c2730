use loft_core::{
    catalog::build_catalog, index::StackIndex, repository::RepositoryFile, settings::Settings,
    LoftResult,
};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Style, Width},
};
use tracing::{debug, info};

const DESCRIPTION_WIDTH: usize = 60;

pub fn list_stacks(settings: &Settings) -> LoftResult<()> {
    debug!("building stack catalog");

    let repos = RepositoryFile::load(&settings.repo_file_path())?;
    let catalog = build_catalog(&repos)?;

    info!("{}", render_stacks(&catalog));
    Ok(())
}

/// One row per stack. The first recorded version is shown, in whatever order
/// the source published its history; no version sorting is applied.
pub fn render_stacks(index: &StackIndex) -> String {
    let mut builder = Builder::new();
    builder.push_record(["ID", "VERSION", "DESCRIPTION"]);

    for (id, versions) in &index.projects {
        let (version, description) = versions
            .first()
            .map(|v| (v.version.as_str(), v.description.as_str()))
            .unwrap_or_default();
        builder.push_record([id.as_str(), version, description]);
    }

    builder
        .build()
        .with(Style::blank())
        .modify(Columns::one(2), Width::wrap(DESCRIPTION_WIDTH))
        .to_string()
}
