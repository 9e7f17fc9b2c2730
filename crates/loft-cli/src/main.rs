use clap::Parser;
use cli::{Args, Commands, RepoCommand};
use list::list_stacks;
use loft_core::{bootstrap::ensure_environment, settings::Settings, LoftResult};
use loft_dl::{error::DownloadError, http_client::configure_http_client};
use logging::setup_logging;
use repo::{add_repository, list_repositories, remove_repository};
use ureq::Proxy;
use utils::COLOR;

mod cli;
mod list;
mod logging;
mod repo;
mod utils;

fn handle_cli() -> LoftResult<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        let mut color = COLOR.write().unwrap();
        *color = false;
    }

    let proxy = match args.proxy.as_deref() {
        Some(value) => Some(Proxy::new(value).map_err(|err| DownloadError::InvalidProxy {
            value: value.to_string(),
            source: Box::new(err),
        })?),
        None => None,
    };
    let user_agent = args.user_agent.clone();

    configure_http_client(move |config| {
        if let Some(proxy) = proxy {
            config.proxy = Some(proxy);
        }
        if let Some(user_agent) = user_agent {
            config.user_agent = Some(user_agent);
        }
    });

    let settings = match args.home {
        Some(ref home) => Settings::new(home),
        None => Settings::from_env(),
    };

    match args.command {
        Commands::Init { dry_run } => ensure_environment(&settings, dry_run)?,
        Commands::List => list_stacks(&settings)?,
        Commands::Repo { command } => match command {
            RepoCommand::List => list_repositories(&settings)?,
            RepoCommand::Add { name, url } => add_repository(&settings, &name, &url)?,
            RepoCommand::Remove { name } => remove_repository(&settings, &name)?,
        },
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
