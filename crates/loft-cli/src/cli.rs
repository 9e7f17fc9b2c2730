use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output logs as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the loft home directory
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub home: Option<String>,

    /// Set proxy
    #[arg(required = false, long, short = 'P', global = true)]
    pub proxy: Option<String>,

    /// Set user agent
    #[arg(required = false, long, short = 'A', global = true)]
    pub user_agent: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepare the loft home directory and seed the default repository
    #[clap(name = "init")]
    Init {
        /// Log what would be done without touching the filesystem
        #[arg(required = false, long)]
        dry_run: bool,
    },

    /// List all stacks available across configured repositories
    #[clap(name = "list", visible_alias = "ls")]
    List,

    /// Manage stack repositories
    #[clap(name = "repo")]
    Repo {
        #[clap(subcommand)]
        command: RepoCommand,
    },
}

#[derive(Subcommand)]
pub enum RepoCommand {
    /// List configured repositories
    #[clap(name = "list", visible_alias = "ls")]
    List,

    /// Add a repository
    #[command(arg_required_else_help = true)]
    #[clap(name = "add")]
    Add {
        /// Name for the new repository
        name: String,

        /// URL of the repository's index document
        #[arg(value_hint = ValueHint::Url)]
        url: String,
    },

    /// Remove a repository by name
    #[command(arg_required_else_help = true)]
    #[clap(name = "remove", visible_alias = "rm")]
    Remove {
        /// Name of the repository to remove
        name: String,
    },
}
