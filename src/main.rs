//! ghsearch - Search GitHub users and repositories from the terminal

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use ghsearch::search::{PlainText, SearchController, SearchMode};
use ghsearch::{ApiClient, App, Config, paths};
use std::ffi::OsStr;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Search GitHub users and repositories from the terminal
#[derive(Parser)]
#[command(name = "ghsearch")]
#[command(author, version, long_about = None)]
struct Cli {
    /// GitHub API base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in repository search mode
    #[arg(long)]
    repos: bool,

    /// Term to search for on startup
    term: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search users and print "login<TAB>profile URL" lines
    Users {
        /// Search term
        term: String,
    },
    /// Search repositories and print their full names
    Repos {
        /// Search term
        term: String,
    },
    /// List a user's repositories
    UserRepos {
        /// GitHub username
        login: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = load_config(cli.config.as_deref(), cli.api_url)?;
    let client = ApiClient::new(&config);
    tracing::info!(base_url = client.base_url(), "Starting ghsearch");

    match cli.command {
        Some(Commands::Users { term }) => cmd_search(client, SearchMode::User, &term),
        Some(Commands::Repos { term }) => cmd_search(client, SearchMode::Repo, &term),
        Some(Commands::UserRepos { login }) => cmd_user_repos(client, &login),
        None => {
            let mut app = App::new(config, Box::new(client));
            if cli.repos {
                app.toggle_search_mode();
            }
            if let Some(term) = cli.term {
                app.input.set(term);
                app.submit();
            }
            ghsearch::tui::run(app)
        }
    }
}

fn init_logging() {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        };

        let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = log_path
            .file_name()
            .unwrap_or_else(|| OsStr::new("ghsearch.log"));
        let file_appender = tracing_appender::rolling::never(dir, file_name);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(level.into())
                    .from_env_lossy(),
            )
            .with_ansi(false)
            .init();
    }
}

fn load_config(path: Option<&Path>, api_url: Option<String>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = api_url {
        config.api_base_url = url;
    }
    Ok(config)
}

type StdoutController = SearchController<ApiClient, PlainText<Stdout>>;

fn stdout_controller(client: ApiClient) -> StdoutController {
    SearchController::new(
        client,
        PlainText::new(io::stdout()),
        PlainText::new(io::stdout()),
    )
}

fn finish(controller: StdoutController) -> Result<()> {
    let (primary, secondary) = controller.into_targets();
    primary.finish().context("Failed to write results")?;
    secondary.finish().context("Failed to write results")?;
    Ok(())
}

fn cmd_search(client: ApiClient, mode: SearchMode, term: &str) -> Result<()> {
    let mut controller = stdout_controller(client);
    if controller.mode() != mode {
        controller.toggle_mode();
    }
    controller.submit_search(term)?;
    finish(controller)
}

fn cmd_user_repos(client: ApiClient, login: &str) -> Result<()> {
    let mut controller = stdout_controller(client);
    controller.show_user_repos(login)?;
    finish(controller)
}
