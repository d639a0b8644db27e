//! Vapour CLI command
//!

mod archives;
mod core;
mod games;
mod libraries;
mod self_;

use std::io::IsTerminal;

use clap::{CommandFactory, Parser};

/// Inspect and archive the games in your Steam libraries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    global: core::GlobalOpts,
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    async fn run(self) -> Result<(), anyhow::Error> {
        let level = self.global.verbosity.tracing_level_filter();
        match self.command {
            Some(command) => {
                vapour::logging::init_stderr(level)?;
                let session = self.global.session()?;
                command.run(&session).await?;
            }
            None if std::io::stdin().is_terminal() => {
                let _guard = vapour::logging::init_file(&core::dirs::log_dir()?, level)?;
                let session = self.global.session()?;
                let settings = vapour::tui::Settings::from_config(
                    &session.config,
                    session.client.base_url(),
                );
                vapour::tui::run(session.client, settings).await?;
            }
            None => Cli::command().print_help()?,
        }
        Ok(())
    }
}

#[derive(clap::Subcommand)]
enum Command {
    /// List Steam libraries and their disk usage
    Libraries(libraries::Opts),
    /// List archives and how full they are
    Archives(archives::ListOpts),
    /// List the games of a library or archive, largest first
    Games(games::ListOpts),
    /// Show the details of a single game
    Game(games::ShowOpts),
    /// Move an installed game into an archive
    Archive(archives::ArchiveOpts),
    /// Inspect the `vapour(1)` tool's configuration & local state
    #[clap(name = "self")]
    #[command(subcommand)]
    Self_(self_::Opts),
}

impl Command {
    async fn run(self, session: &core::Session) -> Result<(), anyhow::Error> {
        match self {
            Command::Libraries(opts) => opts.run(session).await?,
            Command::Archives(opts) => opts.run(session).await?,
            Command::Games(opts) => opts.run(session).await?,
            Command::Game(opts) => opts.run(session).await?,
            Command::Archive(opts) => opts.run(session).await?,
            Command::Self_(opts) => opts.run(session)?,
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    Cli::parse().run().await?;
    Ok(())
}
