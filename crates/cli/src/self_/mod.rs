use anyhow::Result;

use crate::core::{Session, dirs};

/// Inspect the `vapour(1)` tool's configuration & local state
#[derive(clap::Subcommand)]
pub(crate) enum Opts {
    /// Print the resolved configuration and where it was read from
    Config,
}

impl Opts {
    pub(crate) fn run(&self, session: &Session) -> Result<()> {
        match self {
            Opts::Config => {
                println!("[Backend]");
                println!("Base URL: \t{}", session.client.base_url());
                println!();
                println!("[Display]");
                println!(
                    "Label cutoff: \t{} bytes",
                    session.config.label_cutoff_bytes
                );
                println!("Size display: \t{}", session.config.size_display);
                println!();
                println!("[Storage]");
                println!("Executable: \t{}", dirs::executable_dir());
                println!("Config file: \t{}", session.config_path.display());
                println!("Log directory: \t{}", dirs::log_dir()?.display());
                Ok(())
            }
        }
    }
}
