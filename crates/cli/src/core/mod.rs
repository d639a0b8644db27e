pub(crate) mod dirs;

use anyhow::Result;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;
use vapour_client::{Client, Config};

/// Options shared by every command.
#[derive(clap::Args)]
pub(crate) struct GlobalOpts {
    /// Root URL of the library backend [env: VAPOUR_API_BASE_URL]
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) verbosity: Verbosity<WarnLevel>,
}

/// Everything a command needs to talk to the backend.
pub(crate) struct Session {
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    pub(crate) client: Client,
}

impl GlobalOpts {
    pub(crate) fn session(&self) -> Result<Session> {
        let (config, config_path) = match &self.config {
            Some(path) => (Config::load_from_path(path)?, path.clone()),
            None => (Config::load()?, Config::config_path()?),
        };
        let base_url = config.resolve_base_url(self.base_url.as_deref());
        tracing::debug!(%base_url, config = %config_path.display(), "resolved backend");
        let client = Client::from_config(&config, base_url)?;
        Ok(Session {
            config,
            config_path,
            client,
        })
    }
}

/// Render an optional percentage for a table cell.
pub(crate) fn percent_cell(percent: Option<f64>) -> String {
    percent.map_or_else(|| "n/a".to_string(), |p| format!("{p:.1}%"))
}
