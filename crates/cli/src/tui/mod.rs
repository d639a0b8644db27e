//! The terminal dashboard.
//!
//! The draw loop runs on a blocking thread and never waits on the network.
//! Requests go to a manager task over a channel; results come back over a
//! second channel and are written into the state of the view that asked.

mod app;
pub mod components;
mod fetch;
mod style;
pub mod views;

pub use fetch::Fetch;
pub use style::ChartStyle;

use app::App;
use tokio::sync::mpsc;
use vapour_client::{
    ArchiveRecord, Client, Collection, Config, GameRecord, LibraryRecord, RecordKind, SizeDisplay,
};

/// Display settings of the dashboard.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Backend the dashboard talks to, shown in the title.
    pub base_url: String,
    /// Games smaller than this many bytes get no chart label.
    pub label_cutoff: f64,
    /// How game sizes are shown in tables.
    pub size_display: SizeDisplay,
    /// Chart colours.
    pub style: ChartStyle,
}

impl Settings {
    /// Settings taken from the configuration file.
    #[must_use]
    pub fn from_config(config: &Config, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            label_cutoff: config.label_cutoff_bytes,
            size_display: config.size_display,
            style: ChartStyle::default(),
        }
    }
}

/// Events sent from the TUI to the manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Request to quit the application
    Quit,
    /// Request the list of libraries
    RequestLibraries,
    /// Request the list of archives
    RequestArchives,
    /// Request the games of a library or archive
    RequestGames(Collection),
    /// Request a single game
    RequestGame(RecordKind, u64),
    /// Move a game into an archive
    Archive {
        /// The archive to move into.
        archive_id: u64,
        /// The game to move.
        app_id: u64,
    },
}

/// Events sent from the manager to the TUI
#[derive(Debug)]
pub enum ManagerEvent {
    /// List of libraries
    Libraries(Fetch<Vec<LibraryRecord>>),
    /// List of archives
    Archives(Fetch<Vec<ArchiveRecord>>),
    /// Games of a library or archive
    Games(Collection, Fetch<Vec<GameRecord>>),
    /// A single game
    Game(RecordKind, u64, Fetch<GameRecord>),
    /// Result of an archive request
    Archived {
        /// The game that was to be moved.
        app_id: u64,
        /// Whether the backend accepted it.
        result: Fetch<()>,
    },
}

/// Run the dashboard until the user quits.
pub async fn run(client: Client, settings: Settings) -> anyhow::Result<()> {
    // Create channels for bidirectional communication
    let (app_sender, app_receiver) = mpsc::channel::<AppEvent>(32);
    let (manager_sender, manager_receiver) = mpsc::channel::<ManagerEvent>(32);

    tracing::info!(base_url = %settings.base_url, "starting dashboard");

    // Run the TUI in a blocking task (separate thread) since it has a synchronous event loop
    let tui_handle = tokio::task::spawn_blocking(move || {
        let terminal = ratatui::init();
        let res = App::new(app_sender, manager_receiver, settings).run(terminal);
        ratatui::restore();
        res
    });

    run_manager(client, app_receiver, manager_sender).await;

    // Wait for TUI to finish
    tui_handle.await??;

    Ok(())
}

async fn run_manager(
    client: Client,
    mut receiver: mpsc::Receiver<AppEvent>,
    sender: mpsc::Sender<ManagerEvent>,
) {
    while let Some(event) = receiver.recv().await {
        let reply = match event {
            AppEvent::Quit => break,
            AppEvent::RequestLibraries => {
                ManagerEvent::Libraries(client.list_libraries().await.into())
            }
            AppEvent::RequestArchives => ManagerEvent::Archives(client.list_archives().await.into()),
            AppEvent::RequestGames(collection) => {
                ManagerEvent::Games(collection, client.list_games(collection).await.into())
            }
            AppEvent::RequestGame(kind, id) => {
                ManagerEvent::Game(kind, id, client.fetch_game(kind, id).await.into())
            }
            AppEvent::Archive { archive_id, app_id } => ManagerEvent::Archived {
                app_id,
                result: client.archive_game(archive_id, app_id).await.into(),
            },
        };
        if sender.send(reply).await.is_err() {
            break;
        }
    }
    tracing::debug!("manager stopped");
}
