use std::fmt;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::kind::RecordKind;
use crate::model::{ArchiveRecord, GameRecord, LibraryRecord};

/// A library or archive whose games can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// A Steam library, by id.
    Library(u64),
    /// An archive, by id.
    Archive(u64),
}

impl Collection {
    /// The kind of record a game in this collection is fetched as.
    #[must_use]
    pub fn record_kind(self) -> RecordKind {
        match self {
            Collection::Library(_) => RecordKind::Game,
            Collection::Archive(_) => RecordKind::ArchivedGame,
        }
    }

    fn games_path(self) -> String {
        match self {
            Collection::Library(id) => format!("/libraries/{id}/games/"),
            Collection::Archive(id) => format!("/archives/{id}/games/"),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Library(id) => write!(f, "library {id}"),
            Collection::Archive(id) => write!(f, "archive {id}"),
        }
    }
}

/// Read access to the library backend, plus the one write it offers:
/// archiving a game.
///
/// Every call issues exactly one request. Nothing is cached or retried.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Create a client rooted at `base_url` that honours the configured
    /// request timeout.
    pub fn from_config(config: &Config, base_url: impl Into<String>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http(builder.build()?, base_url))
    }

    fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// The root URL requests are made against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /libraries/`
    pub async fn list_libraries(&self) -> Result<Vec<LibraryRecord>> {
        self.get_json("/libraries/").await
    }

    /// `GET /archives/`
    pub async fn list_archives(&self) -> Result<Vec<ArchiveRecord>> {
        self.get_json("/archives/").await
    }

    /// `GET /libraries/{id}/games/` or `GET /archives/{id}/games/`
    pub async fn list_games(&self, collection: Collection) -> Result<Vec<GameRecord>> {
        self.get_json(&collection.games_path()).await
    }

    /// `GET /games/`: every installed game across all libraries.
    pub async fn list_all_games(&self) -> Result<Vec<GameRecord>> {
        self.get_json("/games/").await
    }

    /// `GET /archived-games/`: every game across all archives.
    pub async fn list_all_archived_games(&self) -> Result<Vec<GameRecord>> {
        self.get_json("/archived-games/").await
    }

    /// `GET /games/{id}` or `GET /archived-games/{id}`
    pub async fn fetch_game(&self, kind: RecordKind, id: u64) -> Result<GameRecord> {
        self.get_json(&format!("/{}/{id}", kind.path_segment())).await
    }

    /// `PUT /archives/{archive_id}/games/{app_id}`
    ///
    /// Asks the backend to move a game into an archive. Any success status
    /// counts; the response body is ignored.
    pub async fn archive_game(&self, archive_id: u64, app_id: u64) -> Result<()> {
        let url = self.url(&format!("/archives/{archive_id}/games/{app_id}"));
        tracing::info!(%url, archive_id, app_id, "archiving game");
        let response = self.http.put(&url).send().await?;
        check_status(&url, response.status())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).send().await.inspect_err(|err| {
            tracing::warn!(%url, error = %err, "request failed");
        })?;
        check_status(&url, response.status())?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(%url, error = %source, "malformed response body");
            FetchError::Decode { url, source }
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn check_status(url: &str, status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!(%url, %status, "backend returned an error status");
    Err(FetchError::Status {
        url: url.to_string(),
        status: status.as_u16(),
    })
}
