//! A client library for a Steam library storage backend.
//!
//! The backend reports installed libraries, archives and the games inside
//! them. This crate fetches those records and shapes them for display:
//! human-readable sizes, size-ordered game lists with a focused entry, and
//! the percentages that drive usage charts.
//!
//! # Example
//!
//! ```no_run
//! use vapour_client::{Client, Collection, SizeDisplay, aggregate, humanise};
//!
//! # async fn run() -> vapour_client::Result<()> {
//! let client = Client::new("http://localhost:8000");
//! for library in client.list_libraries().await? {
//!     let games = client.list_games(Collection::Library(library.id)).await?;
//!     println!("{} ({})", library.path, humanise(library.size));
//!     for game in aggregate(&games, None, SizeDisplay::Humanised) {
//!         println!("  {:>12}  {}", game.display_size, game.game.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod client;
mod config;
mod error;
mod format;
mod kind;
mod model;
mod threshold;

pub use aggregate::{DisplayGameRecord, aggregate, focused, refocus};
pub use client::{Client, Collection};
pub use config::{BASE_URL_ENV, Config, DEFAULT_BASE_URL};
pub use error::{FetchError, Result};
pub use format::{SizeDisplay, gibibytes, humanise, unit_index};
pub use kind::RecordKind;
pub use model::{ArchiveRecord, GameRecord, LibraryRecord, Storage};
pub use threshold::{
    ArchiveUsage, DEFAULT_LABEL_CUTOFF, UsageBand, label_visible, percent_of, threshold,
};
