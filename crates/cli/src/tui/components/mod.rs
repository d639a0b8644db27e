//! Reusable widgets for the dashboard.

mod detail;
mod game_table;
mod size_chart;
mod tab_bar;
mod usage_bar;

pub use detail::{ArchiveAction, GameDetail};
pub use game_table::GameTable;
pub use size_chart::SizeChart;
pub use tab_bar::{TabBar, TabItem};
pub use usage_bar::{ArchiveBar, StorageGauge};
