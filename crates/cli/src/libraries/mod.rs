use anyhow::Result;
use comfy_table::{Table, presets::UTF8_FULL};
use vapour_client::{Storage, humanise, threshold};

use crate::core::{Session, percent_cell};

/// List Steam libraries and their disk usage
#[derive(clap::Args)]
pub(crate) struct Opts {}

impl Opts {
    pub(crate) async fn run(&self, session: &Session) -> Result<()> {
        let libraries = session.client.list_libraries().await?;

        if libraries.is_empty() {
            println!("No libraries reported by {}", session.client.base_url());
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["ID", "Path", "Used", "Free", "Total", "Label threshold"]);

        for library in &libraries {
            let label_threshold = threshold(
                library.free_bytes,
                library.size,
                session.config.label_cutoff_bytes,
            );
            table.add_row(vec![
                library.id.to_string(),
                library.path.clone(),
                humanise(library.size),
                humanise(library.free_bytes),
                humanise(library.potential_size()),
                percent_cell(label_threshold),
            ]);
        }

        println!("\nFound {} library(ies):\n", libraries.len());
        println!("{table}");
        Ok(())
    }
}
