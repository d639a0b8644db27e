use anyhow::Result;
use comfy_table::{Table, presets::UTF8_FULL};
use vapour_client::{ArchiveUsage, humanise};

use crate::core::{Session, percent_cell};

/// List archives and how full they are
#[derive(clap::Args)]
pub(crate) struct ListOpts {}

impl ListOpts {
    pub(crate) async fn run(&self, session: &Session) -> Result<()> {
        let archives = session.client.list_archives().await?;

        if archives.is_empty() {
            println!("No archives reported by {}", session.client.base_url());
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["ID", "Path", "Used", "Max", "Free", "Used %", "Max %"]);

        for archive in &archives {
            let usage = ArchiveUsage::of(archive);
            table.add_row(vec![
                archive.id.to_string(),
                archive.path.clone(),
                humanise(archive.size),
                humanise(archive.max_size),
                humanise(archive.free_bytes),
                percent_cell(usage.map(|u| u.used_percent)),
                percent_cell(usage.map(|u| u.target_percent)),
            ]);
        }

        println!("\nFound {} archive(s):\n", archives.len());
        println!("{table}");
        Ok(())
    }
}

/// Move an installed game into an archive
#[derive(clap::Args)]
pub(crate) struct ArchiveOpts {
    /// The archive to move the game into
    archive_id: u64,
    /// The Steam app id of the game
    app_id: u64,
}

impl ArchiveOpts {
    pub(crate) async fn run(&self, session: &Session) -> Result<()> {
        session
            .client
            .archive_game(self.archive_id, self.app_id)
            .await?;
        println!(
            "Requested archiving of app {} into archive {}",
            self.app_id, self.archive_id
        );
        Ok(())
    }
}
