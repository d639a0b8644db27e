use anyhow::Result;
use comfy_table::{Table, presets::UTF8_FULL};
use vapour_client::{Collection, RecordKind, SizeDisplay, aggregate, humanise};

use crate::core::Session;

/// List the games of a library or archive, largest first
#[derive(clap::Args)]
pub(crate) struct ListOpts {
    /// List the games installed in this library
    #[arg(long, value_name = "ID", conflicts_with = "archive", required_unless_present = "archive")]
    library: Option<u64>,
    /// List the games held in this archive
    #[arg(long, value_name = "ID")]
    archive: Option<u64>,
    /// Mark the game with this app id
    #[arg(long, value_name = "APP_ID")]
    focus: Option<u64>,
    /// Show sizes in gibibytes instead of the best fitting unit
    #[arg(long)]
    gib: bool,
    /// Print the list as JSON
    #[arg(long)]
    json: bool,
}

impl ListOpts {
    fn collection(&self) -> Collection {
        match (self.library, self.archive) {
            (_, Some(id)) => Collection::Archive(id),
            (Some(id), None) => Collection::Library(id),
            // clap enforces that one of the two is present
            (None, None) => Collection::Library(0),
        }
    }

    fn size_display(&self, session: &Session) -> SizeDisplay {
        if self.gib {
            SizeDisplay::Gibibytes
        } else {
            session.config.size_display
        }
    }

    pub(crate) async fn run(&self, session: &Session) -> Result<()> {
        let collection = self.collection();
        let games = session.client.list_games(collection).await?;
        let display = self.size_display(session);
        let list = aggregate(&games, self.focus, display);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        if list.is_empty() {
            println!("No games in {collection}");
            return Ok(());
        }

        let size_header = match display {
            SizeDisplay::Humanised => "Size",
            SizeDisplay::Gibibytes => "Size (GiB)",
        };
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["", "AppID", "Name", size_header]);

        for entry in &list {
            let marker = if entry.has_focus { "▶" } else { "" };
            table.add_row(vec![
                marker.to_string(),
                entry.game.id.to_string(),
                entry.game.name.clone(),
                entry.display_size.clone(),
            ]);
        }

        let total: u64 = games.iter().map(|game| game.size).sum();
        println!(
            "\n{} game(s) in {collection}, {} total:\n",
            list.len(),
            humanise(total)
        );
        println!("{table}");
        Ok(())
    }
}

/// Show the details of a single game
#[derive(clap::Args)]
pub(crate) struct ShowOpts {
    /// The Steam app id of the game
    id: u64,
    /// Where to look the game up: `game` or `archived-game`
    #[arg(long, default_value = "game")]
    kind: RecordKind,
}

impl ShowOpts {
    pub(crate) async fn run(&self, session: &Session) -> Result<()> {
        let game = session.client.fetch_game(self.kind, self.id).await?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        let rows = [
            ("AppID", game.id.to_string()),
            ("Name", game.name.clone()),
            ("Manifest", game.manifest_path.clone()),
            ("Install", game.install_path.clone()),
            ("Size", humanise(game.size)),
            ("Store", game.store_url.clone()),
            ("Image", game.img_url.clone()),
        ];
        for (field, value) in rows {
            table.add_row(vec![field.to_string(), value]);
        }

        println!("{table}");
        Ok(())
    }
}
