use ratatui::{
    prelude::*,
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use vapour_client::DisplayGameRecord;

use crate::tui::style::ChartStyle;

/// Size-ordered table of games with the focused one marked.
#[derive(Debug)]
pub struct GameTable<'a> {
    games: &'a [DisplayGameRecord],
    style: &'a ChartStyle,
    size_header: &'static str,
}

impl<'a> GameTable<'a> {
    /// Create a table over an aggregated game list.
    pub fn new(games: &'a [DisplayGameRecord], style: &'a ChartStyle) -> Self {
        Self {
            games,
            style,
            size_header: "Size",
        }
    }

    /// Title of the size column, e.g. when sizes are in a fixed unit.
    #[must_use]
    pub fn size_header(mut self, header: &'static str) -> Self {
        self.size_header = header;
        self
    }
}

impl StatefulWidget for GameTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.games.is_empty() {
            Paragraph::new("No games.").centered().render(area, buf);
            return;
        }

        let header = Row::new(vec![
            Cell::from(""),
            Cell::from("Name"),
            Cell::from("AppID"),
            Cell::from(Line::from(self.size_header).right_aligned()),
        ])
        .style(self.style.header);

        let rows: Vec<Row> = self
            .games
            .iter()
            .map(|entry| {
                let row = Row::new(vec![
                    Cell::from(if entry.has_focus { "▶" } else { "" }),
                    Cell::from(entry.game.name.clone()),
                    Cell::from(entry.game.id.to_string()),
                    Cell::from(Line::from(entry.display_size.clone()).right_aligned()),
                ]);
                if entry.has_focus {
                    row.style(self.style.focus)
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(8),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        StatefulWidget::render(table, area, buf, state);
    }
}
