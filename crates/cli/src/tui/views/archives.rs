use ratatui::{
    prelude::*,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use vapour_client::ArchiveRecord;

use super::{CollectionViewState, render_pending, selector_line, shortcuts_bar};
use crate::tui::components::{ArchiveBar, GameTable};
use crate::tui::fetch::Fetch;
use crate::tui::style::ChartStyle;

/// The archives tab: one archive at a time with its fill level and games.
#[derive(Debug)]
pub struct ArchivesView<'a> {
    archives: &'a Fetch<Vec<ArchiveRecord>>,
    style: &'a ChartStyle,
    size_header: &'static str,
}

impl<'a> ArchivesView<'a> {
    /// Create the view.
    pub fn new(archives: &'a Fetch<Vec<ArchiveRecord>>, style: &'a ChartStyle) -> Self {
        Self {
            archives,
            style,
            size_header: "Size",
        }
    }

    /// Title of the size column of the game table.
    #[must_use]
    pub fn size_header(mut self, header: &'static str) -> Self {
        self.size_header = header;
        self
    }
}

impl StatefulWidget for ArchivesView<'_> {
    type State = CollectionViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if render_pending(self.archives, "archives", area, buf) {
            return;
        }
        let archives = self.archives.ready().map_or(&[][..], Vec::as_slice);
        let Some(archive) = archives.get(state.selected) else {
            Paragraph::new("No archives configured.")
                .centered()
                .render(area, buf);
            return;
        };

        let [selector_area, bar_area, table_area, shortcuts_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(selector_line(state.selected, archives.len(), &archive.path))
            .render(selector_area, buf);
        ArchiveBar::new(archive, self.style).render(bar_area, buf);

        if !render_pending(&state.games, "games", table_area, buf)
            && let Some(games) = state.games.ready()
        {
            GameTable::new(games, self.style)
                .size_header(self.size_header)
                .render(table_area, buf, &mut state.table_state);
        }

        Paragraph::new(shortcuts_bar())
            .style(Style::default().fg(Color::DarkGray))
            .render(shortcuts_area, buf);
    }
}
