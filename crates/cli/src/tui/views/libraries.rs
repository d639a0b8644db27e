use ratatui::{
    prelude::*,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use vapour_client::{LibraryRecord, Storage, humanise, threshold};

use super::{CollectionViewState, render_pending, selector_line, shortcuts_bar};
use crate::tui::components::{GameTable, SizeChart, StorageGauge};
use crate::tui::fetch::Fetch;
use crate::tui::style::ChartStyle;

/// The libraries tab: one library at a time with its usage and games.
#[derive(Debug)]
pub struct LibrariesView<'a> {
    libraries: &'a Fetch<Vec<LibraryRecord>>,
    style: &'a ChartStyle,
    label_cutoff: f64,
    size_header: &'static str,
}

impl<'a> LibrariesView<'a> {
    /// Create the view; games smaller than `label_cutoff` bytes are charted
    /// without a label.
    pub fn new(
        libraries: &'a Fetch<Vec<LibraryRecord>>,
        style: &'a ChartStyle,
        label_cutoff: f64,
    ) -> Self {
        Self {
            libraries,
            style,
            label_cutoff,
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

impl StatefulWidget for LibrariesView<'_> {
    type State = CollectionViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if render_pending(self.libraries, "libraries", area, buf) {
            return;
        }
        let libraries = self.libraries.ready().map_or(&[][..], Vec::as_slice);
        let Some(library) = libraries.get(state.selected) else {
            Paragraph::new("No libraries reported.")
                .centered()
                .render(area, buf);
            return;
        };

        let [selector_area, gauge_area, summary_area, body_area, shortcuts_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        Paragraph::new(selector_line(state.selected, libraries.len(), &library.path))
            .render(selector_area, buf);
        StorageGauge::new(library, self.style).render(gauge_area, buf);

        let count = state
            .games
            .ready()
            .map_or_else(|| "-".to_string(), |games| games.len().to_string());
        Paragraph::new(format!(
            "{count} Games | {} | {} free",
            humanise(library.size),
            humanise(library.free_bytes)
        ))
        .render(summary_area, buf);

        let [chart_area, table_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body_area);

        if !render_pending(&state.games, "games", body_area, buf)
            && let Some(games) = state.games.ready()
        {
            let label_threshold =
                threshold(library.free_bytes, library.size, self.label_cutoff);
            SizeChart::new(
                games,
                library.free_bytes,
                library.potential_size(),
                label_threshold,
                self.style,
            )
            .render(chart_area, buf);
            GameTable::new(games, self.style)
                .size_header(self.size_header)
                .render(table_area, buf, &mut state.table_state);
        }

        Paragraph::new(shortcuts_bar())
            .style(Style::default().fg(Color::DarkGray))
            .render(shortcuts_area, buf);
    }
}
