use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Widget},
};
use vapour_client::{DisplayGameRecord, humanise, label_visible, percent_of};

use crate::tui::style::ChartStyle;

/// Horizontal bar chart of a library's games plus its free space.
///
/// Games too small to be read at a glance keep their bar but lose their
/// label; see [`vapour_client::threshold`].
#[derive(Debug)]
pub struct SizeChart<'a> {
    games: &'a [DisplayGameRecord],
    free_bytes: u64,
    potential: u64,
    threshold: Option<f64>,
    style: &'a ChartStyle,
}

impl<'a> SizeChart<'a> {
    /// Create a chart over an aggregated game list.
    pub fn new(
        games: &'a [DisplayGameRecord],
        free_bytes: u64,
        potential: u64,
        threshold: Option<f64>,
        style: &'a ChartStyle,
    ) -> Self {
        Self {
            games,
            free_bytes,
            potential,
            threshold,
            style,
        }
    }

    fn label(&self, entry: &DisplayGameRecord) -> String {
        let share = percent_of(entry.game.size, self.potential).unwrap_or(0.0);
        if label_visible(share, self.threshold) {
            entry.game.name.clone()
        } else {
            String::new()
        }
    }
}

impl Widget for SizeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(" Games by size ");
        let rows = usize::from(block.inner(area).height);

        // One row stays reserved for the free-space bar.
        let mut bars: Vec<Bar> = self
            .games
            .iter()
            .take(rows.saturating_sub(1))
            .map(|entry| {
                let style = if entry.has_focus {
                    self.style.focus
                } else {
                    self.style.used
                };
                Bar::default()
                    .value(entry.game.size)
                    .label(Line::from(self.label(entry)))
                    .text_value(humanise(entry.game.size))
                    .style(style)
            })
            .collect();

        if rows > 0 {
            bars.push(
                Bar::default()
                    .value(self.free_bytes)
                    .label(Line::from("Remaining"))
                    .text_value(humanise(self.free_bytes))
                    .style(self.style.free),
            );
        }

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
