use ratatui::style::{Color, Modifier, Style};
use vapour_client::UsageBand;

/// Colours for the usage charts.
///
/// Every chart widget takes one of these at construction; nothing is read
/// from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Bars for games.
    pub used: Style,
    /// The free-space bar and the unfilled part of gauges.
    pub free: Style,
    /// The focused game's bar and table row.
    pub focus: Style,
    /// Table and chart headers.
    pub header: Style,
    /// The max-size marker on an archive's usage bar.
    pub target: Style,
    /// Fill colours of the archive usage bands, lowest first.
    pub bands: [Color; 5],
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            used: Style::default().fg(Color::Cyan),
            free: Style::default().fg(Color::DarkGray),
            focus: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            target: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            bands: [
                Color::Rgb(0x19, 0xd2, 0x28),
                Color::Rgb(0xb4, 0xdd, 0x1e),
                Color::Rgb(0xf4, 0xfb, 0x16),
                Color::Rgb(0xf6, 0xd3, 0x2b),
                Color::Rgb(0xfb, 0x71, 0x16),
            ],
        }
    }
}

impl ChartStyle {
    /// Fill colour for a usage band.
    #[must_use]
    pub fn band(&self, band: UsageBand) -> Color {
        let index = UsageBand::ALL
            .iter()
            .position(|b| *b == band)
            .unwrap_or_default();
        self.bands.get(index).copied().unwrap_or(Color::Reset)
    }
}
