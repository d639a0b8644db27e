use ratatui::{
    prelude::*,
    widgets::{Block, Gauge, Paragraph, Widget},
};
use vapour_client::{ArchiveRecord, ArchiveUsage, Storage, UsageBand, humanise, percent_of};

use crate::tui::style::ChartStyle;

/// Used versus potential space of a library or archive.
#[derive(Debug)]
pub struct StorageGauge<'a, S> {
    storage: &'a S,
    style: &'a ChartStyle,
}

impl<'a, S: Storage> StorageGauge<'a, S> {
    /// Create a gauge for a storage location.
    pub fn new(storage: &'a S, style: &'a ChartStyle) -> Self {
        Self { storage, style }
    }
}

impl<S: Storage> Widget for StorageGauge<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let used = self.storage.used_bytes();
        let potential = self.storage.potential_size();
        let (ratio, label) = match percent_of(used, potential) {
            Some(percent) => (
                (percent / 100.0).clamp(0.0, 1.0),
                format!(
                    "{} used of {} ({percent:.1}%)",
                    humanise(used),
                    humanise(potential)
                ),
            ),
            None => (0.0, "no capacity reported".to_string()),
        };

        Gauge::default()
            .block(Block::bordered().title(" Disk usage "))
            .gauge_style(self.style.used.bg(self.style.free.fg.unwrap_or(Color::Reset)))
            .ratio(ratio)
            .label(label)
            .render(area, buf);
    }
}

/// An archive's fill level on a banded scale, with its max size marked.
#[derive(Debug)]
pub struct ArchiveBar<'a> {
    archive: &'a ArchiveRecord,
    style: &'a ChartStyle,
}

impl<'a> ArchiveBar<'a> {
    /// Create a usage bar for an archive.
    pub fn new(archive: &'a ArchiveRecord, style: &'a ChartStyle) -> Self {
        Self { archive, style }
    }
}

impl Widget for ArchiveBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(" Archive size ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(usage) = ArchiveUsage::of(self.archive) else {
            Paragraph::new("no capacity reported").render(inner, buf);
            return;
        };

        let [bar_area, legend_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let width = bar_area.width;
        if width > 0 {
            for column in 0..width {
                let percent = (f64::from(column) + 0.5) / f64::from(width) * 100.0;
                let colour = self.style.band(UsageBand::for_percent(percent));
                let symbol = if percent <= usage.used_percent {
                    "█"
                } else {
                    "░"
                };
                buf.set_string(
                    bar_area.x + column,
                    bar_area.y,
                    symbol,
                    Style::default().fg(colour),
                );
            }
            let target = marker_column(usage.target_percent, width);
            buf.set_string(bar_area.x + target, bar_area.y, "┃", self.style.target);
        }

        let mut legend = format!(
            "{} of max {} | {:.1}% used, max at {:.1}%",
            humanise(self.archive.size),
            humanise(self.archive.max_size),
            usage.used_percent,
            usage.target_percent,
        );
        if usage.over_target() {
            legend.push_str(" | over max size");
        }
        Paragraph::new(legend).render(legend_area, buf);
    }
}

/// Column of a `width`-wide bar that represents `percent`.
fn marker_column(percent: f64, width: u16) -> u16 {
    let last = width.saturating_sub(1);
    let column = (percent.clamp(0.0, 100.0) / 100.0 * f64::from(last)).round();
    // The value is within 0..=last after clamping.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let column = column as u16;
    column.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_column() {
        assert_eq!(marker_column(0.0, 11), 0);
        assert_eq!(marker_column(50.0, 11), 5);
        assert_eq!(marker_column(100.0, 11), 10);
        assert_eq!(marker_column(250.0, 11), 10);
        assert_eq!(marker_column(40.0, 0), 0);
    }
}
