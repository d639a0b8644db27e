use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, Widget},
};
use vapour_client::{GameRecord, RecordKind, humanise};

use crate::tui::fetch::Fetch;
use crate::tui::style::ChartStyle;

/// Whether the focused game can be archived from the detail pop-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveAction {
    /// Archived games, or no archive to move into.
    Unavailable,
    /// Pressing `a` moves the game into the archive at this path.
    Available(String),
    /// The request was sent.
    Pending,
    /// The backend accepted the request.
    Done,
    /// The backend refused the request.
    Failed,
}

/// Pop-up with everything known about one game.
#[derive(Debug)]
pub struct GameDetail<'a> {
    game: &'a Fetch<GameRecord>,
    kind: RecordKind,
    action: &'a ArchiveAction,
    style: &'a ChartStyle,
}

impl<'a> GameDetail<'a> {
    /// Create the pop-up for a game being fetched as `kind`.
    pub fn new(
        game: &'a Fetch<GameRecord>,
        kind: RecordKind,
        action: &'a ArchiveAction,
        style: &'a ChartStyle,
    ) -> Self {
        Self {
            game,
            kind,
            action,
            style,
        }
    }

    fn shortcuts(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Black).bg(Color::Yellow);
        let mut spans = vec![Span::styled(" Esc ", key), Span::raw(" Close  ")];
        match self.action {
            ArchiveAction::Available(target) => {
                spans.push(Span::styled(" a ", key));
                spans.push(Span::raw(format!(" Archive to {target} ")));
            }
            ArchiveAction::Pending => spans.push(Span::raw("Archiving...")),
            ArchiveAction::Done => spans.push(Span::raw("Archived")),
            ArchiveAction::Failed => spans.push(Span::raw("Archiving failed")),
            ArchiveAction::Unavailable => {}
        }
        Line::from(spans)
    }
}

/// A rectangle `percent_x` wide and `height` tall, centred in `area`.
fn popup_area(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

impl Widget for GameDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = popup_area(area, 80, 12);
        Clear.render(area, buf);

        let title = match self.game {
            Fetch::Ready(game) => format!(" {} ", game.name),
            Fetch::Loading | Fetch::Failed => format!(" {} ", self.kind),
        };
        let block = Block::bordered().title(title).title_style(self.style.header);
        let inner = block.inner(area);
        block.render(area, buf);

        let [content_area, shortcuts_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        match self.game {
            Fetch::Loading => Paragraph::new("Loading...")
                .centered()
                .render(content_area, buf),
            Fetch::Failed => Paragraph::new("Error")
                .centered()
                .render(content_area, buf),
            Fetch::Ready(game) => {
                let rows = [
                    ("AppID", game.id.to_string()),
                    ("Manifest", game.manifest_path.clone()),
                    ("Install", game.install_path.clone()),
                    ("Size", humanise(game.size)),
                    ("Store", game.store_url.clone()),
                    ("Image", game.img_url.clone()),
                ]
                .into_iter()
                .map(|(field, value)| {
                    Row::new(vec![
                        Cell::from(Line::from(field).right_aligned().bold()),
                        Cell::from(value),
                    ])
                });
                Widget::render(
                    Table::new(rows, [Constraint::Length(8), Constraint::Fill(1)])
                        .column_spacing(2),
                    content_area,
                    buf,
                );
            }
        }

        Paragraph::new(self.shortcuts())
            .style(Style::default().fg(Color::DarkGray))
            .render(shortcuts_area, buf);
    }
}
