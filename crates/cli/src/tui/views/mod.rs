//! Tab bodies of the dashboard.

mod archives;
mod collection;
mod libraries;

pub use archives::ArchivesView;
pub use collection::CollectionViewState;
pub use libraries::LibrariesView;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::tui::fetch::Fetch;

/// Render the loading or error placeholder for data that is not ready.
/// Returns `true` when something was drawn.
fn render_pending<T>(fetch: &Fetch<T>, what: &str, area: Rect, buf: &mut Buffer) -> bool {
    let text = match fetch {
        Fetch::Loading => format!("Loading {what}..."),
        Fetch::Failed => "Error".to_string(),
        Fetch::Ready(_) => return false,
    };
    Paragraph::new(text).centered().render(area, buf);
    true
}

/// `◀ 1/2 ▶  /path` line above a library or archive.
fn selector_line(index: usize, len: usize, path: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("◀ {}/{len} ▶  ", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(path.to_string(), Style::default().bold()),
    ])
}

fn shortcuts_bar() -> Line<'static> {
    let key = Style::default().fg(Color::Black).bg(Color::Yellow);
    Line::from(vec![
        Span::styled(" ←/→ ", key),
        Span::raw(" Switch  "),
        Span::styled(" ↑/↓ ", key),
        Span::raw(" Select  "),
        Span::styled(" Enter ", key),
        Span::raw(" Details  "),
        Span::styled(" r ", key),
        Span::raw(" Refresh  "),
        Span::styled(" q ", key),
        Span::raw(" Quit "),
    ])
}
