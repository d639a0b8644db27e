use ratatui::{
    prelude::*,
    widgets::{Block, Tabs},
};

/// A trait for items that can be displayed in a tab bar.
pub trait TabItem: Copy + PartialEq + 'static {
    /// Returns all tab items in order.
    fn all() -> &'static [Self];

    /// Returns the display title for this tab.
    fn title(&self) -> &'static str;

    /// Position of this tab in [`TabItem::all`].
    fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// Returns the next tab (wrapping around).
    fn next(&self) -> Self {
        let all = Self::all();
        all.get((self.index() + 1) % all.len()).copied().unwrap_or(*self)
    }

    /// Returns the previous tab (wrapping around).
    fn prev(&self) -> Self {
        let all = Self::all();
        let prev = self.index().checked_sub(1).unwrap_or(all.len() - 1);
        all.get(prev).copied().unwrap_or(*self)
    }

    /// Returns the tab at the given 1-based index (for number key navigation).
    fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }
}

/// A tab bar whose border carries the dashboard title.
#[derive(Debug)]
pub struct TabBar<T: TabItem> {
    title: String,
    selected: T,
    highlight_style: Style,
}

impl<T: TabItem> TabBar<T> {
    /// Creates a new tab bar with the given title and selected tab.
    pub fn new(title: impl Into<String>, selected: T) -> Self {
        Self {
            title: title.into(),
            selected,
            highlight_style: Style::default().bold().fg(Color::Yellow),
        }
    }

    /// Sets the highlight style for the selected tab.
    #[must_use]
    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }
}

impl<T: TabItem> Widget for TabBar<T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<&str> = T::all().iter().map(|t| t.title()).collect();

        Tabs::new(titles)
            .block(Block::bordered().title(format!(" {} ", self.title)))
            .highlight_style(self.highlight_style)
            .select(self.selected.index())
            .render(area, buf);
    }
}
