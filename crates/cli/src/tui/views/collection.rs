use ratatui::widgets::TableState;
use vapour_client::{Collection, DisplayGameRecord, GameRecord, SizeDisplay, aggregate, refocus};

use crate::tui::fetch::Fetch;

/// Selection state behind the libraries and archives tabs.
#[derive(Debug, Default)]
pub struct CollectionViewState {
    /// Index of the library or archive on display.
    pub selected: usize,
    /// Games of the collection on display, largest first.
    pub games: Fetch<Vec<DisplayGameRecord>>,
    /// The collection `games` was requested for.
    pub loaded_for: Option<Collection>,
    /// Row selection in the game table.
    pub table_state: TableState,
    /// App id of the focused game.
    pub focus: Option<u64>,
}

impl CollectionViewState {
    /// Create a state showing the first collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
            ..Self::default()
        }
    }

    /// Show the next collection out of `len`, wrapping around.
    pub fn select_next_collection(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Show the previous collection out of `len`, wrapping around.
    pub fn select_prev_collection(&mut self, len: usize) {
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1) % len;
        }
    }

    /// Forget the current games and wait for those of `collection`.
    pub fn begin_loading(&mut self, collection: Collection) {
        self.loaded_for = Some(collection);
        self.games = Fetch::Loading;
        self.focus = None;
        self.table_state.select(Some(0));
    }

    /// Store games that arrived for `collection`.
    ///
    /// Returns `false` and drops them when another collection has been
    /// selected since they were requested.
    pub fn receive_games(
        &mut self,
        collection: Collection,
        games: Fetch<Vec<GameRecord>>,
        display: SizeDisplay,
    ) -> bool {
        if self.loaded_for != Some(collection) {
            tracing::debug!(%collection, "dropping games for a collection no longer shown");
            return false;
        }
        let focus = self.focus;
        self.games = games.map(|games| aggregate(&games, focus, display));
        let len = self.games.ready().map_or(0, Vec::len);
        if self.table_state.selected().is_some_and(|row| row >= len) {
            self.table_state.select(Some(len.saturating_sub(1)));
        }
        true
    }

    fn game_count(&self) -> usize {
        self.games.ready().map_or(0, Vec::len)
    }

    /// Select the next game row, wrapping around.
    pub fn select_next_game(&mut self) {
        let len = self.game_count();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if current >= len - 1 { 0 } else { current + 1 };
        self.table_state.select(Some(next));
    }

    /// Select the previous game row, wrapping around.
    pub fn select_prev_game(&mut self) {
        let len = self.game_count();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.table_state.select(Some(prev));
    }

    /// The game under the table cursor.
    #[must_use]
    pub fn selected_game(&self) -> Option<&DisplayGameRecord> {
        let row = self.table_state.selected()?;
        self.games.ready()?.get(row)
    }

    /// Focus the game under the cursor and return its app id.
    pub fn focus_selected(&mut self) -> Option<u64> {
        let id = self.selected_game()?.game.id;
        self.set_focus(Some(id));
        Some(id)
    }

    /// Move the focus, recomputing every entry's flag.
    pub fn set_focus(&mut self, focus: Option<u64>) {
        self.focus = focus;
        if let Some(games) = self.games.ready_mut() {
            refocus(games, focus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vapour_client::focused;

    fn games() -> Vec<GameRecord> {
        vec![
            GameRecord::new_for_test(1, "Alpha", 300),
            GameRecord::new_for_test(2, "Beta", 100),
            GameRecord::new_for_test(3, "Gamma", 300),
        ]
    }

    fn loaded() -> CollectionViewState {
        let mut state = CollectionViewState::new();
        state.begin_loading(Collection::Library(0));
        assert!(state.receive_games(
            Collection::Library(0),
            Fetch::Ready(games()),
            SizeDisplay::Humanised
        ));
        state
    }

    #[test]
    fn test_receive_games_orders_by_size() {
        let state = loaded();
        let ids: Vec<u64> = state
            .games
            .ready()
            .expect("games")
            .iter()
            .map(|entry| entry.game.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_stale_games_are_dropped() {
        let mut state = CollectionViewState::new();
        state.begin_loading(Collection::Library(0));
        state.begin_loading(Collection::Library(1));

        let applied = state.receive_games(
            Collection::Library(0),
            Fetch::Ready(games()),
            SizeDisplay::Humanised,
        );
        assert!(!applied);
        assert_eq!(state.games, Fetch::Loading);
    }

    #[test]
    fn test_focus_follows_cursor() {
        let mut state = loaded();
        state.select_next_game();
        state.select_next_game();
        assert_eq!(state.focus_selected(), Some(2));

        let list = state.games.ready().expect("games");
        assert_eq!(focused(list).map(|entry| entry.game.id), Some(2));
        assert_eq!(list.iter().filter(|entry| entry.has_focus).count(), 1);

        state.set_focus(None);
        assert!(focused(state.games.ready().expect("games")).is_none());
    }

    #[test]
    fn test_game_selection_wraps() {
        let mut state = loaded();
        state.select_prev_game();
        assert_eq!(state.table_state.selected(), Some(2));
        state.select_next_game();
        assert_eq!(state.table_state.selected(), Some(0));
    }

    #[test]
    fn test_collection_selection_wraps() {
        let mut state = CollectionViewState::new();
        state.select_prev_collection(3);
        assert_eq!(state.selected, 2);
        state.select_next_collection(3);
        assert_eq!(state.selected, 0);
        state.select_next_collection(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_failed_games() {
        let mut state = CollectionViewState::new();
        state.begin_loading(Collection::Archive(0));
        state.receive_games(Collection::Archive(0), Fetch::Failed, SizeDisplay::Humanised);
        assert_eq!(state.games, Fetch::Failed);
        assert!(state.focus_selected().is_none());
    }
}
