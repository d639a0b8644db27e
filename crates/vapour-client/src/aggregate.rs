use serde::Serialize;

use crate::format::SizeDisplay;
use crate::model::GameRecord;

/// A game prepared for a table or chart: its size rendered for display and
/// whether it is the currently focused entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGameRecord {
    /// The underlying record.
    #[serde(flatten)]
    pub game: GameRecord,
    /// Size rendered with the list's [`SizeDisplay`].
    pub display_size: String,
    /// Whether this entry is the focused one.
    pub has_focus: bool,
}

/// Order games by size, largest first, and annotate them for display.
///
/// The sort is stable, so games of equal size keep their input order. Every
/// entry whose id equals `focus` is flagged; with unique ids that is at most
/// one. The whole list is rebuilt on each call.
#[must_use]
pub fn aggregate(
    games: &[GameRecord],
    focus: Option<u64>,
    display: SizeDisplay,
) -> Vec<DisplayGameRecord> {
    let mut ordered: Vec<&GameRecord> = games.iter().collect();
    ordered.sort_by(|a, b| b.size.cmp(&a.size));
    ordered
        .into_iter()
        .map(|game| DisplayGameRecord {
            game: game.clone(),
            display_size: display.format(game.size),
            has_focus: Some(game.id) == focus,
        })
        .collect()
}

/// Move the focus within an already aggregated list.
pub fn refocus(games: &mut [DisplayGameRecord], focus: Option<u64>) {
    for entry in games {
        entry.has_focus = Some(entry.game.id) == focus;
    }
}

/// The focused entry of an aggregated list, if any.
#[must_use]
pub fn focused(games: &[DisplayGameRecord]) -> Option<&DisplayGameRecord> {
    games.iter().find(|entry| entry.has_focus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64, size: u64) -> GameRecord {
        GameRecord::new_for_test(id, &format!("game-{id}"), size)
    }

    fn ids(list: &[DisplayGameRecord]) -> Vec<u64> {
        list.iter().map(|entry| entry.game.id).collect()
    }

    #[test]
    fn test_aggregate_orders_by_size_keeping_ties() {
        let games = vec![game(1, 300), game(2, 100), game(3, 300)];
        let list = aggregate(&games, Some(2), SizeDisplay::Humanised);

        assert_eq!(ids(&list), vec![1, 3, 2]);
        let focused: Vec<bool> = list.iter().map(|entry| entry.has_focus).collect();
        assert_eq!(focused, vec![false, false, true]);
        assert_eq!(list[0].display_size, "300.00 B");
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[], Some(1), SizeDisplay::Humanised).is_empty());
    }

    #[test]
    fn test_aggregate_without_match_focuses_nothing() {
        let games = vec![game(1, 10), game(2, 20)];
        let list = aggregate(&games, Some(99), SizeDisplay::Humanised);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|entry| !entry.has_focus));
        assert!(focused(&list).is_none());

        let list = aggregate(&games, None, SizeDisplay::Humanised);
        assert!(list.iter().all(|entry| !entry.has_focus));
    }

    #[test]
    fn test_aggregate_many_ties_are_stable() {
        let games: Vec<GameRecord> = (0..50).map(|id| game(id, (id % 3) * 1000)).collect();
        let list = aggregate(&games, None, SizeDisplay::Humanised);
        assert_eq!(list.len(), games.len());

        for pair in list.windows(2) {
            let (a, b) = (&pair[0].game, &pair[1].game);
            assert!(a.size >= b.size);
            if a.size == b.size {
                assert!(a.id < b.id, "tie order changed between {} and {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_aggregate_gibibytes() {
        let games = vec![game(7, 3 << 30)];
        let list = aggregate(&games, None, SizeDisplay::Gibibytes);
        assert_eq!(list[0].display_size, "3.00");
    }

    #[test]
    fn test_refocus_moves_single_flag() {
        let games = vec![game(1, 300), game(2, 100), game(3, 200)];
        let mut list = aggregate(&games, Some(1), SizeDisplay::Humanised);

        refocus(&mut list, Some(3));
        assert_eq!(focused(&list).map(|entry| entry.game.id), Some(3));
        assert_eq!(list.iter().filter(|entry| entry.has_focus).count(), 1);

        refocus(&mut list, None);
        assert!(focused(&list).is_none());
    }

    #[test]
    fn test_display_record_serializes_flat() {
        let list = aggregate(&[game(5, 2048)], Some(5), SizeDisplay::Humanised);
        let json = serde_json::to_value(&list[0]).expect("serialize");
        assert_eq!(json["id"], 5);
        assert_eq!(json["displaySize"], "2.00 kiB");
        assert_eq!(json["hasFocus"], true);
        assert!(json.get("game").is_none());
    }
}
