use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

/// Which collection a single game record is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A game installed in a library.
    Game,
    /// A game held in an archive.
    ArchivedGame,
}

impl RecordKind {
    /// Path segment of the backend's endpoint for this kind.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            RecordKind::Game => "games",
            RecordKind::ArchivedGame => "archived-games",
        }
    }

    /// Only installed games can be moved into an archive.
    #[must_use]
    pub fn is_archivable(self) -> bool {
        matches!(self, RecordKind::Game)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Game => f.write_str("game"),
            RecordKind::ArchivedGame => f.write_str("archived-game"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "game" => Ok(RecordKind::Game),
            "archived-game" | "archivedgame" => Ok(RecordKind::ArchivedGame),
            other => {
                tracing::warn!(kind = other, "refusing unknown record kind");
                Err(FetchError::UnknownRecordKind(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("game".parse::<RecordKind>().expect("game"), RecordKind::Game);
        assert_eq!(
            "archived-game".parse::<RecordKind>().expect("archived"),
            RecordKind::ArchivedGame
        );
        assert_eq!(
            "archivedgame".parse::<RecordKind>().expect("archived"),
            RecordKind::ArchivedGame
        );
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        let err = "library".parse::<RecordKind>().expect_err("unknown kind");
        assert!(matches!(err, FetchError::UnknownRecordKind(ref tag) if tag == "library"));
        assert_eq!(err.to_string(), "unknown record kind: \"library\"");
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [RecordKind::Game, RecordKind::ArchivedGame] {
            assert_eq!(kind.to_string().parse::<RecordKind>().expect("parse"), kind);
        }
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(RecordKind::Game.path_segment(), "games");
        assert_eq!(RecordKind::ArchivedGame.path_segment(), "archived-games");
        assert!(RecordKind::Game.is_archivable());
        assert!(!RecordKind::ArchivedGame.is_archivable());
    }
}
