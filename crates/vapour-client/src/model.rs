use serde::{Deserialize, Serialize};

/// A game installed in a library or held in an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// The Steam app id.
    pub id: u64,
    /// Display name of the game.
    pub name: String,
    /// Installed size in bytes.
    pub size: u64,
    /// Path of the app manifest (`appmanifest_<id>.acf`).
    pub manifest_path: String,
    /// Directory the game is installed into.
    pub install_path: String,
    /// Store page of the game.
    pub store_url: String,
    /// Header image of the game.
    pub img_url: String,
}

impl GameRecord {
    /// Create a game record with placeholder paths for testing.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn new_for_test(id: u64, name: &str, size: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            size,
            manifest_path: format!("/steam/steamapps/appmanifest_{id}.acf"),
            install_path: format!("/steam/steamapps/common/{name}"),
            store_url: format!("https://store.steampowered.com/app/{id}"),
            img_url: format!("https://cdn.akamai.steamstatic.com/steam/apps/{id}/header.jpg"),
        }
    }
}

/// A Steam library folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    /// Position of the library in the backend's library list.
    pub id: u64,
    /// Root of the library.
    pub path: String,
    /// Directory games are installed into.
    #[serde(default)]
    pub install_path: String,
    /// Directory holding the app manifests.
    #[serde(default)]
    pub apps_path: String,
    /// Bytes used by installed games.
    pub size: u64,
    /// Bytes still free on the library's disk.
    pub free_bytes: u64,
}

/// A storage location games are moved to when they are archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecord {
    /// Position of the archive in the backend's archive list.
    pub id: u64,
    /// Root of the archive.
    pub path: String,
    /// Directory archived games are stored in.
    #[serde(default)]
    pub install_path: String,
    /// Directory holding the archived app manifests.
    #[serde(default)]
    pub apps_path: String,
    /// Bytes used by archived games.
    pub size: u64,
    /// Bytes still free on the archive's disk.
    pub free_bytes: u64,
    /// Capacity ceiling of the archive. Expected to be at least `size`.
    pub max_size: u64,
}

impl LibraryRecord {
    /// Create a library record for testing.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn new_for_test(id: u64, path: &str, size: u64, free_bytes: u64) -> Self {
        Self {
            id,
            path: path.to_string(),
            install_path: format!("{path}/steamapps/common"),
            apps_path: format!("{path}/steamapps"),
            size,
            free_bytes,
        }
    }
}

impl ArchiveRecord {
    /// Create an archive record for testing.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn new_for_test(id: u64, path: &str, size: u64, free_bytes: u64, max_size: u64) -> Self {
        Self {
            id,
            path: path.to_string(),
            install_path: format!("{path}/steamapps/common"),
            apps_path: format!("{path}/steamapps"),
            size,
            free_bytes,
            max_size,
        }
    }
}

/// A disk location holding games, with used and free byte totals.
pub trait Storage {
    /// Root path of the location.
    fn path(&self) -> &str;

    /// Bytes used by games.
    fn used_bytes(&self) -> u64;

    /// Bytes still free on the disk.
    fn free_bytes(&self) -> u64;

    /// Used plus free bytes: the most this location could ever hold.
    fn potential_size(&self) -> u64 {
        self.used_bytes().saturating_add(self.free_bytes())
    }
}

impl Storage for LibraryRecord {
    fn path(&self) -> &str {
        &self.path
    }

    fn used_bytes(&self) -> u64 {
        self.size
    }

    fn free_bytes(&self) -> u64 {
        self.free_bytes
    }
}

impl Storage for ArchiveRecord {
    fn path(&self) -> &str {
        &self.path
    }

    fn used_bytes(&self) -> u64 {
        self.size
    }

    fn free_bytes(&self) -> u64 {
        self.free_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_from_backend_json() {
        let json = r#"{
            "id": 620,
            "name": "Portal 2",
            "manifestPath": "/mnt/c/Games/Steam/steamapps/appmanifest_620.acf",
            "installPath": "/mnt/c/Games/Steam/steamapps/common/Portal 2",
            "size": 13012345678,
            "storeUrl": "https://store.steampowered.com/app/620",
            "imgUrl": "https://cdn.akamai.steamstatic.com/steam/apps/620/header.jpg"
        }"#;
        let game: GameRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(game.id, 620);
        assert_eq!(game.name, "Portal 2");
        assert_eq!(game.size, 13_012_345_678);
        assert!(game.install_path.ends_with("Portal 2"));
    }

    #[test]
    fn test_library_ignores_embedded_games() {
        let json = r#"{
            "id": 0,
            "path": "/mnt/c/Program Files/Steam",
            "installPath": "/mnt/c/Program Files/Steam/steamapps/common",
            "appsPath": "/mnt/c/Program Files/Steam/steamapps",
            "size": 838843492,
            "freeBytes": 13353078784,
            "games": [{"id": 1}]
        }"#;
        let library: LibraryRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(library.size, 838_843_492);
        assert_eq!(library.free_bytes, 13_353_078_784);
        assert_eq!(library.potential_size(), 838_843_492 + 13_353_078_784);
    }

    #[test]
    fn test_library_without_optional_paths() {
        let json = r#"{"id": 3, "path": "/games", "size": 1, "freeBytes": 2}"#;
        let library: LibraryRecord = serde_json::from_str(json).expect("deserialize");
        assert!(library.install_path.is_empty());
        assert!(library.apps_path.is_empty());
    }

    #[test]
    fn test_archive_requires_max_size() {
        let json = r#"{"id": 0, "path": "/archive", "size": 1, "freeBytes": 2}"#;
        assert!(serde_json::from_str::<ArchiveRecord>(json).is_err());

        let json = r#"{"id": 0, "path": "/archive", "size": 1, "freeBytes": 2, "maxSize": 10}"#;
        let archive: ArchiveRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(archive.max_size, 10);
    }

    #[test]
    fn test_negative_size_rejected() {
        let json = r#"{"id": 0, "path": "/games", "size": -1, "freeBytes": 2}"#;
        assert!(serde_json::from_str::<LibraryRecord>(json).is_err());
    }

    #[test]
    fn test_potential_size_saturates() {
        let library = LibraryRecord::new_for_test(0, "/games", u64::MAX, 10);
        assert_eq!(library.potential_size(), u64::MAX);
    }
}
