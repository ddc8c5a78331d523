use portal_aluno::{
    FileStorage, LocalStorage, MemoryStorage, StorageError,
    storage::{TOKEN_KEY, USER_KEY},
};
use std::fs;

#[cfg(test)]
mod memory_tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStorage::new();
        store.set_item(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        store.remove_item(TOKEN_KEY).unwrap();
        assert_eq!(store.get_item(TOKEN_KEY).unwrap(), None);
        // Removing again is fine.
        store.remove_item(TOKEN_KEY).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_seeded_entries() {
        let store = MemoryStorage::with_entries([(TOKEN_KEY, "t"), (USER_KEY, "{}")]);
        assert_eq!(store.len(), 2);
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileStorage::new(&path);
        store.set_item(TOKEN_KEY, "persisted").unwrap();
        store.set_item(USER_KEY, r#"{"_id":"u1"}"#).unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item(TOKEN_KEY).unwrap().as_deref(), Some("persisted"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("absent.json"));

        assert_eq!(store.get_item(TOKEN_KEY).unwrap(), None);
        store.remove_item(TOKEN_KEY).unwrap();
        assert!(!dir.path().join("absent.json").exists());
    }

    #[test]
    fn test_remove_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileStorage::new(&path);
        store.set_item(TOKEN_KEY, "t").unwrap();
        store.set_item(USER_KEY, "u").unwrap();

        store.remove_item(TOKEN_KEY).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains(TOKEN_KEY));
        assert!(raw.contains(USER_KEY));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStorage::new(&path).get_item(TOKEN_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
