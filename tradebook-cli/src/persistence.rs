//! Book persistence — JSON save/load across sessions.

use std::path::{Path, PathBuf};

use tradebook_core::PositionBook;

/// Default state file: `<config dir>/tradebook/book.json`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tradebook")
        .join("book.json")
}

/// Load the book from disk. Returns an empty book if the file is missing,
/// corrupt, or violates the id-uniqueness invariant.
pub fn load(path: &Path) -> PositionBook {
    let Ok(content) = std::fs::read_to_string(path) else {
        return PositionBook::new();
    };
    match serde_json::from_str::<PositionBook>(&content) {
        Ok(book) if book.validate().is_ok() => book,
        _ => PositionBook::new(),
    }
}

/// Save the book to disk. Creates parent directories if needed.
pub fn save(path: &Path, book: &PositionBook) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(book)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("tradebook_persist_test");
        let path = dir.join("book.json");

        let mut book = PositionBook::new();
        let first = book.create();
        book.find_mut(first).unwrap().market = "BTCUSD".into();
        book.create();
        book.select(first);

        save(&path, &book).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.active_id(), first);
        assert_eq!(loaded.by_id(first).unwrap().market, "BTCUSD");

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_empty_book() {
        let loaded = load(Path::new("/nonexistent/path/book.json"));
        assert!(loaded.is_empty());
        assert_eq!(loaded.active_id(), 0);
    }

    #[test]
    fn corrupt_file_returns_empty_book() {
        let dir = std::env::temp_dir().join("tradebook_persist_corrupt");
        let path = dir.join("book.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert!(loaded.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn duplicate_ids_are_discarded() {
        let dir = std::env::temp_dir().join("tradebook_persist_dupes");
        let path = dir.join("book.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, r#"{"items": [{"id": 2}, {"id": 2}], "active_id": 2}"#).unwrap();

        let loaded = load(&path);
        assert!(loaded.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
