//! Durable preference storage: a SQLite key-value table under `~/.raydeck`.
//!
//! The panel stores its tiny preference set (theme mode, seed color) as
//! plain string pairs. [PrefStore] is the seam the theme controller sits on;
//! [SqlitePrefs] is the durable implementation, [MemoryPrefs] the in-process
//! one for tests and hostless embedding.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{RaydeckError, Result};

/// Basename of the preference DB (SQLite creates .db-wal and .db-shm alongside).
pub const RAYDECK_DB: &str = "raydeck.db";
/// App dir under the user's home, e.g. `~/.raydeck`.
pub const APP_DIR: &str = ".raydeck";

/// String key-value store for persisted preferences.
///
/// Reads and writes are synchronous and expected to be fast; callers treat
/// failures as soft (log and fall back to defaults), never fatal.
pub trait PrefStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences in a SQLite `prefs` table, WAL mode, upsert on write.
pub struct SqlitePrefs {
    conn: rusqlite::Connection,
}

impl SqlitePrefs {
    /// Opens the DB under `dir` (created if needed), enables WAL, ensures the table.
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = rusqlite::Connection::open(dir.join(RAYDECK_DB))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS prefs (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Opens the default store at `~/.raydeck/raydeck.db`.
    pub fn open() -> Result<Self> {
        Self::open_at(&default_dir()?)
    }
}

impl PrefStore for SqlitePrefs {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM prefs WHERE key = ?1")?;
        let mut rows = stmt.query(rusqlite::params![key])?;
        Ok(rows.next()?.map(|row| row.get::<_, String>(0)).transpose()?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = ?2",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }
}

/// `~/.raydeck`, or an error when no home directory is resolvable.
pub fn default_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(APP_DIR))
        .ok_or_else(|| RaydeckError::Prefs("no home directory".to_string()))
}

/// In-memory store for tests and environments without durable storage.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    entries: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SqlitePrefs::open_at(dir.path()).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_sqlite_upsert_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SqlitePrefs::open_at(dir.path()).unwrap();
        store.set("themeColor", "#6750A4").unwrap();
        store.set("themeColor", "#4CAF50").unwrap();
        assert_eq!(store.get("themeColor").unwrap(), Some("#4CAF50".to_string()));
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = SqlitePrefs::open_at(dir.path()).unwrap();
            store.set("theme", "auto").unwrap();
        }
        let store = SqlitePrefs::open_at(dir.path()).unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("auto".to_string()));
    }

    #[test]
    fn test_memory_prefs() {
        let mut store = MemoryPrefs::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }
}
