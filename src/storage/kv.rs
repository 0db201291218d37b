use anyhow::Result;
use log::{debug, warn};
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;

/// Scope of a key-value store, mirroring browser storage semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreScope {
    /// Survives restarts; backed by a SQLite file.
    Durable,
    /// Cleared when the process ends; backed by an in-memory database.
    Session,
}

/// Typed key-value wrapper over a single SQLite connection.
///
/// Every key is independently atomic; there is no transaction spanning
/// multiple keys. Reads treat missing or corrupt entries as absent, and
/// writes report failure instead of raising it.
pub struct KvStore {
    conn: Mutex<Connection>,
    scope: StoreScope,
}

impl KvStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        // Enable WAL mode
        conn.pragma_update(None, "journal_mode", &"WAL")?;
        conn.pragma_update(None, "synchronous", &"NORMAL")?;

        super::create_tables(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            scope: StoreScope::Durable,
        })
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::create_tables(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            scope: StoreScope::Session,
        })
    }

    pub fn scope(&self) -> StoreScope {
        self.scope
    }

    /// Reads and deserializes the value at `key`. A missing row, corrupt
    /// JSON, or an unavailable connection all read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let conn = self.conn.lock().ok()?;
        let raw: String = conn
            .query_row("SELECT value FROM kv_entries WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .ok()
            .flatten()?;

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(
                    "[{:?}] discarding unreadable entry at '{}': {}",
                    self.scope, key, err
                );
                None
            }
        }
    }

    /// Serializes and upserts `value` at `key`. Returns `false` when the
    /// write was rejected; callers keep their in-memory state authoritative
    /// for the rest of the session.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("[{:?}] cannot serialize '{}': {}", self.scope, key, err);
                return false;
            }
        };

        let Ok(conn) = self.conn.lock() else {
            return false;
        };
        let now = chrono::Utc::now().timestamp_millis();

        match conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            rusqlite::params![key, raw, now],
        ) {
            Ok(_) => true,
            Err(err) => {
                warn!("[{:?}] write at '{}' rejected: {}", self.scope, key, err);
                false
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Ok(conn) = self.conn.lock() {
            let _ = conn.execute("DELETE FROM kv_entries WHERE key = ?1", [key]);
        }
    }

    pub fn clear(&self) {
        if let Ok(conn) = self.conn.lock() {
            let _ = conn.execute("DELETE FROM kv_entries", []);
        }
    }
}
