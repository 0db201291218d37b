use anyhow::Result;
use rusqlite::Connection;

pub mod cache;
pub mod kv;

pub use cache::{CacheEnvelope, CachedFetch};
pub use kv::{KvStore, StoreScope};

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_entries (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}
