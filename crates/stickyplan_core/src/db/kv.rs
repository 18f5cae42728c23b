//! String key-value access over the `kv_store` table.

use super::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads the value stored under `key`, if any.
pub fn kv_get(conn: &Connection, key: &str) -> DbResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1;",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Inserts or replaces the value stored under `key`.
pub fn kv_set(conn: &Connection, key: &str, value: &str) -> DbResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, strftime('%s', 'now') * 1000)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at;",
        params![key, value],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{kv_get, kv_set};
    use crate::db::open_db_in_memory;

    #[test]
    fn set_get_and_overwrite() {
        let conn = open_db_in_memory().unwrap();
        assert_eq!(kv_get(&conn, "k").unwrap(), None);

        kv_set(&conn, "k", "one").unwrap();
        kv_set(&conn, "k", "two").unwrap();
        assert_eq!(kv_get(&conn, "k").unwrap().as_deref(), Some("two"));
        assert_eq!(kv_get(&conn, "other").unwrap(), None);
    }
}
