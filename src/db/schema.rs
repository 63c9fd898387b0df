use rusqlite::Connection;

use crate::error::KinResult;

/// Initialize the database schema. Creates all tables if they don't exist.
///
/// `father_id`, `mother_id` and `spouse_id` carry no foreign keys: they are
/// weak references and may outlive the row they point at.
pub fn initialize(conn: &Connection) -> KinResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS people (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            gender TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
            birth_date TEXT,
            death_date TEXT,
            photo TEXT,
            biography TEXT,
            father_id TEXT,
            mother_id TEXT,
            spouse_id TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_people_father ON people(father_id);
        CREATE INDEX IF NOT EXISTS idx_people_mother ON people(mother_id);
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
