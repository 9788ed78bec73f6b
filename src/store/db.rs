use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

/// Handle to the local SQLite database holding user records.
pub struct Database {
    conn: Connection,
}

const CURRENT_SCHEMA_VERSION: i32 = 1;

impl Database {
    /// Open the database at the default location.
    pub fn new() -> Result<Self> {
        let db_path = crate::config::db_path()?;
        Self::open(db_path)
    }

    /// Open (or create) a database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", ())?;
        Self::init_schema(&conn)?;
        Ok(Database { conn })
    }

    pub(super) fn connection(&self) -> &Connection {
        &self.conn
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER NOT NULL,
                updated TEXT NOT NULL,
                PRIMARY KEY (version)
            )",
            (),
        )?;

        let version = match conn.query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        ) {
            Ok(v) => v,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                // Fresh database, start from version 0
                conn.execute(
                    "INSERT INTO schema_version (version, updated) VALUES (0, datetime('now'))",
                    [],
                )?;
                0
            }
            Err(e) => return Err(e.into()),
        };

        if version < CURRENT_SCHEMA_VERSION {
            Self::migrate_schema(conn, version)?;
        }

        Ok(())
    }

    fn migrate_schema(conn: &Connection, from_version: i32) -> Result<()> {
        match from_version {
            0 => {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS users (
                        id INTEGER PRIMARY KEY,
                        username TEXT NOT NULL,
                        display_name TEXT NOT NULL,
                        phone TEXT NOT NULL,
                        email TEXT NOT NULL,
                        enabled INTEGER NOT NULL,
                        roles TEXT NOT NULL
                    )",
                    (),
                )?;

                conn.execute(
                    "INSERT INTO schema_version (version, updated) VALUES (1, datetime('now'))",
                    [],
                )?;
            }
            // Future migrations can be added here
            _ => {}
        }
        Ok(())
    }
}
