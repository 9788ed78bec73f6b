use std::collections::HashSet;

use rusqlite::params;

use super::db::Database;
use super::error::StoreError;
use super::models::{NewUser, UserRecord};

/// Durable CRUD access to user records plus unique-id allocation.
///
/// The store owns the durable copy exclusively; callers keep only a
/// disposable projection of `list()` results and rebuild it after every
/// mutation.
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All records, ordered by id ascending.
    pub fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                "SELECT id, username, display_name, phone, email, enabled, roles
                 FROM users ORDER BY id ASC",
            )
            .map_err(StoreError::Read)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    display_name: row.get(2)?,
                    phone: row.get(3)?,
                    email: row.get(4)?,
                    enabled: row.get(5)?,
                    roles: row.get(6)?,
                })
            })
            .map_err(StoreError::Read)?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row.map_err(StoreError::Read)?);
        }
        Ok(users)
    }

    /// Create a record with a freshly allocated id and return that id.
    ///
    /// Rejects empty required fields before touching storage. The insert is
    /// a single statement, so a failed create leaves no partial state.
    pub fn create(&self, new: &NewUser) -> Result<i64, StoreError> {
        new.validate()?;

        let id = self.next_free_id()?;
        self.db
            .connection()
            .execute(
                "INSERT INTO users (id, username, display_name, phone, email, enabled, roles)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id,
                    new.username,
                    new.display_name,
                    new.phone,
                    new.email,
                    new.enabled,
                    new.roles
                ],
            )
            .map_err(StoreError::Write)?;
        Ok(id)
    }

    /// Delete the record with the given id. Returns whether a record was
    /// actually removed; a missing id is a no-op, not an error.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let changed = self
            .db
            .connection()
            .execute("DELETE FROM users WHERE id = ?1", params![id])
            .map_err(StoreError::Write)?;
        Ok(changed > 0)
    }

    /// Delete several ids in one transaction. Returns how many records were
    /// removed; ids with no record are skipped.
    pub fn delete_many(&self, ids: &[i64]) -> Result<usize, StoreError> {
        let conn = self.db.connection();
        let tx = conn.unchecked_transaction().map_err(StoreError::Write)?;
        let mut removed = 0;
        for &id in ids {
            removed += tx
                .execute("DELETE FROM users WHERE id = ?1", params![id])
                .map_err(StoreError::Write)?;
        }
        tx.commit().map_err(StoreError::Write)?;
        Ok(removed)
    }

    /// Smallest positive integer not currently used as an id.
    pub fn next_free_id(&self) -> Result<i64, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT id FROM users")
            .map_err(StoreError::Read)?;
        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))
            .map_err(StoreError::Read)?;

        let mut used = HashSet::new();
        for id in ids {
            used.insert(id.map_err(StoreError::Read)?);
        }

        let mut candidate = 1;
        while used.contains(&candidate) {
            candidate += 1;
        }
        Ok(candidate)
    }
}
