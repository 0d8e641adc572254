use std::path::Path;

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use super::traits::Storage;
use crate::types::{Contact, ContactDetails, ContactId, Field};

#[derive(Clone)]
pub struct SqliteStorage {
    path: String,
}

fn map_contact_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: ContactId::new(row.get(0)?),
        details: ContactDetails {
            name: row.get(1)?,
            address: row.get(2)?,
            phone: row.get(3)?,
            email: row.get(4)?,
        },
    })
}

/// One fixed statement per editable column; the column name is never
/// assembled at runtime.
fn update_sql(field: Field) -> &'static str {
    match field {
        Field::Name => "UPDATE contacts SET name = ?1 WHERE contact_id = ?2",
        Field::Address => "UPDATE contacts SET address = ?1 WHERE contact_id = ?2",
        Field::Phone => "UPDATE contacts SET phone = ?1 WHERE contact_id = ?2",
        Field::Email => "UPDATE contacts SET email = ?1 WHERE contact_id = ?2",
    }
}

impl SqliteStorage {
    /// Build a store that targets the provided SQLite database path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    /// Remove the backing database file to force a clean start.
    pub fn reset_all(&self) -> Result<()> {
        if !Path::new(&self.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)?;
        Ok(())
    }

    /// Create the database file and schema if they do not exist yet.
    pub fn init(&self) -> Result<()> {
        self.with_conn(|_conn| Ok(()))?;
        Ok(())
    }

    /// Open a connection, ensure the schema, and run the supplied closure.
    fn with_conn<F, T>(&self, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;
        Self::migrate(&conn)?;
        f(&conn)
    }

    fn migrate(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                contact_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                phone TEXT NOT NULL,
                email TEXT NOT NULL
            );
            "#,
        )
    }
}

impl Storage for SqliteStorage {
    fn insert_contact(&self, details: &ContactDetails) -> Result<ContactId> {
        let id = self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO contacts (name, address, phone, email) VALUES (?1, ?2, ?3, ?4)",
                params![details.name, details.address, details.phone, details.email],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        Ok(ContactId::new(id))
    }

    fn update_field(&self, id: ContactId, field: Field, value: &str) -> Result<bool> {
        let rows =
            self.with_conn(|conn| conn.execute(update_sql(field), params![value, id.as_i64()]))?;
        Ok(rows > 0)
    }

    fn delete_contact(&self, id: ContactId) -> Result<bool> {
        let rows = self.with_conn(|conn| {
            conn.execute(
                "DELETE FROM contacts WHERE contact_id = ?1",
                params![id.as_i64()],
            )
        })?;
        Ok(rows > 0)
    }

    fn contact_exists(&self, id: ContactId) -> Result<bool> {
        let hit: Option<i64> = self.with_conn(|conn| {
            conn.query_row(
                "SELECT 1 FROM contacts WHERE contact_id = ?1",
                params![id.as_i64()],
                |row| row.get(0),
            )
            .optional()
        })?;
        Ok(hit.is_some())
    }

    fn find_by_name(&self, pattern: &str) -> Result<Vec<Contact>> {
        let rows = self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT contact_id, name, address, phone, email FROM contacts \
                 WHERE name LIKE '%' || ?1 || '%'",
            )?;
            let result = stmt
                .query_map(params![pattern], map_contact_row)?
                .collect::<rusqlite::Result<Vec<_>>>();
            result
        })?;
        Ok(rows)
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let names = self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT name FROM contacts")?;
            let result = stmt
                .query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<_>>>();
            result
        })?;
        Ok(names)
    }
}
