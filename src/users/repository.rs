use crate::error::UserError;
use rusqlite::{ffi, params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Mutex;

/// Persists user records. Knows nothing about validation.
///
/// Usernames are unique: saving a taken one fails with
/// `UserError::DuplicateUsername` and leaves the store unchanged.
pub trait UserRepository {
    fn save_user(&self, username: &str, email: &str, password: &str) -> Result<(), UserError>;
}

/// A stored user. The password only ever exists here as a hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl UserRecord {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        UserRecord {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
        }
    }
}

/// Hex-encoded SHA-256 of the password.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

// =============================================================================
// In-memory storage
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<UserRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save_user(&self, username: &str, email: &str, password: &str) -> Result<(), UserError> {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if records.iter().any(|record| record.username == username) {
            return Err(UserError::duplicate_username(username));
        }
        records.push(UserRecord::new(username, email, password));
        tracing::debug!(username, total = records.len(), "user saved in memory");
        Ok(())
    }
}

// =============================================================================
// SQLite storage
// =============================================================================

pub struct SqliteUserRepository {
    conn: Connection,
}

impl SqliteUserRepository {
    pub fn open(path: &Path) -> Result<Self, UserError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, UserError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, UserError> {
        create_schema(&conn)?;
        Ok(SqliteUserRepository { conn })
    }

    pub fn count(&self) -> Result<usize, UserError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, UserError> {
        let record = self
            .conn
            .query_row(
                "SELECT username, email, password_hash FROM users
                 WHERE username = ?1 ORDER BY id LIMIT 1",
                params![username],
                |row| {
                    Ok(UserRecord {
                        username: row.get(0)?,
                        email: row.get(1)?,
                        password_hash: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}

impl UserRepository for SqliteUserRepository {
    fn save_user(&self, username: &str, email: &str, password: &str) -> Result<(), UserError> {
        let record = UserRecord::new(username, email, password);
        let inserted = self.conn.execute(
            "INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)",
            params![record.username, record.email, record.password_hash],
        );
        match inserted {
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                return Err(UserError::duplicate_username(username));
            }
            other => other?,
        };
        tracing::debug!(username, "user saved to sqlite");
        Ok(())
    }
}

/// Create database schema. The unique index also covers files created before
/// usernames were unique.
pub fn create_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS users_username ON users (username);",
    )?;
    Ok(())
}
