//! Client repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the four storage operations over the `clients` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `update_client` only replaces existing rows; a missing id is `NotFound`.
//! - `delete_client` is idempotent.
//! - `list_clients` returns rows in ascending id order.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::client::{ClientId, ClientRecord, NewClient};
use crate::validation::ClientValidationError;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CLIENT_SELECT_SQL: &str = "SELECT
    id,
    nombre,
    email,
    telefono,
    empresa
FROM clients";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for client persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ClientValidationError),
    Db(DbError),
    NotFound(ClientId),
    /// Connection was not bootstrapped through `open_db*`.
    SchemaNotReady { found: u32, expected: u32 },
    /// Store could not be opened; carries the open failure message.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "client not found: {id}"),
            Self::SchemaNotReady { found, expected } => write!(
                f,
                "client store schema version {found} does not match expected {expected}"
            ),
            Self::Unavailable(reason) => write!(f, "client store unavailable: {reason}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            // Display is transparent for wrapped errors; skip to their cause.
            Self::Validation(err) => err.source(),
            Self::Db(err) => err.source(),
            Self::NotFound(_) | Self::SchemaNotReady { .. } | Self::Unavailable(_) => None,
        }
    }
}

impl From<ClientValidationError> for RepoError {
    fn from(value: ClientValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage accessor for client records.
pub trait ClientRepository {
    /// Persists a new record and returns the storage-assigned id.
    fn create_client(&self, client: &NewClient) -> RepoResult<ClientId>;
    /// Returns every stored record; empty store yields an empty vec.
    fn list_clients(&self) -> RepoResult<Vec<ClientRecord>>;
    /// Replaces all fields of the record at `id`.
    fn update_client(&self, id: ClientId, client: &NewClient) -> RepoResult<()>;
    /// Removes the record at `id` if present.
    fn delete_client(&self, id: ClientId) -> RepoResult<()>;
}

/// SQLite-backed client repository borrowing an explicitly opened connection.
pub struct SqliteClientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteClientRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `SchemaNotReady` when the connection has not been migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let found = current_version(conn)?;
        let expected = latest_version();
        if found != expected {
            return Err(RepoError::SchemaNotReady { found, expected });
        }
        Ok(Self { conn })
    }
}

impl ClientRepository for SqliteClientRepository<'_> {
    fn create_client(&self, client: &NewClient) -> RepoResult<ClientId> {
        client.validate()?;

        self.conn.execute(
            "INSERT INTO clients (nombre, email, telefono, empresa)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                client.name.as_str(),
                client.email.as_str(),
                client.phone.as_str(),
                client.company.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_clients(&self) -> RepoResult<Vec<ClientRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut clients = Vec::new();

        while let Some(row) = rows.next()? {
            clients.push(parse_client_row(row)?);
        }

        Ok(clients)
    }

    fn update_client(&self, id: ClientId, client: &NewClient) -> RepoResult<()> {
        client.validate()?;

        let changed = self.conn.execute(
            "UPDATE clients
             SET
                nombre = ?1,
                email = ?2,
                telefono = ?3,
                empresa = ?4
             WHERE id = ?5;",
            params![
                client.name.as_str(),
                client.email.as_str(),
                client.phone.as_str(),
                client.company.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_client(&self, id: ClientId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM clients WHERE id = ?1;", [id])?;
        Ok(())
    }
}

/// Stand-in repository for a store that failed to open.
///
/// Every operation fails with `RepoError::Unavailable`, so controllers take
/// their usual degraded paths (empty listing, untouched form, nothing saved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableClientRepository {
    reason: String,
}

impl UnavailableClientRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepoError {
        RepoError::Unavailable(self.reason.clone())
    }
}

impl ClientRepository for UnavailableClientRepository {
    fn create_client(&self, _client: &NewClient) -> RepoResult<ClientId> {
        Err(self.error())
    }

    fn list_clients(&self) -> RepoResult<Vec<ClientRecord>> {
        Err(self.error())
    }

    fn update_client(&self, _id: ClientId, _client: &NewClient) -> RepoResult<()> {
        Err(self.error())
    }

    fn delete_client(&self, _id: ClientId) -> RepoResult<()> {
        Err(self.error())
    }
}

fn parse_client_row(row: &Row<'_>) -> RepoResult<ClientRecord> {
    Ok(ClientRecord {
        id: row.get("id")?,
        client: NewClient {
            name: row.get("nombre")?,
            email: row.get("email")?,
            phone: row.get("telefono")?,
            company: row.get("empresa")?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{ClientRepository, RepoError, UnavailableClientRepository};
    use std::error::Error;

    #[test]
    fn wrapped_sqlite_error_is_not_repeated_in_source_chain() {
        let err = RepoError::from(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.to_string(), rusqlite::Error::QueryReturnedNoRows.to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn unavailable_repository_fails_every_operation() {
        let repo = UnavailableClientRepository::new("disk gone");

        let err = repo.list_clients().unwrap_err();
        assert!(matches!(err, RepoError::Unavailable(ref reason) if reason == "disk gone"));
        assert!(err.to_string().contains("disk gone"));
        assert!(repo.delete_client(1).is_err());
    }
}
