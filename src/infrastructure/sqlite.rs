// src/infrastructure/sqlite.rs
use crate::application::OutputRepository;
use crate::domain::{DomainError, Output};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, title, html, created_at";

pub struct SqliteOutputRepository {
    conn: Connection,
}

impl SqliteOutputRepository {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = PathBuf::from(db_path.as_ref());
        debug!(?path, "Creating new SqliteOutputRepository");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open output database: {}", path.display()))?;
        Self::init_schema(&conn)?;

        info!(?path, "Opened output database");
        Ok(Self { conn })
    }

    /// In-memory database, used by tests and throwaway sessions.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::init_schema(&conn)?;
        Ok(Self { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS outputs (
                id         TEXT PRIMARY KEY,
                title      TEXT NOT NULL,
                html       TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_outputs_created_at ON outputs(created_at);",
        )
        .context("Failed to initialize outputs schema")
    }

    fn row_to_output(row: &rusqlite::Row<'_>) -> rusqlite::Result<Output> {
        let created_at: String = row.get(3)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

        Ok(Output {
            id: row.get(0)?,
            title: row.get(1)?,
            html: row.get(2)?,
            created_at,
        })
    }
}

impl OutputRepository for SqliteOutputRepository {
    #[instrument(level = "debug", skip(self, html))]
    fn create(&mut self, title: &str, html: &str) -> Result<Output, DomainError> {
        // Truncate to microseconds so the returned record equals what a later
        // read of the stored row yields.
        let now = Utc::now();
        let now = now
            .with_nanosecond(now.nanosecond() / 1000 * 1000)
            .unwrap_or(now);

        let output = Output {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            html: html.to_string(),
            created_at: now,
        };

        // Fixed-width timestamps keep lexicographic order chronological.
        let created_at = output
            .created_at
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        self.conn
            .execute(
                "INSERT INTO outputs (id, title, html, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![output.id, output.title, output.html, created_at],
            )
            .map_err(|e| DomainError::StorageError(format!("Failed to insert output: {e}")))?;

        info!(id = %output.id, title = %output.title, "Stored output");
        Ok(output)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_output(&mut self, id: &str) -> Result<Output, DomainError> {
        self.conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM outputs WHERE id = ?1"),
                params![id],
                Self::row_to_output,
            )
            .optional()
            .map_err(|e| DomainError::StorageError(format!("Failed to read output: {e}")))?
            .ok_or_else(|| DomainError::OutputNotFound(id.to_string()))
    }

    #[instrument(level = "debug", skip(self))]
    fn list_recent(&mut self, limit: usize) -> Result<Vec<Output>, DomainError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM outputs
                 ORDER BY created_at DESC, rowid DESC LIMIT ?1"
            ))
            .map_err(|e| DomainError::StorageError(format!("Failed to prepare listing: {e}")))?;

        let rows = stmt
            .query_map(params![limit as i64], Self::row_to_output)
            .map_err(|e| DomainError::StorageError(format!("Failed to list outputs: {e}")))?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| DomainError::StorageError(format!("Failed to read listing row: {e}")))
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_output(&mut self, id: &str) -> Result<usize, DomainError> {
        // No prior existence check: deleting an unknown id removes zero rows
        // and is still a success.
        let deleted = self
            .conn
            .execute("DELETE FROM outputs WHERE id = ?1", params![id])
            .map_err(|e| DomainError::StorageError(format!("Failed to delete output: {e}")))?;

        info!(id, rows_deleted = deleted, "Deleted output");
        Ok(deleted)
    }
}
