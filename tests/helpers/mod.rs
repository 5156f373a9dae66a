use anyhow::{Context, Result};
use std::path::PathBuf;
use tabforge::infrastructure::SqliteOutputRepository;
use tempfile::TempDir;

/// Test fixture for working with a temporary output database
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let db_path = temp_dir.path().join("outputs.db");

        Ok(Self {
            _temp_dir: temp_dir,
            db_path,
        })
    }

    /// Open a repository on this store's database file
    pub fn open_repository(&self) -> Result<SqliteOutputRepository> {
        SqliteOutputRepository::new(&self.db_path)
    }
}
