// src/infrastructure/mod.rs
pub mod sqlite;

pub use sqlite::SqliteOutputRepository;
