// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::cli::args::{Args, Command};
use crate::constants::{DEFAULT_DB_FILE, LIST_LIMIT};
use crate::domain::DocumentSpec;
use anyhow::{Context, Result};
use application::{OutputDeleter, OutputLister, OutputViewer};
use infrastructure::SqliteOutputRepository;
use ports::{AppState, TabDocumentBuilder};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting tabforge with arguments");

    match args.command {
        Command::Serve { bind } => {
            let db_path = resolve_db_path(args.db)?;
            let repository = SqliteOutputRepository::new(&db_path)?;
            let state = AppState::new(repository);

            info!(?db_path, %bind, "Serving outputs API");
            tokio::runtime::Runtime::new()
                .context("Failed to start async runtime")?
                .block_on(ports::serve(state, &bind))
        }

        Command::Build { spec, output } => {
            let text = fs::read_to_string(&spec)
                .with_context(|| format!("Failed to read spec file: {}", spec.display()))?;
            let doc: DocumentSpec = serde_json::from_str(&text)
                .with_context(|| format!("Invalid document spec: {}", spec.display()))?;

            let html = TabDocumentBuilder::new().render(&doc.title, &doc.tabs);
            match output {
                Some(path) => {
                    fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(?path, "Wrote generated document");
                }
                None => println!("{html}"),
            }
            Ok(())
        }

        Command::List => {
            let repository = SqliteOutputRepository::new(resolve_db_path(args.db)?)?;
            let mut lister = OutputLister::new(repository);

            for output in lister.list_recent(LIST_LIMIT)? {
                println!(
                    "{}  {}  {}",
                    output.id,
                    output.created_at.format("%Y-%m-%d %H:%M:%S"),
                    output.title
                );
            }
            Ok(())
        }

        Command::Show { id } => {
            let repository = SqliteOutputRepository::new(resolve_db_path(args.db)?)?;
            let mut viewer = OutputViewer::new(repository);

            let output = viewer.view_output(&id)?;
            println!("{}", output.html);
            Ok(())
        }

        Command::Delete { id } => {
            let repository = SqliteOutputRepository::new(resolve_db_path(args.db)?)?;
            let mut deleter = OutputDeleter::new(repository);

            let deleted = deleter.delete_output(&id)?;
            println!("Deleted {deleted} output(s)");
            Ok(())
        }
    }
}

/// Explicit `--db` path if given, otherwise a per-user location under the
/// platform data directory.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        debug!(?path, "Using provided database path");
        return Ok(path);
    }

    let data_dir = dirs::data_dir().context("Could not find platform data directory")?;
    Ok(data_dir.join("tabforge").join(DEFAULT_DB_FILE))
}
