// src/domain/output.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted generated HTML document plus metadata.
///
/// The wire shape `{ id, title, html, createdAt }` is stable; `id` and
/// `created_at` are assigned at creation and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub id: String,
    pub title: String,
    pub html: String,
    pub created_at: DateTime<Utc>,
}

/// Builder input: a document title plus an ordered tab list.
///
/// This is the shape the CLI `build` subcommand reads from its JSON spec file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSpec {
    pub title: String,
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

/// A transient (title, HTML-content) pair used only as Builder input.
///
/// Tab content is author-supplied raw HTML and is inserted into the generated
/// document verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub title: String,
    pub content: String,
}
