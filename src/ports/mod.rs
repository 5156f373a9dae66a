// src/ports/mod.rs
pub mod html;
pub mod http;

pub use html::TabDocumentBuilder;
pub use http::{router, serve, AppState};
