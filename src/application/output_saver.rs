// src/application/output_saver.rs
use crate::application::OutputRepository;
use crate::domain::{DomainError, Output};
use crate::util::sanitize::strip_script_blocks;
use crate::util::validate::require_non_empty_string;
use tracing::debug;

/// Validates and sanitizes incoming documents before persisting them.
///
/// Validation runs on the raw input; sanitization runs afterwards, so a body
/// that is nothing but a script block is accepted and stored empty. That
/// mirrors the create contract: "html" must be present and non-empty as
/// submitted, and what gets stored is the post-sanitization text.
pub struct OutputSaver<R: OutputRepository> {
    repository: R,
}

impl<R: OutputRepository> OutputSaver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn save(
        &mut self,
        title: Option<&str>,
        html: Option<&str>,
    ) -> Result<Output, DomainError> {
        let title = require_non_empty_string(title, "title")?;
        let html_raw = require_non_empty_string(html, "html")?;
        let html = strip_script_blocks(&html_raw);

        debug!(title = %title, raw_len = html_raw.len(), stored_len = html.len(), "Saving output");
        self.repository.create(&title, &html)
    }
}
