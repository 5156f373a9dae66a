// src/application/output_lister.rs
use crate::application::OutputRepository;
use crate::domain::{DomainError, Output};

pub struct OutputLister<R: OutputRepository> {
    repository: R,
}

impl<R: OutputRepository> OutputLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List the most recent outputs, newest first.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of entries to return
    pub fn list_recent(&mut self, limit: usize) -> Result<Vec<Output>, DomainError> {
        self.repository.list_recent(limit)
    }
}
