// src/application/output_deleter.rs
use crate::application::OutputRepository;
use crate::domain::DomainError;

pub struct OutputDeleter<R: OutputRepository> {
    repository: R,
}

impl<R: OutputRepository> OutputDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete an output and return the number of rows removed.
    ///
    /// Deletes are idempotent: an unknown id succeeds and removes zero rows.
    pub fn delete_output(&mut self, id: &str) -> Result<usize, DomainError> {
        self.repository.delete_output(id)
    }
}
