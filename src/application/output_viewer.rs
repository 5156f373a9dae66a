// src/application/output_viewer.rs
use crate::domain::{DomainError, Output};

pub trait OutputRepository {
    /// Persist a new output, assigning its id and creation timestamp.
    fn create(&mut self, title: &str, html: &str) -> Result<Output, DomainError>;

    fn get_output(&mut self, id: &str) -> Result<Output, DomainError>;

    /// Most recent outputs, newest first, at most `limit` entries.
    fn list_recent(&mut self, limit: usize) -> Result<Vec<Output>, DomainError>;

    /// Delete an output by id, returning the number of rows removed.
    /// Deleting an unknown id is not an error; it removes zero rows.
    fn delete_output(&mut self, id: &str) -> Result<usize, DomainError>;
}

// Lets use cases borrow a repository (e.g. one living behind the HTTP
// state's mutex) instead of owning it.
impl<R: OutputRepository + ?Sized> OutputRepository for &mut R {
    fn create(&mut self, title: &str, html: &str) -> Result<Output, DomainError> {
        (**self).create(title, html)
    }

    fn get_output(&mut self, id: &str) -> Result<Output, DomainError> {
        (**self).get_output(id)
    }

    fn list_recent(&mut self, limit: usize) -> Result<Vec<Output>, DomainError> {
        (**self).list_recent(limit)
    }

    fn delete_output(&mut self, id: &str) -> Result<usize, DomainError> {
        (**self).delete_output(id)
    }
}

pub struct OutputViewer<R: OutputRepository> {
    repository: R,
}

impl<R: OutputRepository> OutputViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_output(&mut self, id: &str) -> Result<Output, DomainError> {
        self.repository.get_output(id)
    }
}
