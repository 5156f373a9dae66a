// src/util/testing.rs

use anyhow::Result;
use chrono::Utc;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::OutputRepository;
use crate::domain::{DomainError, Output};

/// Shared in-memory mock repository for testing use cases that depend on
/// OutputRepository.
///
/// Records are kept in insertion order; `list_recent` returns them newest
/// first, matching the SQLite implementation. Ids for records created through
/// `create` are sequential, so tests can assert on ordering without caring
/// about UUIDs.
///
/// # Examples
///
/// ```
/// use tabforge::util::testing::MockOutputRepository;
/// use tabforge::application::OutputRepository;
///
/// let mut mock = MockOutputRepository::builder().build();
/// let created = mock.create("Doc", "<p>hi</p>").unwrap();
/// assert_eq!(mock.get_output(&created.id).unwrap().title, "Doc");
/// ```
pub struct MockOutputRepository {
    outputs: Vec<Output>,
    next_id: u64,
    fail_storage: bool,
}

impl MockOutputRepository {
    pub fn builder() -> MockOutputRepositoryBuilder {
        MockOutputRepositoryBuilder::new()
    }
}

impl OutputRepository for MockOutputRepository {
    fn create(&mut self, title: &str, html: &str) -> Result<Output, DomainError> {
        if self.fail_storage {
            return Err(DomainError::StorageError("mock storage failure".to_string()));
        }
        let output = Output {
            id: format!("mock-{}", self.next_id),
            title: title.to_string(),
            html: html.to_string(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.outputs.push(output.clone());
        Ok(output)
    }

    fn get_output(&mut self, id: &str) -> Result<Output, DomainError> {
        self.outputs
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| DomainError::OutputNotFound(id.to_string()))
    }

    fn list_recent(&mut self, limit: usize) -> Result<Vec<Output>, DomainError> {
        Ok(self.outputs.iter().rev().take(limit).cloned().collect())
    }

    fn delete_output(&mut self, id: &str) -> Result<usize, DomainError> {
        let before = self.outputs.len();
        self.outputs.retain(|o| o.id != id);
        Ok(before - self.outputs.len())
    }
}

/// Builder for MockOutputRepository
///
/// Provides a fluent interface for seeding records and configuring failures.
pub struct MockOutputRepositoryBuilder {
    outputs: Vec<Output>,
    fail_storage: bool,
}

impl MockOutputRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            outputs: vec![],
            fail_storage: false,
        }
    }

    /// Seed a stored output; later seeds count as more recent.
    pub fn with_output(mut self, output: Output) -> Self {
        self.outputs.push(output);
        self
    }

    /// Make every create call fail with a StorageError.
    pub fn with_storage_failure(mut self) -> Self {
        self.fail_storage = true;
        self
    }

    pub fn build(self) -> MockOutputRepository {
        MockOutputRepository {
            next_id: self.outputs.len() as u64 + 1,
            outputs: self.outputs,
            fail_storage: self.fail_storage,
        }
    }
}

impl Default for MockOutputRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience constructor for test Output records.
pub fn sample_output(id: &str, title: &str, html: &str) -> Output {
    Output {
        id: id.to_string(),
        title: title.to_string(),
        html: html.to_string(),
        created_at: Utc::now(),
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "tower", "mio", "tokio_util"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
