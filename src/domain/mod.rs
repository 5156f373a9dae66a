// src/domain/mod.rs
pub mod error;
pub mod output;

pub use error::DomainError;
pub use output::{DocumentSpec, Output, Tab};
