// src/application/mod.rs
pub mod output_deleter;
pub mod output_lister;
pub mod output_saver;
pub mod output_viewer;

pub use output_deleter::OutputDeleter;
pub use output_lister::OutputLister;
pub use output_saver::OutputSaver;
pub use output_viewer::{OutputRepository, OutputViewer};
