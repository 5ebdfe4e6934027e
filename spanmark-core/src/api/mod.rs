//! Public API for the annotation pipeline

pub mod annotator;
pub mod config;
pub mod error;
pub mod language;

pub use annotator::{Annotation, Annotator};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use language::Language;
