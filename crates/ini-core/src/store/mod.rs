//! File-backed storage of parsed INI sections.
//!
//! The `config_store` sub-module binds a [`crate::Sections`] map to a path
//! on disk and handles:
//!
//! - Reading and parsing the file, replacing the in-memory sections.
//! - Writing the sections back when the caller asks for it.
//! - Reporting I/O and encoding failures as typed errors (see `error`).

pub mod config_store;
pub mod error;

pub use config_store::{ConfigStore, LoadReport};
pub use error::{LoadError, SaveError};
