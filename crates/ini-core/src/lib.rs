//! # ini-core
//!
//! Reads and writes INI-style configuration files: plain UTF-8 text split
//! into `[section]` headers followed by `key=value` lines.
//!
//! The crate has no dependencies on anything beyond the standard library's
//! file APIs, `thiserror` for error types and `tracing` for diagnostics.
//!
//! # Architecture overview (for beginners)
//!
//! An INI file looks like this:
//!
//! ```text
//! [server]
//! host=localhost
//! port=8080
//! ; a comment
//! [client]
//! retries=3
//! ```
//!
//! The crate is split in two layers:
//!
//! - **`format`** – The text grammar.  Every line is classified on its own
//!   (comment, header, key/value, invalid) and the parser folds the
//!   classified lines into a map of section name → key → value.  The writer
//!   does the reverse.  Nothing in this layer touches the filesystem.
//!
//! - **`store`** – [`ConfigStore`], which binds the in-memory map to a file
//!   path and provides `load` / `save` plus convenience accessors.
//!
//! # Example
//!
//! ```rust
//! use ini_core::ConfigStore;
//!
//! let (store, report) = ConfigStore::from_text("app.ini", "[server]\nport=8080\n");
//! assert!(report.is_clean());
//! assert_eq!(store.get("server", "port"), Some("8080"));
//! ```

pub mod format;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `ini_core::ConfigStore` instead of `ini_core::store::config_store::ConfigStore`.
pub use format::parser::{parse, ParseOutcome, ParseWarning};
pub use format::writer::{render, write_sections, LINE_SEPARATOR};
pub use format::{Section, Sections, DEFAULT_SECTION};
pub use store::config_store::{ConfigStore, LoadReport};
pub use store::error::{LoadError, SaveError};
