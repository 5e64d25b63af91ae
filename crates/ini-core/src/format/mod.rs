//! INI text format: line grammar, parser and writer.
//!
//! # What does "format" mean here? (for beginners)
//!
//! This module only knows how to turn text into a nested map and back.  It
//! never opens files, so every rule of the grammar can be tested with plain
//! string literals.  The [`crate::store`] module layers file I/O on top.

use std::collections::HashMap;

pub mod grammar;
pub mod lines;
pub mod parser;
pub mod writer;

pub use grammar::{classify, LineKind};
pub use lines::split_lines;
pub use parser::{parse, ParseOutcome, ParseWarning};
pub use writer::{render, write_sections, LINE_SEPARATOR};

/// Name of the section that collects key/value lines appearing before any
/// `[section]` header.
pub const DEFAULT_SECTION: &str = "";

/// The key → value pairs of a single section.  Values are stored raw, exactly
/// as they appeared after the first `=`.
pub type Section = HashMap<String, String>;

/// Section name → [`Section`].  Iteration order is unspecified.
pub type Sections = HashMap<String, Section>;
