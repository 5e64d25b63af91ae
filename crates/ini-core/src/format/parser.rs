//! Single-pass INI parser.
//!
//! Folds the classified lines of a document into [`Sections`].  Lines that
//! match no production are reported as [`ParseWarning`]s instead of aborting
//! the parse, so one stray line never costs the rest of the file.

use thiserror::Error;
use tracing::warn;

use crate::format::grammar::{classify, LineKind};
use crate::format::lines::split_lines;
use crate::format::{Sections, DEFAULT_SECTION};

/// A recoverable problem found while parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseWarning {
    /// The line is not a comment, header, or `key=value` pair and was skipped.
    #[error("ignoring invalid line {line}: {content:?}")]
    InvalidLine {
        /// 1-based physical line number.
        line: usize,
        /// The line text with its terminator removed.
        content: String,
    },
}

impl ParseWarning {
    /// The 1-based line number the warning refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidLine { line, .. } => *line,
        }
    }
}

/// The result of parsing a document: the sections found plus any warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Section name → key → value.
    pub sections: Sections,
    /// Invalid lines that were skipped, in file order.
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// Total number of key/value pairs across all sections.
    pub fn entries(&self) -> usize {
        self.sections.values().map(|s| s.len()).sum()
    }

    /// Returns `true` if no line was skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Parses INI text into sections.
///
/// - Key/value lines before any header go to [`DEFAULT_SECTION`].
/// - A header on its own does not create a section; the first key/value line
///   after it does.
/// - A repeated key within a section overwrites the earlier value.
/// - Invalid lines are skipped, logged at `warn` and returned in
///   [`ParseOutcome::warnings`] with their physical line number.
///
/// # Examples
///
/// ```rust
/// use ini_core::parse;
///
/// let outcome = parse("[s]\nkey=a=b=c\n");
/// assert_eq!(outcome.sections["s"]["key"], "a=b=c");
/// assert!(outcome.is_clean());
/// ```
pub fn parse(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut current = DEFAULT_SECTION.to_string();

    for (idx, line) in split_lines(text).enumerate() {
        let line_number = idx + 1;

        match classify(line) {
            LineKind::Comment | LineKind::Blank => {}
            LineKind::Header(name) => current = name.into_owned(),
            LineKind::KeyValue { key, value } => {
                outcome
                    .sections
                    .entry(current.clone())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
            }
            LineKind::Invalid => {
                warn!("ignoring invalid line in config file (line {line_number})");
                outcome.warnings.push(ParseWarning::InvalidLine {
                    line: line_number,
                    content: line.to_string(),
                });
            }
        }
    }

    outcome
}
