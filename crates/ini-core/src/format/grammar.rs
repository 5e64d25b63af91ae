//! Classification of a single INI line.
//!
//! Rules are checked in order, and the first match wins:
//!
//! ```text
//! #...  or  ;...      comment (first character only)
//! <empty / spaces>    blank
//! [ ... ]             header  (every '[' and ']' in the line is removed)
//! key=value           key/value, split on the first '='
//! anything else       invalid
//! ```

use std::borrow::Cow;

/// Characters that start a comment when they are the first character of a line.
pub(crate) const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// Result of classifying one line of INI text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#` or `;` comment.  Skipped without affecting the current section.
    Comment,
    /// Empty or whitespace-only line.
    Blank,
    /// `[name]` header.  The name has every bracket character stripped.
    Header(Cow<'a, str>),
    /// `key=value` pair.  Neither side is trimmed.
    KeyValue { key: &'a str, value: &'a str },
    /// A line matching none of the productions above.
    Invalid,
}

/// Classifies `line`, which must already have its terminator removed.
///
/// # Examples
///
/// ```rust
/// use ini_core::format::{classify, LineKind};
///
/// assert_eq!(classify("; note"), LineKind::Comment);
/// assert_eq!(
///     classify("key=a=b"),
///     LineKind::KeyValue { key: "key", value: "a=b" }
/// );
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(COMMENT_PREFIXES) {
        return LineKind::Comment;
    }

    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if line.starts_with('[') && line.ends_with(']') {
        return LineKind::Header(header_name(line));
    }

    match line.split_once('=') {
        Some((key, value)) => LineKind::KeyValue { key, value },
        None => LineKind::Invalid,
    }
}

/// Removes every `[` and `]` from a header line, not just the delimiters.
///
/// Borrows when the inner text holds no further brackets, which is the
/// common case.
fn header_name(line: &str) -> Cow<'_, str> {
    let inner = &line[1..line.len() - 1];
    if inner.contains(['[', ']']) {
        Cow::Owned(inner.replace(['[', ']'], ""))
    } else {
        Cow::Borrowed(inner)
    }
}
