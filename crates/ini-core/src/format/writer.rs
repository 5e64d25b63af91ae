//! Serializer for [`Sections`].
//!
//! Output layout:
//! ```text
//! [section]
//! key=value
//! [next]
//! other=value
//! ```
//! No blank lines between sections.  Section and key order follow the map's
//! iteration order, which is unspecified.
//!
//! The format has no escaping.  A name, key or value that the grammar would
//! read back differently (a key starting with `#`, a value holding a line
//! break, …) is still written as-is, with a `warn!` naming it; the entry is
//! lost or altered on the next load.

use std::io::{self, Write};

use tracing::warn;

use crate::format::grammar::COMMENT_PREFIXES;
use crate::format::Sections;

const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Line separator emitted by the writer: the platform's native one.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Line separator emitted by the writer: the platform's native one.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Writes `sections` as INI text to `writer`.
///
/// Every section is written with its header, including the default (`""`)
/// section, which comes out as `[]`.  A section with no entries is written as
/// a bare header.
///
/// The caller owns flushing; buffered writers should be flushed so that late
/// write errors are observed.
///
/// Section names, keys and values that cannot be read back unchanged (see
/// [`is_readable_section_name`], [`is_readable_key`], [`is_readable_value`])
/// are written anyway and logged at `warn`.  They will not survive a reload.
///
/// # Errors
///
/// Returns the first I/O error reported by `writer`.
pub fn write_sections<W: Write>(sections: &Sections, writer: &mut W) -> io::Result<()> {
    for (name, entries) in sections {
        if !is_readable_section_name(name) {
            warn!("section name {name:?} will not read back as written");
        }
        write!(writer, "[{name}]{LINE_SEPARATOR}")?;
        for (key, value) in entries {
            if !is_readable_key(key) {
                warn!("key {key:?} in section {name:?} will not read back as written");
            } else if !is_readable_value(value) {
                warn!("value of {key:?} in section {name:?} will not read back as written");
            }
            write!(writer, "{key}={value}{LINE_SEPARATOR}")?;
        }
    }
    Ok(())
}

/// Returns `true` if `[name]` parses back to a header named `name`.
///
/// Every bracket in a header line is stripped, and a line break would split
/// the header.
pub fn is_readable_section_name(name: &str) -> bool {
    !name.contains(['[', ']']) && !name.contains(LINE_BREAKS)
}

/// Returns `true` if `key=…` parses back to a pair with this exact key.
///
/// Rejects keys that would make the line a comment (`#`, `;` first), move the
/// `=` split (`=`), risk a header match (`[`, `]`) or split the line.
pub fn is_readable_key(key: &str) -> bool {
    !key.starts_with(COMMENT_PREFIXES)
        && !key.contains(['=', '[', ']'])
        && !key.contains(LINE_BREAKS)
}

/// Returns `true` if the value survives a reload.  Only line breaks break it.
pub fn is_readable_value(value: &str) -> bool {
    !value.contains(LINE_BREAKS)
}

/// Renders `sections` to a `String` in the same layout as [`write_sections`].
///
/// # Examples
///
/// ```rust
/// use ini_core::{render, Sections, LINE_SEPARATOR};
///
/// let mut sections = Sections::new();
/// sections
///     .entry("s".to_string())
///     .or_default()
///     .insert("k".to_string(), "v".to_string());
///
/// assert_eq!(render(&sections), format!("[s]{LINE_SEPARATOR}k=v{LINE_SEPARATOR}"));
/// ```
pub fn render(sections: &Sections) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    let _ = write_sections(sections, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
