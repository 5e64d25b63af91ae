//! Line splitting that accepts every common line terminator.
//!
//! [`str::lines`] handles `\n` and `\r\n` but leaves a lone `\r` (classic
//! Mac OS) inside the line.  Files written on any platform must load the same
//! way, so this iterator treats `\n`, `\r\n` and `\r` as terminators.  A
//! trailing terminator does not produce an extra empty line.

/// Iterator over the lines of a string with terminators stripped.
///
/// Created by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Splits `text` into lines, accepting `\n`, `\r\n` and `\r` terminators.
///
/// # Examples
///
/// ```rust
/// use ini_core::format::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\r\nb\rc\n").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                // "\r\n" is one terminator, not two.
                let skip = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[idx + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
