//! File-backed INI section store.
//!
//! [`ConfigStore`] owns the parsed sections and the path of the file they
//! belong to.  `load` replaces the sections with the file's content, `save`
//! writes them back, and the accessors in between let callers read and
//! mutate individual values.
//!
//! # Load failure policy
//!
//! The file is read completely before the in-memory sections are touched.
//! If opening, reading or UTF-8 decoding fails, `load` returns an error and
//! the store still holds whatever it held before the call.  Only a successful
//! read replaces the sections, and it always replaces them wholesale.
//!
//! # Save semantics
//!
//! `save` truncates the target and streams the sections into it through a
//! buffered writer.  The file handle lives in a local value, so it is closed
//! on every exit path, including a write error halfway through.  There is no
//! write-to-temp-then-rename step: a failed save can leave a partial file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::format::parser::{parse, ParseWarning};
use crate::format::writer::write_sections;
use crate::format::{Section, Sections};
use crate::store::error::{LoadError, SaveError};

/// Summary of a successful [`ConfigStore::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that were skipped because they matched no grammar rule.
    pub warnings: Vec<ParseWarning>,
    /// Number of key/value pairs now held by the store.
    pub entries: usize,
}

impl LoadReport {
    /// Returns `true` if every line of the file was understood.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// In-memory INI sections bound to a file path.
///
/// # Examples
///
/// ```rust
/// use ini_core::ConfigStore;
///
/// let mut store = ConfigStore::new("settings.ini");
/// store.set("server", "port", "8080");
/// assert_eq!(store.get("server", "port"), Some("8080"));
/// assert_eq!(store.get("server", "host"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
    sections: Sections,
}

impl ConfigStore {
    /// Creates an empty store bound to `path`.  Nothing is read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sections: Sections::new(),
        }
    }

    /// Creates a store bound to `path` and loads it immediately.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] from the initial [`load`](Self::load).
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, LoadReport), LoadError> {
        let mut store = Self::new(path);
        let report = store.load()?;
        Ok((store, report))
    }

    /// Creates a store bound to `path` whose sections are parsed from `text`.
    ///
    /// The filesystem is not touched.  Invalid lines are reported in the
    /// returned [`LoadReport`], the same way [`open`](Self::open) reports them.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> (Self, LoadReport) {
        let outcome = parse(text);
        let report = LoadReport {
            entries: outcome.entries(),
            warnings: outcome.warnings,
        };
        let store = Self {
            path: path.into(),
            sections: outcome.sections,
        };
        (store, report)
    }

    // ── Path ──────────────────────────────────────────────────────────────────

    /// The file this store loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebinds the store to `path`.  The in-memory sections are unchanged.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    // ── File I/O ──────────────────────────────────────────────────────────────

    /// Reads the bound file and replaces all sections with its content.
    ///
    /// Invalid lines do not fail the load; they are returned in
    /// [`LoadReport::warnings`].
    ///
    /// # Errors
    ///
    /// - [`LoadError::Io`] if the file cannot be opened or read.
    /// - [`LoadError::Encoding`] if the content is not UTF-8.
    ///
    /// In both cases the previous sections are left untouched.
    pub fn load(&mut self) -> Result<LoadReport, LoadError> {
        let text = self.read_text().map_err(|e| {
            error!("failed to load config: {e}");
            e
        })?;

        let outcome = parse(&text);
        let entries = outcome.entries();
        self.sections = outcome.sections;

        debug!(
            "loaded {} sections, {entries} entries from {}",
            self.sections.len(),
            self.path.display()
        );

        Ok(LoadReport {
            warnings: outcome.warnings,
            entries,
        })
    }

    /// Re-reads the bound file.  Same as [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn reload(&mut self) -> Result<LoadReport, LoadError> {
        self.load()
    }

    /// Writes all sections to the bound file, replacing its content.
    ///
    /// The format has no escaping: keys starting with `#` or `;`, names or
    /// keys holding `=`, `[`, `]` or line breaks, and values holding line
    /// breaks are written as-is with a `warn!`, and do not survive the next
    /// [`load`](Self::load).  See [`crate::format::writer::is_readable_key`].
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Io`] if the file cannot be created, written or
    /// flushed.  The file may then be empty or partially written.
    pub fn save(&self) -> Result<(), SaveError> {
        self.write_file().map_err(|source| {
            error!("failed to save config to {}: {source}", self.path.display());
            SaveError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn read_text(&self) -> Result<String, LoadError> {
        let bytes = fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|source| LoadError::Encoding {
            path: self.path.clone(),
            source,
        })
    }

    fn write_file(&self) -> std::io::Result<()> {
        let file = File::create(&self.path)?;

        match fs::canonicalize(&self.path) {
            Ok(full) => info!("writing config to {}", full.display()),
            Err(e) => debug!("could not resolve full path of {}: {e}", self.path.display()),
        }

        // `writer` owns the handle; it is closed when it goes out of scope,
        // whichever `?` returns first.
        let mut writer = BufWriter::new(file);
        write_sections(&self.sections, &mut writer)?;
        writer.flush()
    }

    // ── Section access ────────────────────────────────────────────────────────

    /// All sections.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// All sections, mutably.  No validation is applied to changes made here.
    pub fn sections_mut(&mut self) -> &mut Sections {
        &mut self.sections
    }

    /// Consumes the store and returns its sections.
    pub fn into_sections(self) -> Sections {
        self.sections
    }

    /// The section named `name`, if it has been loaded or set.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// The section named `name`, mutably.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Returns `true` if a section named `name` exists.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns `true` if the store holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Sets `key` in `section` to `value`, creating the section if needed.
    ///
    /// Returns the previous value, if any.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DEFAULT_SECTION;
    use uuid::Uuid;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ini_core_{}_{name}", Uuid::new_v4()))
    }

    #[test]
    fn test_new_store_is_empty_and_bound_to_path() {
        let store = ConfigStore::new("app.ini");

        assert!(store.is_empty());
        assert_eq!(store.path(), Path::new("app.ini"));
    }

    #[test]
    fn test_set_path_keeps_sections() {
        // Arrange
        let (mut store, _) = ConfigStore::from_text("a.ini", "[s]\nk=v\n");

        // Act
        store.set_path("b.ini");

        // Assert
        assert_eq!(store.path(), Path::new("b.ini"));
        assert_eq!(store.get("s", "k"), Some("v"));
    }

    #[test]
    fn test_set_creates_section_and_returns_previous_value() {
        let mut store = ConfigStore::new("x.ini");

        assert_eq!(store.set("s", "k", "1"), None);
        assert_eq!(store.set("s", "k", "2"), Some("1".to_string()));
        assert_eq!(store.get("s", "k"), Some("2"));
        assert!(store.contains_section("s"));
    }

    #[test]
    fn test_get_missing_section_or_key_is_none() {
        let (store, _) = ConfigStore::from_text("x.ini", "[s]\nk=v\n");

        assert_eq!(store.get("other", "k"), None);
        assert_eq!(store.get("s", "missing"), None);
    }

    #[test]
    fn test_section_mut_allows_removal() {
        let (mut store, _) = ConfigStore::from_text("x.ini", "[s]\na=1\nb=2\n");

        store.section_mut("s").expect("section exists").remove("a");

        assert_eq!(store.section("s").map(|s| s.len()), Some(1));
        assert_eq!(store.get("s", "a"), None);
    }

    #[test]
    fn test_sections_mut_allows_dropping_a_section() {
        let (mut store, _) = ConfigStore::from_text("x.ini", "[s]\na=1\n[t]\nb=2\n");

        store.sections_mut().remove("s");

        assert!(!store.contains_section("s"));
        assert_eq!(store.into_sections().len(), 1);
    }

    #[test]
    fn test_from_text_reports_invalid_lines() {
        // Act
        let (store, report) = ConfigStore::from_text("x.ini", "[s]\nk=v\nnonsense\n");

        // Assert
        assert_eq!(store.get("s", "k"), Some("v"));
        assert_eq!(report.entries, 1);
        assert_eq!(
            report.warnings,
            vec![ParseWarning::InvalidLine {
                line: 3,
                content: "nonsense".to_string()
            }]
        );
    }

    #[test]
    fn test_save_drops_comment_prefixed_keys_on_reload() {
        // Arrange
        let path = scratch_path("hash_key.ini");
        let mut store = ConfigStore::new(&path);
        store.set("chat", "#channel", "general");
        store.set("chat", "plain", "v");

        // Act
        store.save().unwrap();
        store.reload().unwrap();

        // Assert: written without escaping, read back as a comment.
        assert_eq!(store.get("chat", "#channel"), None);
        assert_eq!(store.get("chat", "plain"), Some("v"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_text_groups_headerless_pairs_under_default_section() {
        let (store, _) = ConfigStore::from_text("x.ini", "k=v\n");

        assert_eq!(store.get(DEFAULT_SECTION, "k"), Some("v"));
    }

    #[test]
    fn test_load_missing_file_fails_and_keeps_previous_state() {
        // Arrange
        let (mut store, _) = ConfigStore::from_text(scratch_path("missing.ini"), "[s]\nk=v\n");

        // Act
        let result = store.load();

        // Assert
        assert!(matches!(result, Err(LoadError::Io { .. })));
        assert_eq!(store.get("s", "k"), Some("v"));
    }

    #[test]
    fn test_load_invalid_utf8_fails_with_encoding_error() {
        // Arrange
        let path = scratch_path("latin1.ini");
        std::fs::write(&path, b"[s]\nk=caf\xE9\n").unwrap();
        let mut store = ConfigStore::new(&path);
        store.set("keep", "me", "1");

        // Act
        let result = store.load();

        // Assert
        assert!(matches!(result, Err(LoadError::Encoding { .. })));
        assert_eq!(store.get("keep", "me"), Some("1"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_replaces_previous_sections_wholesale() {
        // Arrange
        let path = scratch_path("replace.ini");
        std::fs::write(&path, "[fresh]\nk=v\n").unwrap();
        let mut store = ConfigStore::new(&path);
        store.set("stale", "old", "1");

        // Act
        let report = store.load().unwrap();

        // Assert
        assert!(!store.contains_section("stale"));
        assert_eq!(store.get("fresh", "k"), Some("v"));
        assert_eq!(report.entries, 1);
        assert!(report.is_clean());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_reload_reproduces_sections() {
        // Arrange
        let path = scratch_path("save.ini");
        let mut store = ConfigStore::new(&path);
        store.set("server", "url", "http://h/?a=b");
        store.set("client", "retries", "3");
        let expected = store.sections().clone();

        // Act
        store.save().unwrap();
        store.sections_mut().clear();
        let report = store.reload().unwrap();

        // Assert
        assert_eq!(store.sections(), &expected);
        assert_eq!(report.entries, 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = scratch_path("no_such_dir").join("out.ini");
        let (store, _) = ConfigStore::from_text(&path, "[s]\nk=v\n");

        let err = store.save().unwrap_err();

        assert_eq!(err.path(), path.as_path());
    }
}
