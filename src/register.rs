//! Sign code register: maps a classification code to its human-readable
//! meaning and reference image.
//!
//! Loaded once at startup from a `;`-delimited table where each row is
//! `image_path;"<code>. <display text>"`. Loading is fail-fast: a row whose
//! descriptive field lacks the `". "` separator aborts the load. A lookup
//! miss is not an error; missed codes are collected for the end-of-run
//! report, sorted and deduplicated.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("failed to read register file: {0}")]
    Read(#[from] csv::Error),

    #[error("register row {row} is missing its descriptive field")]
    MissingField { row: usize },

    #[error("register row {row} has no '. ' separator in {text:?}")]
    MalformedRow { row: usize, text: String },
}

/// One register entry for a classification code.
#[derive(Debug, Clone)]
pub struct RegisterEntry {
    /// Human-readable meaning of the sign.
    pub meaning: String,
    /// Site-relative image path, e.g. `/media/image/orig/C3.png`.
    pub image_path: String,
}

/// In-memory register with an append-only miss set.
#[derive(Debug, Default)]
pub struct SignRegister {
    entries: HashMap<String, RegisterEntry>,
    misses: BTreeSet<String>,
}

impl SignRegister {
    /// Register with no entries; every lookup will be a recorded miss.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> Result<Self, RegisterError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        Self::load(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RegisterError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self::load(reader)
    }

    fn load<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, RegisterError> {
        let mut entries = HashMap::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let image_path = record.get(0).unwrap_or_default().to_string();
            let description = record
                .get(1)
                .ok_or(RegisterError::MissingField { row })?;
            // Split on the first ". " only; the remainder is the display text.
            let (code, meaning) =
                description
                    .split_once(". ")
                    .ok_or_else(|| RegisterError::MalformedRow {
                        row,
                        text: description.to_string(),
                    })?;
            entries.insert(
                code.to_string(),
                RegisterEntry {
                    meaning: meaning.to_string(),
                    image_path,
                },
            );
        }
        Ok(Self {
            entries,
            misses: BTreeSet::new(),
        })
    }

    /// Look up a classification code. A miss is recorded for the end-of-run
    /// report and returns `None`.
    pub fn lookup(&mut self, code: &str) -> Option<&RegisterEntry> {
        match self.entries.get(code) {
            Some(entry) => Some(entry),
            None => {
                self.misses.insert(code.to_string());
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes that were looked up but absent, sorted and deduplicated.
    pub fn missed_codes(&self) -> Vec<&str> {
        self.misses.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTER: &str = "\
/media/image/orig/C3.png;C3. Verboden toegang, in beide richtingen\n\
/media/image/orig/A1a.png;A1a. Gevaarlijke bocht. Bocht naar links\n";

    #[test]
    fn loads_rows_and_splits_on_first_separator() {
        let register = SignRegister::from_reader(REGISTER.as_bytes()).unwrap();
        assert_eq!(register.len(), 2);
        let mut register = register;
        let entry = register.lookup("C3").unwrap();
        assert_eq!(entry.meaning, "Verboden toegang, in beide richtingen");
        assert_eq!(entry.image_path, "/media/image/orig/C3.png");
        // The remainder after the first ". " is kept whole.
        let entry = register.lookup("A1a").unwrap();
        assert_eq!(entry.meaning, "Gevaarlijke bocht. Bocht naar links");
    }

    #[test]
    fn malformed_row_fails_the_load() {
        let err = SignRegister::from_reader("/img/x.png;no separator here\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, RegisterError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn misses_are_collected_sorted_and_deduplicated() {
        let mut register = SignRegister::from_reader(REGISTER.as_bytes()).unwrap();
        assert!(register.lookup("Z9").is_none());
        assert!(register.lookup("B1").is_none());
        assert!(register.lookup("Z9").is_none());
        assert!(register.lookup("C3").is_some());
        assert_eq!(register.missed_codes(), vec!["B1", "Z9"]);
    }

    #[test]
    fn empty_register_records_every_lookup() {
        let mut register = SignRegister::empty();
        assert!(register.is_empty());
        assert!(register.lookup("C3").is_none());
        assert_eq!(register.missed_codes(), vec!["C3"]);
    }
}
