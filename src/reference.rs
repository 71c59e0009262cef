use crate::FinderError;
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Known ingredient names, loaded from the first line of a reference file.
///
/// Entries are kept exactly as written between the commas. They are not
/// lowercased, and whitespace is only removed when trimming is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl ReferenceList {
    /// Reads the first line of `path` and splits it on `,`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file is empty, so there is no first line
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FinderError> {
        let path = path.as_ref();
        let reference_error = |source| FinderError::ReferenceFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(reference_error)?;
        let mut line = String::new();
        let read = BufReader::new(file)
            .read_line(&mut line)
            .map_err(reference_error)?;

        if read == 0 {
            return Err(FinderError::EmptyReferenceFile(path.to_path_buf()));
        }

        let list = Self::parse_line(line.trim_end_matches(['\n', '\r']));
        debug!(
            "Loaded {} reference entries from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Builds a list from one line of comma-separated names
    pub fn parse_line(line: &str) -> Self {
        line.split(',').map(String::from).collect()
    }

    /// Number of entries with leading or trailing whitespace
    pub fn padded_entries(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.trim() != entry.as_str())
            .count()
    }

    /// Returns a copy with surrounding whitespace removed from every entry
    pub fn with_trimmed_entries(&self) -> Self {
        self.entries
            .iter()
            .map(|entry| entry.trim().to_string())
            .collect()
    }

    /// Exact membership test
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<String> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let entries: Vec<String> = iter.into_iter().collect();
        let index = entries.iter().cloned().collect();
        Self { entries, index }
    }
}
