//! Manifest reader.
//!
//! A manifest is comma-delimited text, one record per physical line:
//! `source,destination,backup`. Fields use CSV quoting, so a path containing a
//! comma must be quoted. Lines with no fields are blank, lines whose first field
//! starts with `#` are comments, and any other field count is malformed.
//!
//! The reader only classifies lines; logging and validation belong to the
//! row processor.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::errors::LabelMvError;

/// Number of fields in a well-formed record.
pub const FIELD_COUNT: usize = 3;

/// One classified manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Blank,
    Comment,
    Malformed { fields: usize },
    /// Exactly three fields; any of them may still be empty.
    Triple {
        source: String,
        dest: String,
        backup: String,
    },
}

/// A row together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLine {
    pub line: usize,
    pub row: Row,
}

/// Classify a single manifest line.
pub fn parse_line(text: &str) -> Row {
    let text = text.strip_suffix('\r').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut record = StringRecord::new();
    let fields: Vec<String> = match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_owned).collect(),
        // The reader is lenient about quoting and reads valid UTF-8 from
        // memory, so it has nothing to fail on.
        Ok(false) | Err(_) => Vec::new(),
    };

    if fields.is_empty() {
        return Row::Blank;
    }
    if fields[0].starts_with('#') {
        return Row::Comment;
    }
    if fields.len() != FIELD_COUNT {
        return Row::Malformed {
            fields: fields.len(),
        };
    }
    let mut it = fields.into_iter();
    match (it.next(), it.next(), it.next()) {
        (Some(source), Some(dest), Some(backup)) => Row::Triple {
            source,
            dest,
            backup,
        },
        _ => Row::Malformed {
            fields: FIELD_COUNT,
        },
    }
}

/// Sequential, single-pass reader over a manifest.
pub struct ManifestReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl ManifestReader<BufReader<File>> {
    /// Open a manifest file.
    pub fn open(path: &Path) -> Result<Self, LabelMvError> {
        let file = File::open(path).map_err(|source| LabelMvError::ManifestOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> ManifestReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Line number of the most recently returned line (0 before the first).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Wrap a read error with the manifest path and current line.
    pub fn read_error(&self, path: &Path, source: io::Error) -> LabelMvError {
        LabelMvError::ManifestRead {
            path: PathBuf::from(path),
            line: self.line,
            source,
        }
    }
}

impl<R: BufRead> Iterator for ManifestReader<R> {
    type Item = io::Result<ManifestLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.line += 1;
        Some(text.map(|t| ManifestLine {
            line: self.line,
            row: parse_line(&t),
        }))
    }
}
