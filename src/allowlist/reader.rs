use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use crate::error::AllowedIpsError;

/// A non-blank, non-comment line of the allow-list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 1-based line number, counting blank and comment lines
    pub line: usize,
    /// Line content with surrounding whitespace removed
    pub text: String,
}

/// Lazily yields the entries of an allow-list source
///
/// Blank lines and lines starting with `#` (after trimming) are skipped but
/// still counted. An I/O failure is yielded once as `AllowedIpsError::Read`,
/// after which the reader is exhausted.
pub struct EntryReader<R> {
    lines: Lines<R>,
    line_no: usize,
    path: PathBuf,
    failed: bool,
}

impl EntryReader<BufReader<File>> {
    /// Open an allow-list file for reading
    pub fn open(path: &Path) -> Result<Self, AllowedIpsError> {
        let file = File::open(path).map_err(|source| AllowedIpsError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> EntryReader<R> {
    /// Wrap an already opened source; `path` is only used in diagnostics
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            path: path.into(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = Result<Entry, AllowedIpsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(AllowedIpsError::Read {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            self.line_no += 1;

            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            return Some(Ok(Entry {
                line: self.line_no,
                text: text.to_string(),
            }));
        }
    }
}
