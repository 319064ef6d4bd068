//! Lazy line source over an input file.
//!
//! Lines are read one at a time through a buffered reader, so memory use
//! stays flat regardless of file size. Each call to [`LineSource::open`]
//! opens a fresh handle and starts from the top of the file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

use crate::error_handling::IngestError;

/// One step of a [`LineSource`].
#[derive(Debug, PartialEq, Eq)]
pub enum SourceLine {
    /// A line with its terminator stripped.
    Text(String),
    /// A line whose bytes were not valid UTF-8. The reader has moved past it.
    InvalidUtf8,
}

/// Lines of a text file, read on demand.
#[derive(Debug)]
pub struct LineSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl LineSource {
    /// Opens `path` for line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::NotFound`] if the file does not exist, and
    /// [`IngestError::Io`] for any other open failure.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref().to_path_buf();
        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(IngestError::NotFound { path });
            }
            Err(source) => return Err(IngestError::Io { path, source }),
        };
        Ok(LineSource {
            lines: BufReader::new(file).lines(),
            path,
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the next line, or `None` at end of file.
    ///
    /// Trailing `\n` and `\r\n` are removed.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Io`] if the underlying read fails.
    pub async fn next_line(&mut self) -> Result<Option<SourceLine>, IngestError> {
        match self.lines.next_line().await {
            Ok(Some(line)) => Ok(Some(SourceLine::Text(line))),
            Ok(None) => Ok(None),
            // tokio consumes the whole line before validating it, so reading
            // can resume at the next one
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(Some(SourceLine::InvalidUtf8)),
            Err(source) => Err(IngestError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
