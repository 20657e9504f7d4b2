use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Lines, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StorageError;

/// Append `text` to the file at `path`, creating it if needed.
///
/// The whole text goes out in one `write_all` on a freshly opened handle,
/// which is flushed and dropped before returning.
pub fn append_text(path: &Path, text: &str) -> Result<(), StorageError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(text.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = text.len(), "appended");
    Ok(())
}

/// Lazily read a text file line by line. Returns `Ok(None)` when the file
/// does not exist or is empty.
pub fn read_lines(path: &Path) -> Result<Option<LogLines>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let len = file
        .metadata()
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if len == 0 {
        return Ok(None);
    }

    Ok(Some(LogLines {
        path: path.to_path_buf(),
        lines: BufReader::new(file).lines(),
    }))
}

/// Line iterator over a log file. Holds the file open only while alive.
pub struct LogLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for LogLines {
    type Item = Result<String, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })
        })
    }
}
