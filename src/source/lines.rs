use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Lazy sequence of the lines of a file, with line terminators stripped.
///
/// The reader is dropped as soon as the input is exhausted or a read fails,
/// so the file handle never outlives the iteration. The sequence is fused:
/// after `None` or an error it keeps returning `None`.
pub struct LineSource<R = BufReader<File>> {
    reader: Option<R>,
    file: Rc<PathBuf>,
    line: usize,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = Rc::new(path.to_path_buf());

        let handle = File::open(path).map_err(|err| {
            Error::new(
                ErrorImpl::FileAccessError {
                    reason: err.to_string(),
                },
                Position::file(Rc::clone(&file)),
            )
        })?;

        tracing::debug!("Opened {}", path.display());

        Ok(LineSource {
            reader: Some(BufReader::new(handle)),
            file,
            line: 0,
        })
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, file: impl Into<PathBuf>) -> Self {
        LineSource {
            reader: Some(reader),
            file: Rc::new(file.into()),
            line: 0,
        }
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    fn read_next(&mut self) -> Option<Result<String, Error>> {
        let reader = self.reader.as_mut()?;
        let mut bytes = Vec::new();

        match reader.read_until(b'\n', &mut bytes) {
            Ok(0) => {
                tracing::debug!("Read {} lines from {}", self.line, self.file.display());
                self.reader = None;
                None
            }
            Ok(_) => {
                self.line += 1;
                strip_terminator(&mut bytes);

                match String::from_utf8(bytes) {
                    Ok(line) => Some(Ok(line)),
                    Err(_) => {
                        self.reader = None;
                        Some(Err(Error::new(
                            ErrorImpl::DecodingError,
                            Position(self.line, Rc::clone(&self.file)),
                        )))
                    }
                }
            }
            Err(err) => {
                self.reader = None;
                Some(Err(Error::new(
                    ErrorImpl::FileAccessError {
                        reason: err.to_string(),
                    },
                    Position(self.line + 1, Rc::clone(&self.file)),
                )))
            }
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}

fn strip_terminator(bytes: &mut Vec<u8>) {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
}
