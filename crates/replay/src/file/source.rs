use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::codec::Header;
use crate::error::{DecodeError, DecodeErrorKind, LineError, Result, ScriptError};
use crate::text::{LineSource, Token, tokenize};

/// One non-blank line of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    number: usize,
    text: String,
}

impl Record {
    /// 1-based line number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> Vec<Token<'_>> {
        tokenize(&self.text)
    }
}

/// Sequential reader over the records of one script.
pub struct ScriptSource<R = File> {
    path: PathBuf,
    lines: LineSource<R>,
}

impl ScriptSource<File> {
    /// Opens an existing script for reading.
    pub fn open(path: impl Into<PathBuf>, max_line_length: usize) -> Result<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| ScriptError::Open {
            path: path.clone(),
            source,
        })?;
        debug!("Opened script for reading: {}", path.display());
        Ok(Self::new(path, file, max_line_length))
    }
}

impl<R: Read> ScriptSource<R> {
    pub fn new(path: impl Into<PathBuf>, reader: R, max_line_length: usize) -> Self {
        Self {
            path: path.into(),
            lines: LineSource::new(reader, max_line_length),
        }
    }

    /// Returns the next line that has at least one token.
    ///
    /// Blank and comment-only lines are skipped but still counted.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            let line = match self.lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(None),
                Err(LineError::Io(source)) => {
                    return Err(ScriptError::Read {
                        path: self.path.clone(),
                        source,
                    });
                }
                Err(LineError::Decode(err)) => {
                    if err.kind == DecodeErrorKind::MissingNewline {
                        warn!(
                            "Script truncated mid-line: {}:{}",
                            self.path.display(),
                            self.lines.line_number()
                        );
                    }
                    return Err(self.decode_error(self.lines.line_number(), err));
                }
            };
            if !tokenize(&line).is_empty() {
                return Ok(Some(Record {
                    number: self.lines.line_number(),
                    text: line,
                }));
            }
        }
    }

    /// Like [`next_record`](Self::next_record), but end of input is an error.
    pub fn expect_record(&mut self) -> Result<Record> {
        match self.next_record()? {
            Some(record) => Ok(record),
            None => Err(self.unexpected_eof()),
        }
    }

    /// Reads and decodes the header line.
    pub fn read_header(&mut self) -> Result<Header> {
        let record = self.expect_record()?;
        let header = Header::decode(&record.tokens())
            .map_err(|err| self.decode_error(record.number(), err))?;
        debug!("Read script header {:?} from {}", header, self.path.display());
        Ok(header)
    }

    /// Positions a decode failure within this script.
    pub fn decode_error(&self, line: usize, err: DecodeError) -> ScriptError {
        ScriptError::Decode {
            path: self.path.clone(),
            line,
            col: err.col,
            kind: err.kind,
        }
    }

    pub fn unexpected_eof(&self) -> ScriptError {
        self.decode_error(
            self.lines.line_number(),
            DecodeError::new(1, DecodeErrorKind::UnexpectedEof),
        )
    }

    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Releases the underlying reader, positioned after the last line read.
    pub fn into_inner(self) -> (PathBuf, R) {
        (self.path, self.lines.into_inner())
    }
}
