use std::io::{self, Read};

use crate::error::{DecodeError, DecodeErrorKind, LineError};

/// Bytes requested from the underlying reader per refill.
const CHUNK_SIZE: usize = 256;

/// Splits a byte stream into newline-terminated UTF-8 lines.
///
/// Every line must end with `\n`: a stream that ends mid-line is rejected,
/// never returned as a final partial line. Line numbers start at 1 and count
/// every line, including blank ones.
pub struct LineSource<R> {
    inner: R,
    buffer: Vec<u8>,
    line_number: usize,
    max_line_length: usize,
}

impl<R: Read> LineSource<R> {
    pub fn new(inner: R, max_line_length: usize) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(CHUNK_SIZE),
            line_number: 0,
            max_line_length,
        }
    }

    /// Returns the next line without its newline, or `None` at end of stream.
    ///
    /// On error, [`line_number`](Self::line_number) points at the offending line.
    pub fn next_line(&mut self) -> Result<Option<String>, LineError> {
        let mut scanned = 0;
        loop {
            if let Some(index) = self.buffer[scanned..].iter().position(|&b| b == b'\n') {
                let index = scanned + index;
                self.line_number += 1;
                if index > self.max_line_length {
                    return Err(self.too_long());
                }
                let line = match std::str::from_utf8(&self.buffer[..index]) {
                    Ok(text) => text.to_owned(),
                    Err(err) => {
                        let col = column_after(&self.buffer[..err.valid_up_to()]);
                        return Err(DecodeError::new(col, DecodeErrorKind::InvalidUtf8).into());
                    }
                };
                self.buffer.drain(..=index);
                return Ok(Some(line));
            }

            scanned = self.buffer.len();
            if scanned > self.max_line_length {
                self.line_number += 1;
                return Err(self.too_long());
            }

            let mut chunk = [0u8; CHUNK_SIZE];
            let count = match self.inner.read(&mut chunk) {
                Ok(count) => count,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if count == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                self.line_number += 1;
                let col = column_after(&self.buffer);
                return Err(DecodeError::new(col, DecodeErrorKind::MissingNewline).into());
            }
            self.buffer.extend_from_slice(&chunk[..count]);
        }
    }

    /// Number of the most recently read line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn too_long(&self) -> LineError {
        let col = column_after(&self.buffer[..self.max_line_length]);
        DecodeError::new(
            col,
            DecodeErrorKind::LineTooLong {
                limit: self.max_line_length,
            },
        )
        .into()
    }
}

/// Column of the character following `bytes`.
fn column_after(bytes: &[u8]) -> usize {
    String::from_utf8_lossy(bytes).chars().count() + 1
}
