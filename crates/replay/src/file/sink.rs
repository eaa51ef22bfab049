use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::{Result, ScriptError};

/// Append-only writer for one script.
///
/// Each line is written and flushed before [`write_line`](Self::write_line)
/// returns, so a crash never loses a line the simulation already acted on.
/// Lines a reader with the same limit would reject are refused.
pub struct ScriptSink {
    path: PathBuf,
    file: File,
    max_line_length: usize,
}

impl ScriptSink {
    /// Creates (or truncates) a script for recording.
    pub fn create(path: impl Into<PathBuf>, max_line_length: usize) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| ScriptError::Create {
            path: path.clone(),
            source,
        })?;
        debug!("Created script for recording: {}", path.display());
        Ok(Self {
            path,
            file,
            max_line_length,
        })
    }

    /// Continues an existing script, appending after its current end.
    pub fn resume(path: PathBuf, mut file: File, max_line_length: usize) -> Result<Self> {
        let offset = file
            .seek(SeekFrom::End(0))
            .map_err(|source| ScriptError::Write {
                path: path.clone(),
                source,
            })?;
        debug!(
            "Resuming script recording: {} at offset {}",
            path.display(),
            offset
        );
        Ok(Self {
            path,
            file,
            max_line_length,
        })
    }

    /// Writes one newline-terminated line and flushes it.
    ///
    /// # Errors
    ///
    /// - `Oversized` - the line without its newline exceeds the length limit;
    ///   nothing is written
    /// - `Write` - the underlying file failed
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        debug_assert!(line.ends_with('\n'), "script lines carry their newline");
        let length = line.len() - 1;
        if length > self.max_line_length {
            return Err(ScriptError::Oversized {
                path: self.path.clone(),
                length,
                limit: self.max_line_length,
            });
        }

        self.file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|source| ScriptError::Write {
                path: self.path.clone(),
                source,
            })?;
        trace!("Recorded script line: {}", line.trim_end());
        Ok(())
    }
}
