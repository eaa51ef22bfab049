//! Offline script reader.
//!
//! Decodes a whole script without a simulation attached: the header, then
//! every body line classified as a decision or an RNG draw. Diagnostics are
//! identical to the engine's.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use game_core::Action;

use crate::codec::{ActionCodec, Header, rng};
use crate::config::DEFAULT_MAX_LINE_LENGTH;
use crate::error::Result;
use crate::file::ScriptSource;

/// Decoded body line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptLine {
    Decision(Action),
    Rng { value: i32, tag: String },
}

/// Body line together with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptEntry {
    pub line: usize,
    pub content: ScriptLine,
}

pub struct ScriptReader<R = File> {
    source: ScriptSource<R>,
    codec: ActionCodec,
    header: Header,
}

impl ScriptReader<File> {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_limit(path, DEFAULT_MAX_LINE_LENGTH)
    }

    pub fn open_with_limit(path: impl Into<PathBuf>, max_line_length: usize) -> Result<Self> {
        Self::from_source(ScriptSource::open(path, max_line_length)?)
    }
}

impl<R: Read> ScriptReader<R> {
    /// Reads a script from any byte stream; `path` only labels diagnostics.
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Result<Self> {
        Self::from_source(ScriptSource::new(path, reader, DEFAULT_MAX_LINE_LENGTH))
    }

    fn from_source(mut source: ScriptSource<R>) -> Result<Self> {
        let header = source.read_header()?;
        Ok(Self {
            source,
            codec: ActionCodec::new(),
            header,
        })
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// Decodes the next body line, or returns `None` at end of script.
    pub fn next_entry(&mut self) -> Result<Option<ScriptEntry>> {
        let Some(record) = self.source.next_record()? else {
            return Ok(None);
        };
        let tokens = record.tokens();
        let decoded = if tokens[0].text == rng::RNG_DIRECTIVE {
            rng::decode_any(&tokens).map(|(value, tag)| ScriptLine::Rng {
                value,
                tag: tag.to_string(),
            })
        } else {
            self.codec.decode(&tokens).map(ScriptLine::Decision)
        };
        let content = decoded.map_err(|err| self.source.decode_error(record.number(), err))?;

        Ok(Some(ScriptEntry {
            line: record.number(),
            content,
        }))
    }

    /// Decodes every remaining body line.
    pub fn read_all(&mut self) -> Result<Vec<ScriptEntry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.next_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use game_core::Coord;

    const SCRIPT: &str = "\
@seed 0000beef
# opening moves
move 1 0
@rng 3 hit_roll
@rng -2147483648 damage

wait
";

    #[test]
    fn test_reads_header_and_entries() {
        let mut reader = ScriptReader::from_reader("opening.script", SCRIPT.as_bytes()).unwrap();
        assert_eq!(reader.header(), Header::Seed(0xbeef));

        let entries = reader.read_all().unwrap();
        assert_eq!(
            entries,
            vec![
                ScriptEntry {
                    line: 3,
                    content: ScriptLine::Decision(Action::Move(Coord::new(1, 0))),
                },
                ScriptEntry {
                    line: 4,
                    content: ScriptLine::Rng {
                        value: 3,
                        tag: "hit_roll".to_string()
                    },
                },
                ScriptEntry {
                    line: 5,
                    content: ScriptLine::Rng {
                        value: i32::MIN,
                        tag: "damage".to_string()
                    },
                },
                ScriptEntry {
                    line: 7,
                    content: ScriptLine::Decision(Action::Wait),
                },
            ]
        );
    }

    #[test]
    fn test_malformed_line_is_positioned() {
        let text = "@test\nwait\nmove 3\n";
        let mut reader = ScriptReader::from_reader("bad.script", text.as_bytes()).unwrap();
        reader.next_entry().unwrap();
        let err = reader.next_entry().unwrap_err();
        assert_eq!(
            err.decode_kind(),
            Some(&DecodeErrorKind::ExpectedArguments(2))
        );
        assert_eq!(err.to_string(), "bad.script:3:1: error: expected 2 arguments");
    }

    #[test]
    fn test_header_is_required() {
        let err = ScriptReader::from_reader("bad.script", "wait\n".as_bytes())
            .err()
            .unwrap();
        assert_eq!(err.decode_kind(), Some(&DecodeErrorKind::ExpectedHeader));
    }
}
