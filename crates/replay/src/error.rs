//! Error types raised while reading, decoding and writing scripts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ScriptMode;

/// Why a line of script text was rejected.
///
/// The display form is the message printed after `error:` in diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("expected {}", describe_arguments(.0))]
    ExpectedArguments(usize),

    #[error("undefined {0}")]
    UndefinedName(&'static str),

    #[error("hex digit out of range [0-9a-f]")]
    HexDigit,

    #[error("expected hex {0}")]
    HexLength(&'static str),

    #[error("expected decimal digits")]
    MissingDigits,

    #[error("expected decimal digit")]
    DecimalDigit,

    #[error("integer overflow")]
    IntegerOverflow,

    #[error("can't wish for an individual")]
    WishForIndividual,

    #[error("expected rng directive with tag: {tag}")]
    ExpectedRngDirective { tag: String },

    #[error("rng tag mismatch. expected: {expected}")]
    RngTagMismatch { expected: String },

    #[error("unexpected EOF")]
    UnexpectedEof,

    #[error("expected script header (@seed or @test)")]
    ExpectedHeader,

    #[error("unable to decode line as UTF-8")]
    InvalidUtf8,

    #[error("expected newline at end of file")]
    MissingNewline,

    #[error("line too long (limit is {limit} bytes)")]
    LineTooLong { limit: usize },
}

fn describe_arguments(count: &usize) -> String {
    match *count {
        0 => "no arguments".to_string(),
        1 => "1 argument".to_string(),
        n => format!("{n} arguments"),
    }
}

/// A decode failure positioned at a 1-based column of the current line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("column {col}: {kind}")]
pub struct DecodeError {
    pub col: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub const fn new(col: usize, kind: DecodeErrorKind) -> Self {
        Self { col, kind }
    }
}

/// Failure while pulling a line out of a byte stream.
#[derive(Debug, Error)]
pub enum LineError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors surfaced by the script engine and the offline reader.
///
/// Every variant is fatal for the session: a script that fails to decode
/// cannot be trusted to reproduce the recorded run.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("could not create file: {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error when reading from file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error when writing to file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not delete file: {}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{}:{}: error: {}", .path.display(), .line, .col, .kind)]
    Decode {
        path: PathBuf,
        line: usize,
        col: usize,
        kind: DecodeErrorKind,
    },

    #[error(
        "{}: error: line too long to record ({length} bytes, limit is {limit})",
        .path.display()
    )]
    Oversized {
        path: PathBuf,
        length: usize,
        limit: usize,
    },

    #[error("script mode '{0}' requires a script path")]
    MissingPath(ScriptMode),

    #[error("invalid live input: {0}")]
    LiveInput(String),
}

impl ScriptError {
    /// Returns `(line, col)` for decode errors.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ScriptError::Decode { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }

    /// Returns the decode failure reason, if this is a decode error.
    pub fn decode_kind(&self) -> Option<&DecodeErrorKind> {
        match self {
            ScriptError::Decode { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;
