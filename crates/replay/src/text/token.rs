use crate::error::{DecodeError, DecodeErrorKind};

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// One whitespace-delimited word of a script line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// 1-based column of the first character.
    pub col: usize,
}

impl<'a> Token<'a> {
    pub const fn new(text: &'a str, col: usize) -> Self {
        Self { text, col }
    }

    /// Builds a decode error pointing `offset` characters into this token.
    pub fn error_at(&self, offset: usize, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(self.col + offset, kind)
    }

    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        self.error_at(0, kind)
    }
}

/// Splits a line into tokens, dropping everything from the comment marker on.
///
/// Columns count characters, not bytes.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    // (byte offset, column) of the token being scanned
    let mut current: Option<(usize, usize)> = None;
    let mut end = line.len();

    for (index, (offset, c)) in line.char_indices().enumerate() {
        if c == COMMENT_MARKER {
            end = offset;
            break;
        }
        match (current, c.is_whitespace()) {
            (None, false) => current = Some((offset, index + 1)),
            (Some((start, col)), true) => {
                tokens.push(Token::new(&line[start..offset], col));
                current = None;
            }
            _ => {}
        }
    }
    if let Some((start, col)) = current {
        tokens.push(Token::new(&line[start..end], col));
    }

    tokens
}
