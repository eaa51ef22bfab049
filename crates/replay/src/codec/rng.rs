//! RNG tap lines: `@rng <value> <tag>`.

use super::numeric::{decode_int, encode_int};
use crate::error::{DecodeError, DecodeErrorKind};
use crate::text::{COMMENT_MARKER, Token};

pub const RNG_DIRECTIVE: &str = "@rng";

/// Returns true if `tag` survives a trip through the tokenizer unchanged.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && !tag.contains(char::is_whitespace) && !tag.contains(COMMENT_MARKER)
}

/// Encodes one draw as a newline-terminated line.
pub fn encode(value: i32, tag: &str) -> String {
    format!("{RNG_DIRECTIVE} {} {tag}\n", encode_int(value))
}

/// Decodes one draw and checks that it was recorded under `expected_tag`.
pub fn decode(tokens: &[Token<'_>], expected_tag: &str) -> Result<i32, DecodeError> {
    let [_, value, tag] = split(tokens, expected_tag)?;
    if tag.text != expected_tag {
        return Err(tag.error(DecodeErrorKind::RngTagMismatch {
            expected: expected_tag.to_string(),
        }));
    }
    decode_int(value)
}

/// Decodes one draw without a tag expectation.
pub fn decode_any<'a>(tokens: &[Token<'a>]) -> Result<(i32, &'a str), DecodeError> {
    let [_, value, tag] = split(tokens, "*")?;
    Ok((decode_int(value)?, tag.text))
}

fn split<'t, 'a>(
    tokens: &'t [Token<'a>],
    expected_tag: &str,
) -> Result<&'t [Token<'a>; 3], DecodeError> {
    let Some(head) = tokens.first() else {
        return Err(DecodeError::new(1, DecodeErrorKind::UnexpectedEof));
    };
    if head.text != RNG_DIRECTIVE {
        return Err(head.error(DecodeErrorKind::ExpectedRngDirective {
            tag: expected_tag.to_string(),
        }));
    }
    tokens
        .try_into()
        .map_err(|_| head.error(DecodeErrorKind::ExpectedArguments(2)))
}
