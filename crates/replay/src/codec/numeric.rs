//! Exact text encodings for the numbers that appear in scripts.
//!
//! - signed 32-bit integers: decimal, optional leading `-`
//! - unsigned 32-bit integers: exactly 8 lowercase hex digits
//! - 256-bit item identifiers: exactly 64 lowercase hex digits

use game_core::{Coord, ItemId};

use crate::error::{DecodeError, DecodeErrorKind};
use crate::text::Token;

const UINT32_DIGITS: usize = 8;
const CHUNK_DIGITS: usize = 16;
const ITEM_ID_DIGITS: usize = CHUNK_DIGITS * ItemId::CHUNKS;

pub fn encode_int(value: i32) -> String {
    value.to_string()
}

/// Parses a decimal `i32`, including `-2147483648`.
pub fn decode_int(token: &Token<'_>) -> Result<i32, DecodeError> {
    let mut chars = token.text.chars().peekable();
    let negative = chars.next_if_eq(&'-').is_some();
    let start = usize::from(negative);
    if chars.peek().is_none() {
        return Err(token.error_at(start, DecodeErrorKind::MissingDigits));
    }

    let limit = if negative {
        -i64::from(i32::MIN)
    } else {
        i64::from(i32::MAX)
    };
    let mut magnitude: i64 = 0;
    for (index, c) in chars.enumerate() {
        let offset = start + index;
        let digit = c
            .to_digit(10)
            .ok_or_else(|| token.error_at(offset, DecodeErrorKind::DecimalDigit))?;
        magnitude = magnitude * 10 + i64::from(digit);
        if magnitude > limit {
            return Err(token.error_at(offset, DecodeErrorKind::IntegerOverflow));
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    // The limit check above keeps the value in range.
    Ok(value as i32)
}

pub fn encode_uint32(value: u32) -> String {
    format!("{value:08x}")
}

pub fn decode_uint32(token: &Token<'_>) -> Result<u32, DecodeError> {
    if token.text.chars().count() != UINT32_DIGITS {
        return Err(token.error(DecodeErrorKind::HexLength("uint32")));
    }
    let mut value = 0u32;
    for (index, c) in token.text.chars().enumerate() {
        value = (value << 4) | parse_nibble(token, index, c)? as u32;
    }
    Ok(value)
}

pub fn encode_item_id(id: &ItemId) -> String {
    id.chunks()
        .iter()
        .map(|chunk| format!("{chunk:016x}"))
        .collect()
}

pub fn decode_item_id(token: &Token<'_>) -> Result<ItemId, DecodeError> {
    if token.text.chars().count() != ITEM_ID_DIGITS {
        return Err(token.error(DecodeErrorKind::HexLength("uint256")));
    }
    let mut chunks = [0u64; ItemId::CHUNKS];
    for (index, c) in token.text.chars().enumerate() {
        let chunk = &mut chunks[index / CHUNK_DIGITS];
        *chunk = (*chunk << 4) | parse_nibble(token, index, c)?;
    }
    Ok(ItemId::new(chunks))
}

pub fn decode_coord(x: &Token<'_>, y: &Token<'_>) -> Result<Coord, DecodeError> {
    Ok(Coord::new(decode_int(x)?, decode_int(y)?))
}

/// Lowercase hex only: uppercase digits would break the text round trip.
fn parse_nibble(token: &Token<'_>, index: usize, c: char) -> Result<u64, DecodeError> {
    match c {
        '0'..='9' | 'a'..='f' => Ok(u64::from(c.to_digit(16).unwrap_or_default())),
        _ => Err(token.error_at(index, DecodeErrorKind::HexDigit)),
    }
}
