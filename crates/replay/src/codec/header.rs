//! The header line every script starts with.

use super::numeric::{decode_uint32, encode_uint32};
use crate::error::{DecodeError, DecodeErrorKind};
use crate::text::Token;

pub const SEED_DIRECTIVE: &str = "@seed";
pub const TEST_MODE_DIRECTIVE: &str = "@test";

/// How the recorded session was seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Header {
    /// Session seeded from this value.
    Seed(u32),
    /// Session ran in test mode, without a seed.
    TestMode,
}

impl Header {
    pub fn seed(&self) -> Option<u32> {
        match self {
            Header::Seed(seed) => Some(*seed),
            Header::TestMode => None,
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Header::Seed(seed) => format!("{SEED_DIRECTIVE} {}\n", encode_uint32(*seed)),
            Header::TestMode => format!("{TEST_MODE_DIRECTIVE}\n"),
        }
    }

    pub fn decode(tokens: &[Token<'_>]) -> Result<Self, DecodeError> {
        let Some((head, args)) = tokens.split_first() else {
            return Err(DecodeError::new(1, DecodeErrorKind::UnexpectedEof));
        };
        match head.text {
            SEED_DIRECTIVE => match args {
                [seed] => Ok(Header::Seed(decode_uint32(seed)?)),
                _ => Err(head.error(DecodeErrorKind::ExpectedArguments(1))),
            },
            TEST_MODE_DIRECTIVE => match args {
                [] => Ok(Header::TestMode),
                _ => Err(head.error(DecodeErrorKind::ExpectedArguments(0))),
            },
            _ => Err(head.error(DecodeErrorKind::ExpectedHeader)),
        }
    }
}
