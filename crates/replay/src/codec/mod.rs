//! Bidirectional codecs between typed values and script text.
//!
//! Every decoder works on the tokens of one line and reports failures with
//! the column of the offending token. Every encoder emits one complete,
//! newline-terminated line.

mod action;
pub mod header;
pub mod numeric;
pub mod rng;
mod vocab;

pub use action::ActionCodec;
pub use header::Header;
pub use vocab::Vocabulary;
