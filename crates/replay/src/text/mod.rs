//! Line-oriented text handling for script files.
//!
//! - [`LineSource`] splits a byte stream into validated text lines
//! - [`tokenize`] splits one line into column-tagged tokens

mod line;
mod token;

pub use line::LineSource;
pub use token::{COMMENT_MARKER, Token, tokenize};
