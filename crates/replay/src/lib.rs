//! Deterministic record-and-replay scripts for the turn-based simulation.
//!
//! A script is a text file holding a header followed by every decision and
//! every random draw of one session, one per line. Replaying a script feeds
//! the simulation the same decisions and draws in the same order, so the
//! session reproduces exactly.
//!
//! Modules are organized bottom-up:
//! - [`text`] splits bytes into lines and lines into column-tagged tokens
//! - [`codec`] converts decisions, draws and headers to and from tokens
//! - [`file`] binds readers and writers to a script path for diagnostics
//! - [`engine`] hosts the record/replay state machine
//! - [`reader`] decodes whole scripts offline
//! - [`live`] provides seeds and draws outside of replay
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod file;
pub mod live;
pub mod reader;
pub mod text;

pub use codec::{ActionCodec, Header};
pub use config::{DEFAULT_MAX_LINE_LENGTH, ScriptConfig, ScriptMode};
pub use engine::ScriptEngine;
pub use error::{DecodeError, DecodeErrorKind, Result, ScriptError};
pub use live::{ConsoleInput, LiveSource, SystemRandom};
pub use reader::{ScriptEntry, ScriptLine, ScriptReader};
