//! Path-aware handles on script files.
//!
//! [`ScriptSource`] reads records and turns positioned decode failures into
//! `path:line:col` diagnostics. [`ScriptSink`] appends lines and flushes each
//! one before returning.

mod sink;
mod source;

pub use sink::ScriptSink;
pub use source::{Record, ScriptSource};
