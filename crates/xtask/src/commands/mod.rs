//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_script;
mod read_script;

pub use check_script::CheckScript;
pub use read_script::ReadScript;
