//! Validate script files
//!
//! Decodes every line of each script and reports the first diagnostic.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};

use replay::ScriptReader;

/// Validate one or more script files
#[derive(Parser, Debug)]
pub struct CheckScript {
    /// Script files to check
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Reject lines longer than this many bytes
    #[arg(long, default_value_t = replay::DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,
}

impl CheckScript {
    pub fn execute(self) -> Result<()> {
        for path in &self.paths {
            match check(path, self.max_line_length) {
                Ok(lines) => println!(
                    "{} {} ({} lines)",
                    style("✓").green().bold(),
                    path.display(),
                    lines
                ),
                Err(err) => {
                    eprintln!("{} {}", style("✗").red().bold(), err);
                    anyhow::bail!("Script check failed: {}", path.display());
                }
            }
        }
        Ok(())
    }
}

/// Returns the number of body lines in a well-formed script.
fn check(path: &Path, max_line_length: usize) -> replay::Result<usize> {
    let mut reader = ScriptReader::open_with_limit(path, max_line_length)?;
    Ok(reader.read_all()?.len())
}
