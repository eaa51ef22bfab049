//! Read and inspect recorded scripts
//!
//! Decodes a script offline and displays its header, decisions and draws.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::collections::HashMap;
use std::path::PathBuf;

use game_core::Action;
use replay::{Header, ScriptEntry, ScriptLine, ScriptReader};

/// Read and inspect a script file
#[derive(Parser)]
pub struct ReadScript {
    /// Script file to read
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Limit number of lines to display (0 = unlimited)
    #[arg(short, long, default_value = "100")]
    limit: usize,

    /// Skip first N lines
    #[arg(long, default_value = "0")]
    skip: usize,

    /// Reject lines longer than this many bytes
    #[arg(long, default_value_t = replay::DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (decision kinds, draw tags and counts)
    Summary,
    /// List all lines
    List,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

/// Script line as emitted in JSON output
#[derive(Debug, serde::Serialize)]
struct EntryView {
    line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rng: Option<RngView>,
}

#[derive(Debug, serde::Serialize)]
struct RngView {
    value: i32,
    tag: String,
}

impl From<&ScriptEntry> for EntryView {
    fn from(entry: &ScriptEntry) -> Self {
        let (action, rng) = match &entry.content {
            ScriptLine::Decision(action) => (Some(*action), None),
            ScriptLine::Rng { value, tag } => (
                None,
                Some(RngView {
                    value: *value,
                    tag: tag.clone(),
                }),
            ),
        };
        Self {
            line: entry.line,
            action,
            rng,
        }
    }
}

impl ReadScript {
    pub fn execute(self) -> Result<()> {
        if !self.path.exists() {
            anyhow::bail!("Script not found: {}", self.path.display());
        }

        let mut reader = ScriptReader::open_with_limit(&self.path, self.max_line_length)
            .with_context(|| format!("Failed to open script: {}", self.path.display()))?;
        let header = reader.header();
        let entries = reader.read_all()?;
        tracing::debug!("Decoded {} script lines", entries.len());

        // Print header
        println!("{} {}", style("Script:").bold().cyan(), self.path.display());
        println!("{} {}", style("Header:").bold().cyan(), describe_header(header));
        println!(
            "{} {}",
            style("Total Lines:").bold().cyan(),
            entries.len()
        );
        println!();

        // Apply skip/limit
        let entries: Vec<_> = entries
            .into_iter()
            .skip(self.skip)
            .take(if self.limit == 0 {
                usize::MAX
            } else {
                self.limit
            })
            .collect();

        if self.skip > 0 {
            println!("{} {}", style("Skipped:").bold().cyan(), self.skip);
        }
        if self.limit > 0 && entries.len() == self.limit {
            println!("{} {}", style("Showing:").bold().cyan(), entries.len());
            println!();
        }

        match self.format {
            OutputFormat::Summary => print_summary(&entries),
            OutputFormat::List => print_list(&entries),
            OutputFormat::Json => print_json(&entries)?,
            OutputFormat::Debug => print_debug(&entries),
        }

        Ok(())
    }
}

fn describe_header(header: Header) -> String {
    match header {
        Header::Seed(seed) => format!("seed {seed:08x}"),
        Header::TestMode => "test mode".to_string(),
    }
}

fn print_summary(entries: &[ScriptEntry]) {
    println!("{}", style("=== Script Summary ===").bold().green());
    println!();

    let mut decisions: HashMap<&'static str, usize> = HashMap::new();
    let mut draws: HashMap<&str, usize> = HashMap::new();
    let mut cheats = 0;
    for entry in entries {
        match &entry.content {
            ScriptLine::Decision(action) => {
                let kind = action.kind();
                if kind.is_cheat() {
                    cheats += 1;
                }
                *decisions.entry(kind.name()).or_insert(0) += 1;
            }
            ScriptLine::Rng { tag, .. } => *draws.entry(tag.as_str()).or_insert(0) += 1,
        }
    }

    print_counts("Decision Distribution:", decisions);
    print_counts("Draw Tags:", draws);

    if cheats > 0 {
        println!("{} {}", style("Cheat Decisions:").bold().yellow(), cheats);
        println!();
    }

    // Line range
    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        println!("{}", style("Line Range:").bold().yellow());
        println!("  First: {}", first.line);
        println!("  Last: {}", last.line);
        println!();
    }
}

fn print_counts(title: &str, counts: HashMap<&str, usize>) {
    // Sort by count (descending), then name
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("{}", style(title).bold().yellow());
    if counts.is_empty() {
        println!("  (none)");
    }
    for (name, count) in counts {
        println!("  {}: {}", name, count);
    }
    println!();
}

fn print_list(entries: &[ScriptEntry]) {
    println!("{}", style("=== Script Lines ===").bold().green());
    println!();

    for entry in entries {
        match &entry.content {
            ScriptLine::Decision(action) => {
                println!("{} {}: {:?}", style("Line").bold(), entry.line, action)
            }
            ScriptLine::Rng { value, tag } => println!(
                "{} {}: {} {} = {}",
                style("Line").bold(),
                entry.line,
                style("rng").dim(),
                tag,
                value
            ),
        }
    }
}

fn print_json(entries: &[ScriptEntry]) -> Result<()> {
    let views: Vec<EntryView> = entries.iter().map(EntryView::from).collect();
    let json = serde_json::to_string_pretty(&views).context("Failed to serialize script to JSON")?;
    println!("{}", json);
    Ok(())
}

fn print_debug(entries: &[ScriptEntry]) {
    for entry in entries {
        println!("{:#?}", entry);
    }
}
