//! Script engine configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Requested behaviour of the script engine.
///
/// The same names describe the engine's live state: a `ReadWrite` request
/// against a missing file starts in `Write`, and replay modes fall through to
/// `Write` or `Ignore` once the script is exhausted.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ScriptMode {
    /// Record a fresh script, truncating any existing file.
    Write,
    /// Replay an existing script, then stop persisting.
    Read,
    /// Replay an existing script, then keep appending to it.
    ReadWrite,
    /// Neither replay nor record.
    #[default]
    Ignore,
}

impl ScriptMode {
    /// Returns true while decisions come from the script.
    pub const fn is_replaying(self) -> bool {
        matches!(self, ScriptMode::Read | ScriptMode::ReadWrite)
    }
}

/// Default hard limit on the byte length of one script line.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 256;

/// Script engine configuration.
#[derive(Clone, Debug)]
pub struct ScriptConfig {
    /// Script file. Required for every mode except `Ignore`.
    pub path: Option<PathBuf>,
    pub mode: ScriptMode,
    /// Write an `@test` header instead of a seed when recording.
    pub test_mode: bool,
    /// Number of `get_decision` calls held back between script reads.
    pub delay: u32,
    /// Enables `delay`. Headless sessions leave this off.
    pub pacing: bool,
    /// Lines longer than this many bytes are rejected.
    pub max_line_length: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            path: None,
            mode: ScriptMode::Ignore,
            test_mode: false,
            delay: 0,
            pacing: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl ScriptConfig {
    pub fn new(mode: ScriptMode, path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            mode,
            ..Self::default()
        }
    }

    pub fn write(path: impl Into<PathBuf>) -> Self {
        Self::new(ScriptMode::Write, path)
    }

    pub fn read(path: impl Into<PathBuf>) -> Self {
        Self::new(ScriptMode::Read, path)
    }

    pub fn read_write(path: impl Into<PathBuf>) -> Self {
        Self::new(ScriptMode::ReadWrite, path)
    }

    pub fn ignore() -> Self {
        Self::default()
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Enables pacing with the given delay.
    pub fn with_pacing(mut self, delay: u32) -> Self {
        self.pacing = true;
        self.delay = delay;
        self
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Delay applied by the engine, zero unless pacing is enabled.
    pub fn effective_delay(&self) -> u32 {
        if self.pacing { self.delay } else { 0 }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCRIPT_PATH` - Script file path
    /// - `SCRIPT_MODE` - `write`, `read`, `read-write` or `ignore` (default: ignore)
    /// - `SCRIPT_TEST_MODE` - Record an `@test` header (default: false)
    /// - `SCRIPT_DELAY` - Calls held back between script reads (default: 0)
    /// - `SCRIPT_PACING` - Apply `SCRIPT_DELAY` (default: false)
    /// - `SCRIPT_MAX_LINE_LENGTH` - Line length limit in bytes (default: 256)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("SCRIPT_PATH")
            && !path.is_empty()
        {
            config.path = Some(PathBuf::from(path));
        }
        if let Some(mode) = read_env::<ScriptMode>("SCRIPT_MODE") {
            config.mode = mode;
        }
        if let Some(test_mode) = read_env_bool("SCRIPT_TEST_MODE") {
            config.test_mode = test_mode;
        }
        if let Some(delay) = read_env::<u32>("SCRIPT_DELAY") {
            config.delay = delay;
        }
        if let Some(pacing) = read_env_bool("SCRIPT_PACING") {
            config.pacing = pacing;
        }
        if let Some(limit) = read_env::<usize>("SCRIPT_MAX_LINE_LENGTH") {
            config.max_line_length = limit.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
