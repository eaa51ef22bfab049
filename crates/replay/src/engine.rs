//! The script engine: a record/replay state machine over one script file.
//!
//! The simulation drives the engine through four calls:
//! - [`ScriptEngine::get_decision`] asks for the next scripted decision
//! - [`ScriptEngine::record_decision`] reports the decision actually taken
//! - [`ScriptEngine::get_rng_input`] is the tap every random draw goes through
//! - [`ScriptEngine::delete_in_progress_recording`] abandons a recording
//!
//! # Modes
//!
//! | mode        | decisions            | draws                     | at end of script |
//! |-------------|----------------------|---------------------------|------------------|
//! | `Read`      | from script          | from script               | close, `Ignore`  |
//! | `ReadWrite` | from script          | from script               | `Write`          |
//! | `Write`     | caller, then recorded | live, then recorded      | -                |
//! | `Ignore`    | caller               | live                      | -                |
//!
//! No transition leaves `Ignore`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use game_core::Action;
use tracing::{debug, info};

use crate::codec::{ActionCodec, Header, rng};
use crate::config::{ScriptConfig, ScriptMode};
use crate::error::{Result, ScriptError};
use crate::file::{ScriptSink, ScriptSource};
use crate::live::{LiveSource, SystemRandom};

/// Open script resource, shaped by what the engine does with it.
enum Handle {
    Reading(ScriptSource<File>),
    Writing(ScriptSink),
}

/// Holds back `get_decision` for a fixed number of calls between reads.
#[derive(Clone, Copy, Debug, Default)]
struct Pacing {
    delay: u32,
    frame_counter: u32,
}

impl Pacing {
    /// Returns true if this call should yield without consulting the script.
    fn hold(&mut self) -> bool {
        if self.delay == 0 {
            return false;
        }
        if self.frame_counter < self.delay {
            self.frame_counter += 1;
            return true;
        }
        self.frame_counter = 0;
        false
    }
}

/// Record/replay engine for one session.
///
/// Every error is fatal for the session: once a call fails, the script can no
/// longer be trusted to line up with the simulation.
pub struct ScriptEngine<L = SystemRandom> {
    path: Option<PathBuf>,
    mode: ScriptMode,
    handle: Option<Handle>,
    header: Option<Header>,
    seed: Option<u32>,
    test_mode: bool,
    pacing: Pacing,
    max_line_length: usize,
    codec: ActionCodec,
    live: L,
}

impl ScriptEngine<SystemRandom> {
    /// Opens the configured script with an OS-seeded live source.
    pub fn from_config(config: &ScriptConfig) -> Result<Self> {
        Self::open(config, SystemRandom::new())
    }
}

impl<L: LiveSource> ScriptEngine<L> {
    /// Opens the configured script and consumes or writes its header.
    ///
    /// # Errors
    ///
    /// - `MissingPath` - a mode other than `Ignore` without a path
    /// - `Create` / `Open` - the script cannot be created or opened
    /// - `Decode` - the existing script's header is malformed
    pub fn open(config: &ScriptConfig, live: L) -> Result<Self> {
        let codec = ActionCodec::new();
        let path = match config.mode {
            ScriptMode::Ignore => None,
            mode => Some(config.path.clone().ok_or(ScriptError::MissingPath(mode))?),
        };

        let (mode, handle) = match (config.mode, path.as_deref()) {
            (ScriptMode::Write, Some(path)) => (
                ScriptMode::Write,
                Some(Handle::Writing(ScriptSink::create(
                    path,
                    config.max_line_length,
                )?)),
            ),
            (ScriptMode::Read, Some(path)) => (
                ScriptMode::Read,
                Some(Handle::Reading(ScriptSource::open(
                    path,
                    config.max_line_length,
                )?)),
            ),
            (ScriptMode::ReadWrite, Some(path)) => {
                match OpenOptions::new().read(true).write(true).open(path) {
                    Ok(file) => {
                        debug!("Opened script for replay then recording: {}", path.display());
                        let source = ScriptSource::new(path, file, config.max_line_length);
                        (ScriptMode::ReadWrite, Some(Handle::Reading(source)))
                    }
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {
                        debug!("No script to resume, recording fresh: {}", path.display());
                        let sink = ScriptSink::create(path, config.max_line_length)?;
                        (ScriptMode::Write, Some(Handle::Writing(sink)))
                    }
                    Err(source) => {
                        return Err(ScriptError::Open {
                            path: path.to_path_buf(),
                            source,
                        });
                    }
                }
            }
            _ => (ScriptMode::Ignore, None),
        };

        let mut engine = Self {
            path,
            mode,
            handle,
            header: None,
            seed: None,
            test_mode: config.test_mode,
            pacing: Pacing {
                delay: config.effective_delay(),
                frame_counter: 0,
            },
            max_line_length: config.max_line_length,
            codec,
            live,
        };
        engine.start()?;

        info!(
            "Script engine ready: mode={}, seed={:?}, test_mode={}",
            engine.mode, engine.seed, engine.test_mode
        );
        Ok(engine)
    }

    /// Engine that neither replays nor records.
    pub fn ignore(live: L) -> Result<Self> {
        Self::open(&ScriptConfig::ignore(), live)
    }

    /// Consumes or writes the header for the initial mode.
    fn start(&mut self) -> Result<()> {
        match self.handle.as_mut() {
            Some(Handle::Reading(source)) => {
                let header = source.read_header()?;
                match header {
                    Header::Seed(seed) => self.seed = Some(seed),
                    Header::TestMode => self.test_mode = true,
                }
                self.header = Some(header);
            }
            Some(Handle::Writing(sink)) => {
                let header = if self.test_mode {
                    Header::TestMode
                } else {
                    Header::Seed(self.live.seed())
                };
                sink.write_line(&header.encode())?;
                self.seed = header.seed();
                self.header = Some(header);
            }
            None => self.seed = Some(self.live.seed()),
        }
        Ok(())
    }

    /// Returns the next scripted decision, or `None` when the caller decides.
    ///
    /// Reaching the end of the script returns `None` once and leaves replay:
    /// `Read` closes the script and becomes `Ignore`, `ReadWrite` becomes
    /// `Write` so the session keeps recording into the same file.
    pub fn get_decision(&mut self) -> Result<Option<Action>> {
        if self.pacing.hold() {
            return Ok(None);
        }
        if !self.mode.is_replaying() {
            return Ok(None);
        }

        let action = self.read_action()?;
        if action.is_none() {
            self.finish_replay()?;
        }
        Ok(action)
    }

    /// Persists a decision taken by the caller. Only `Write` records.
    ///
    /// A line longer than the configured limit is refused with `Oversized`,
    /// since replay would reject it.
    pub fn record_decision(&mut self, action: &Action) -> Result<()> {
        if self.mode != ScriptMode::Write {
            return Ok(());
        }
        let line = self.codec.encode(action);
        self.sink().write_line(&line)
    }

    /// Tap for one random draw identified by `tag`.
    ///
    /// Replay modes return the recorded value after checking its tag. Other
    /// modes ask the live source; `Write` records the value before returning.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty or contains whitespace or `#`: such a tag
    /// could not be read back.
    pub fn get_rng_input(&mut self, tag: &str) -> Result<i32> {
        assert!(rng::is_valid_tag(tag), "invalid rng tag: {tag:?}");

        match self.mode {
            ScriptMode::Read | ScriptMode::ReadWrite => {
                let source = self.source();
                let record = source.expect_record()?;
                rng::decode(&record.tokens(), tag)
                    .map_err(|err| source.decode_error(record.number(), err))
            }
            ScriptMode::Write => {
                let value = self.live.draw(tag)?;
                self.sink().write_line(&rng::encode(value, tag))?;
                Ok(value)
            }
            ScriptMode::Ignore => self.live.draw(tag),
        }
    }

    /// Abandons a recording in progress: closes and deletes the script.
    ///
    /// Only `Write` deletes; scripts being replayed are never removed.
    pub fn delete_in_progress_recording(&mut self) -> Result<()> {
        if self.mode != ScriptMode::Write {
            return Ok(());
        }
        // Close before removing.
        self.handle = None;
        self.mode = ScriptMode::Ignore;
        if let Some(path) = &self.path {
            fs::remove_file(path).map_err(|source| ScriptError::Delete {
                path: path.clone(),
                source,
            })?;
            info!("Deleted in-progress recording: {}", path.display());
        }
        Ok(())
    }

    /// Sets the pacing delay, as if pacing were enabled in the configuration.
    pub fn set_delay(&mut self, delay: u32) {
        self.pacing = Pacing {
            delay,
            frame_counter: 0,
        };
    }

    pub fn mode(&self) -> ScriptMode {
        self.mode
    }

    /// Session seed. `None` for test-mode sessions.
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn header(&self) -> Option<Header> {
        self.header
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Line number of the last line read, while replaying.
    pub fn line_number(&self) -> Option<usize> {
        match &self.handle {
            Some(Handle::Reading(source)) => Some(source.line_number()),
            _ => None,
        }
    }

    fn read_action(&mut self) -> Result<Option<Action>> {
        let Some(Handle::Reading(source)) = self.handle.as_mut() else {
            unreachable!("{} mode without a readable script", self.mode);
        };
        let Some(record) = source.next_record()? else {
            return Ok(None);
        };
        self.codec
            .decode(&record.tokens())
            .map(Some)
            .map_err(|err| source.decode_error(record.number(), err))
    }

    fn finish_replay(&mut self) -> Result<()> {
        match self.mode {
            ScriptMode::Read => {
                self.handle = None;
                self.mode = ScriptMode::Ignore;
                info!("Script replay finished");
            }
            ScriptMode::ReadWrite => {
                let Some(Handle::Reading(source)) = self.handle.take() else {
                    unreachable!("read-write mode without a readable script");
                };
                let (path, file) = source.into_inner();
                self.handle = Some(Handle::Writing(ScriptSink::resume(
                    path,
                    file,
                    self.max_line_length,
                )?));
                self.mode = ScriptMode::Write;
                info!("Script replay finished, recording resumed");
            }
            ScriptMode::Write | ScriptMode::Ignore => {}
        }
        Ok(())
    }

    fn source(&mut self) -> &mut ScriptSource<File> {
        match self.handle.as_mut() {
            Some(Handle::Reading(source)) => source,
            _ => unreachable!("{} mode without a readable script", self.mode),
        }
    }

    fn sink(&mut self) -> &mut ScriptSink {
        match self.handle.as_mut() {
            Some(Handle::Writing(sink)) => sink,
            _ => unreachable!("{} mode without a writable script", self.mode),
        }
    }
}
