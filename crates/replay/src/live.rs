//! Live inputs used when decisions and draws do not come from a script.
//!
//! - [`SystemRandom`]: OS-seeded (or explicitly seeded) `StdRng`
//! - [`ConsoleInput`]: prompts for each draw and blocks on a typed number

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, ScriptError};

/// Source of session seeds and RNG draws outside of replay.
pub trait LiveSource {
    /// Draws a fresh session seed.
    fn seed(&mut self) -> u32;

    /// Produces the value for one tagged draw.
    fn draw(&mut self, tag: &str) -> Result<i32>;
}

impl<L: LiveSource + ?Sized> LiveSource for Box<L> {
    fn seed(&mut self) -> u32 {
        (**self).seed()
    }

    fn draw(&mut self, tag: &str) -> Result<i32> {
        (**self).draw(tag)
    }
}

/// Pseudo-random live source.
#[derive(Clone, Debug)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    /// Seeds from operating system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source, for tests and reproducible tooling.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveSource for SystemRandom {
    fn seed(&mut self) -> u32 {
        self.rng.random()
    }

    fn draw(&mut self, _tag: &str) -> Result<i32> {
        Ok(self.rng.random())
    }
}

/// Interactive source: prints each tag and reads the value from a line of input.
///
/// Seeds still come from operating system entropy.
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, tag: &str) -> io::Result<String> {
        writeln!(self.output, "{tag}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl<R: BufRead, W: Write> LiveSource for ConsoleInput<R, W> {
    fn seed(&mut self) -> u32 {
        rand::random()
    }

    fn draw(&mut self, tag: &str) -> Result<i32> {
        let line = self
            .prompt(tag)
            .map_err(|err| ScriptError::LiveInput(format!("{tag}: {err}")))?;
        if line.is_empty() {
            return Err(ScriptError::LiveInput(format!("{tag}: end of input")));
        }
        line.trim()
            .parse()
            .map_err(|_| ScriptError::LiveInput(format!("{tag}: not an integer: {:?}", line.trim())))
    }
}
