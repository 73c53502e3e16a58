//! Session state driving trace runs.
//!
//! A session owns the single active sequence. Exactly one trace run may
//! be in flight at a time; every board-mutating operation is refused
//! while one is, and becomes available again once the run's steps are
//! fully consumed or the run is aborted.
//!
//! The engine sorts its working copy eagerly, so the session keeps the
//! pre-run sequence as canonical and advances it only by consumed swap
//! steps. Aborting mid-run therefore leaves the board in exactly the
//! partially-sorted state the consumed prefix produced.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sortboard_engine::{Algorithm, DEFAULT_COUNT, Step, Trace, generate, seeded_rng, shuffle};
use sortboard_foundation::{Error, Result, Sequence, SequenceFormat};
use sortboard_parser::{parse, serialize};

use crate::config::DelayConfig;
use crate::serialize::{load_from_file, save_to_file};

/// Session state for an interactive sorting session.
pub struct Session {
    /// The canonical board.
    sequence: Sequence,
    /// The selected algorithm.
    algorithm: Algorithm,
    /// Pacing between rendered steps.
    delay: DelayConfig,
    /// RNG for generation and shuffling.
    rng: ChaCha8Rng,
    /// The in-flight trace, if a run is active.
    active: Option<Trace>,
}

impl Session {
    /// Creates a session with an empty board and an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a deterministic session from a seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(seeded_rng(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            sequence: Sequence::from_keys(&[]),
            algorithm: Algorithm::default(),
            delay: DelayConfig::default(),
            rng,
            active: None,
        }
    }

    /// Returns the canonical board.
    #[must_use]
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Returns the selected algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the pacing configuration.
    #[must_use]
    pub const fn delay(&self) -> DelayConfig {
        self.delay
    }

    /// Returns true while a trace run is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the number of steps the active run has not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.active.as_ref().map_or(0, Trace::remaining)
    }

    /// Selects the algorithm for the next run.
    ///
    /// # Errors
    ///
    /// Refused while a run is in flight.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        self.ensure_idle()?;
        self.algorithm = algorithm;
        Ok(())
    }

    /// Sets the pacing between steps.
    ///
    /// Pacing is presentation-only, so it may change even mid-run.
    pub fn set_delay(&mut self, delay: DelayConfig) {
        self.delay = delay;
    }

    /// Replaces the board with a parsed textual representation.
    ///
    /// # Errors
    ///
    /// Refused while a run is in flight.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.ensure_idle()?;
        self.sequence = parse(text);
        Ok(())
    }

    /// Returns the board's textual representation.
    #[must_use]
    pub fn text(&self) -> String {
        serialize(&self.sequence)
    }

    /// Replaces the board with `count` random elements.
    ///
    /// # Errors
    ///
    /// Refused while a run is in flight.
    pub fn generate_board(&mut self, count: usize, format: SequenceFormat) -> Result<()> {
        self.ensure_idle()?;
        self.sequence = generate(count, format, &mut self.rng);
        Ok(())
    }

    /// Replaces the board with the default count of random bare elements.
    ///
    /// # Errors
    ///
    /// Refused while a run is in flight.
    pub fn generate_default(&mut self) -> Result<()> {
        self.generate_board(DEFAULT_COUNT, SequenceFormat::Bare)
    }

    /// Shuffles the board in place.
    ///
    /// # Errors
    ///
    /// Refused while a run is in flight.
    pub fn shuffle_board(&mut self) -> Result<()> {
        self.ensure_idle()?;
        shuffle(&mut self.sequence, &mut self.rng)
    }

    /// Starts a trace run of the selected algorithm.
    ///
    /// The engine runs eagerly against a working copy; the canonical
    /// board advances only as steps are consumed through [`Session::step`].
    ///
    /// # Errors
    ///
    /// Refused while another run is in flight.
    pub fn start(&mut self) -> Result<()> {
        self.ensure_idle()?;
        let mut working = self.sequence.clone();
        let trace = self.algorithm.run(&mut working)?;
        self.active = Some(trace);
        Ok(())
    }

    /// Consumes the next step of the active run.
    ///
    /// Swap steps are applied to the canonical board as they are
    /// consumed. Returns `None` once the trace is drained, which ends
    /// the run and re-enables board mutations.
    ///
    /// # Errors
    ///
    /// Returns an error if no run is in flight, or if a consumed swap
    /// step carries out-of-range indices (unreachable for traces the
    /// engine produced for this board).
    pub fn step(&mut self) -> Result<Option<Step>> {
        let Some(trace) = self.active.as_mut() else {
            return Err(Error::no_active_run());
        };
        match trace.next_step() {
            Some(step) => {
                if let Step::Swap { i, j } = step {
                    self.sequence.swap(i, j)?;
                }
                Ok(Some(step))
            }
            None => {
                self.active = None;
                Ok(None)
            }
        }
    }

    /// Aborts the active run, discarding its remaining steps.
    ///
    /// The board keeps whatever partially-sorted state the consumed
    /// steps produced; no consistency is guaranteed. Returns true if a
    /// run was discarded.
    pub fn abort(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Saves the board to a MessagePack snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_to_file(&self.sequence, path)
    }

    /// Replaces the board from a MessagePack snapshot file.
    ///
    /// # Errors
    ///
    /// Refused while a run is in flight; returns an error if the file
    /// cannot be read or decoded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.ensure_idle()?;
        self.sequence = load_from_file(path)?;
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.active.is_some() {
            return Err(Error::run_in_progress());
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
