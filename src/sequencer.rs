//! Tick-driven reveal state machine.
//!
//! The sequencer produces the "slot machine" effect: every tick re-randomizes
//! the not-yet-settled display slots and settles exactly one die to its final
//! value. The final values come from the [`RollRecord`] fixed at construction,
//! so display timing can never influence what gets persisted — the per-tick
//! randomness is cosmetic and discarded.
//!
//! The sequencer owns no clock. The embedder drives [`RollSequencer::advance`]
//! from its own timer (nominally [`TICK_INTERVAL`]) and should cancel that
//! timer once [`RollSequencer::is_revealing`] goes false.

use crate::record::RollRecord;
use rand::Rng;
use std::time::Duration;

/// Nominal cadence for the embedder's reveal timer.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Lifecycle phase of the reveal.
pub enum Phase {
    /// No roll has been started.
    #[default]
    Idle,
    /// A roll is in progress; some dice are still showing filler values.
    Revealing,
    /// All dice have settled to their final values.
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of starting a roll.
pub enum StartOutcome {
    /// The reveal is running; the embedder should schedule ticks.
    Revealing,
    /// The roll completed immediately (zero dice); no tick is needed.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of one tick. [`TickOutcome::Settled`] and [`TickOutcome::Finished`]
/// each correspond to one settle event, i.e. one haptic pulse.
pub enum TickOutcome {
    /// Nothing to do (no reveal in progress). Ticks are idempotent here.
    Idle,
    /// The die at this index settled; more remain.
    Settled(usize),
    /// The last die settled and the reveal is complete. Emitted exactly once
    /// per roll; the completed record should now be persisted.
    Finished,
}

#[derive(Debug, Default)]
/// State machine driving the incremental reveal of one roll.
pub struct RollSequencer {
    phase: Phase,
    record: Option<RollRecord>,
    display: Vec<u32>,
    progress: usize,
}

impl RollSequencer {
    /// Create a sequencer with no active roll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `record`, replacing any roll in progress.
    ///
    /// Every display slot starts as a random filler value. A zero-count
    /// record transitions straight to [`Phase::Complete`] without consuming
    /// a tick.
    pub fn start(&mut self, record: RollRecord, rng: &mut impl Rng) -> StartOutcome {
        self.progress = 0;
        if record.rolls.is_empty() {
            self.display.clear();
            self.record = Some(record);
            self.phase = Phase::Complete;
            return StartOutcome::Finished;
        }
        self.display = record
            .rolls
            .iter()
            .map(|_| rng.gen_range(1..=record.die_type))
            .collect();
        self.record = Some(record);
        self.phase = Phase::Revealing;
        StartOutcome::Revealing
    }

    /// Advance the reveal by one tick.
    ///
    /// Re-randomizes filler for all unsettled slots, then settles the slot at
    /// the current progress index to its final value. A no-op outside
    /// [`Phase::Revealing`].
    pub fn advance(&mut self, rng: &mut impl Rng) -> TickOutcome {
        if self.phase != Phase::Revealing {
            return TickOutcome::Idle;
        }
        let Some(record) = self.record.as_ref() else {
            return TickOutcome::Idle;
        };

        let settling = self.progress;
        for (i, slot) in self.display.iter_mut().enumerate().skip(settling) {
            if i == settling {
                *slot = record.rolls.get(i).copied().unwrap_or(*slot);
            } else {
                *slot = rng.gen_range(1..=record.die_type);
            }
        }
        self.progress += 1;

        if self.progress == self.display.len() {
            self.phase = Phase::Complete;
            TickOutcome::Finished
        } else {
            TickOutcome::Settled(settling)
        }
    }

    /// Settle every die immediately (reduced-motion / assistive path).
    ///
    /// Returns `true` if this call completed the reveal, so the completion
    /// signal still fires at most once per roll. A no-op outside
    /// [`Phase::Revealing`].
    pub fn finish_now(&mut self) -> bool {
        if self.phase != Phase::Revealing {
            return false;
        }
        if let Some(record) = self.record.as_ref() {
            self.display.clone_from(&record.rolls);
            self.progress = self.display.len();
        }
        self.phase = Phase::Complete;
        true
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a reveal is in progress. Doubles as the embedder's
    /// disable-input signal.
    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        matches!(self.phase, Phase::Revealing)
    }

    /// Number of dice that have settled so far.
    #[must_use]
    pub const fn progress(&self) -> usize {
        self.progress
    }

    /// Values to display right now: settled finals up to the progress index,
    /// transient filler beyond it.
    #[must_use]
    pub fn display(&self) -> &[u32] {
        &self.display
    }

    /// The record being revealed, if any.
    #[must_use]
    pub fn record(&self) -> Option<&RollRecord> {
        self.record.as_ref()
    }
}
