//! The session controller.
//!
//! [`RollSession`] is what the embedding UI holds: it owns the configuration,
//! the in-memory history, and the reveal sequencer, and mediates every user
//! intent (pick a die, start a roll, tick, clear). All state transitions
//! happen on the embedder's single UI thread; nothing here blocks or spawns.
//!
//! Persistence policy: read failures degrade silently to defaults / empty
//! history, and write failures are logged and swallowed — no persistence
//! error ever reaches the embedder or blocks the next roll.

use crate::config::{ConfigStore, RollConfig};
use crate::error::RollError;
use crate::record::{RollRecord, DIE_OPTIONS, MAX_DICE};
use crate::sequencer::{RollSequencer, StartOutcome, TickOutcome};
use crate::store::HistoryStore;
use rand::Rng;
use std::path::Path;

#[derive(Debug)]
/// Orchestrates configuration, reveal sequencing, and history persistence.
pub struct RollSession {
    config: RollConfig,
    config_store: ConfigStore,
    history: Vec<RollRecord>,
    history_store: HistoryStore,
    sequencer: RollSequencer,
}

impl RollSession {
    /// Open a session against `data_dir`, loading the persisted configuration
    /// and history. Infallible by design: unreadable state degrades to the
    /// defaults and an empty history.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        let config_store = ConfigStore::new(data_dir);
        let history_store = HistoryStore::new(data_dir);
        Self {
            config: config_store.load(),
            config_store,
            history: history_store.load(),
            history_store,
            sequencer: RollSequencer::new(),
        }
    }

    /// Select a die type and dice amount, persisting the choice. Takes effect
    /// on the next roll only.
    ///
    /// # Errors
    /// Returns [`RollError::UnsupportedDie`] if `die_sides` is not one of
    /// [`DIE_OPTIONS`], or [`RollError::CountOutOfRange`] if `roll_amount`
    /// is outside `1..=20`. Invalid input leaves the configuration unchanged.
    pub fn configure(&mut self, die_sides: u32, roll_amount: u32) -> Result<(), RollError> {
        if !DIE_OPTIONS.contains(&die_sides) {
            return Err(RollError::UnsupportedDie(die_sides));
        }
        if roll_amount == 0 || roll_amount > MAX_DICE {
            return Err(RollError::CountOutOfRange(roll_amount));
        }
        self.config = RollConfig {
            die_sides,
            roll_amount,
        };
        if let Err(err) = self.config_store.save(self.config) {
            log::warn!("failed to persist configuration: {err}");
        }
        Ok(())
    }

    /// Start a roll with the current configuration.
    ///
    /// The record (with its final values already drawn) is prepended to the
    /// in-memory history immediately, so it shows under previous results
    /// while the reveal runs. With `reduce_motion` set, the reveal is skipped
    /// and the completed roll is persisted synchronously.
    ///
    /// # Errors
    /// Returns [`RollError::ZeroFacedDie`] if record construction is handed a
    /// zero-faced die; `configure` makes this unreachable in normal flows.
    pub fn roll_requested(
        &mut self,
        rng: &mut impl Rng,
        reduce_motion: bool,
    ) -> Result<(), RollError> {
        let record = RollRecord::roll(self.config.die_sides, self.config.roll_amount, rng)?;
        self.history.insert(0, record.clone());
        let outcome = self.sequencer.start(record, rng);
        if reduce_motion {
            self.sequencer.finish_now();
            self.save_history();
        } else if outcome == StartOutcome::Finished {
            self.save_history();
        }
        Ok(())
    }

    /// Forward one timer tick to the sequencer. On the final settle the full
    /// history is persisted. The returned outcome tells the embedder whether
    /// to fire a haptic pulse and whether the reveal is over.
    pub fn on_tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        let outcome = self.sequencer.advance(rng);
        if outcome == TickOutcome::Finished {
            self.save_history();
        }
        outcome
    }

    /// Empty the in-memory history. Does not touch the file; call
    /// [`RollSession::persist`] to save the cleared state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Persist the current in-memory history. Write failures are logged and
    /// swallowed.
    pub fn persist(&self) {
        self.save_history();
    }

    fn save_history(&self) {
        if let Err(err) = self.history_store.save(&self.history) {
            log::warn!(
                "failed to persist roll history to {}: {err}",
                self.history_store.path().display()
            );
        }
    }

    /// Past rolls, most-recent-first. During a reveal this already includes
    /// the roll in progress.
    #[must_use]
    pub fn history(&self) -> &[RollRecord] {
        &self.history
    }

    /// The record currently shown in the result grid, if a roll was started.
    #[must_use]
    pub fn current_roll(&self) -> Option<&RollRecord> {
        self.sequencer.record()
    }

    /// Values for the result grid: settled finals plus transient filler.
    #[must_use]
    pub fn display_values(&self) -> &[u32] {
        self.sequencer.display()
    }

    /// Whether the embedder should disable input (a reveal is running).
    #[must_use]
    pub const fn is_input_locked(&self) -> bool {
        self.sequencer.is_revealing()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> RollConfig {
        self.config
    }
}
