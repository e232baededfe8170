//! `highroller` is the presentation-free core of a dice-rolling app.
//!
//! It provides the pieces an embedding UI composes into the single screen:
//! - Roll record construction with final values fixed at creation time
//! - A tick-driven reveal sequencer (the "slot machine" settle effect)
//! - Whole-file JSON persistence of the roll history
//! - Key-value persistence of the selected die type and dice amount
//!
//! The embedder supplies a data directory, drives [`session::RollSession::on_tick`]
//! from a ~100 ms timer, and maps returned [`sequencer::TickOutcome`]s to
//! haptic pulses. No rendering, timing, or platform code lives here.

/// Persistent per-user configuration (`Settings.json`).
pub mod config;
/// Error types surfaced at the crate boundary.
pub mod error;
/// UUID generation for roll record identifiers.
pub mod id;
/// The roll record entity and supported die types.
pub mod record;
/// Tick-driven reveal state machine.
pub mod sequencer;
/// The session controller tying configuration, sequencer, and store together.
pub mod session;
/// Roll history persistence (`SavedRolls.json`).
pub mod store;
