//! The roll record entity.
//!
//! A [`RollRecord`] captures one completed roll: the die type, how many dice
//! were thrown, and the resulting face values. Values are drawn once, at
//! construction; the reveal animation only controls when the UI shows them.

use crate::error::RollError;
use crate::id;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Face counts selectable in the UI. The entity itself accepts any positive
/// face count; this set is enforced at the configuration boundary.
pub const DIE_OPTIONS: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// Upper bound on dice per roll, enforced at the configuration boundary.
pub const MAX_DICE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One completed roll, as persisted in `SavedRolls.json`.
pub struct RollRecord {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// Number of faces on the die.
    #[serde(rename = "type")]
    pub die_type: u32,
    /// Number of dice rolled.
    #[serde(rename = "number")]
    pub count: u32,
    /// Final face values, one per die, each in `1..=die_type`.
    pub rolls: Vec<u32>,
}

impl RollRecord {
    /// Roll `count` dice with `die_type` faces each.
    ///
    /// All final values are drawn here, up front. A zero `count` yields a
    /// well-defined empty record (the sequencer completes it without ticks);
    /// the configuration boundary keeps user flows from requesting one.
    ///
    /// # Errors
    /// Returns [`RollError::ZeroFacedDie`] for `die_type == 0`.
    pub fn roll(die_type: u32, count: u32, rng: &mut impl Rng) -> Result<Self, RollError> {
        if die_type == 0 {
            return Err(RollError::ZeroFacedDie);
        }
        let rolls = (0..count).map(|_| rng.gen_range(1..=die_type)).collect();
        Ok(Self {
            id: id::random_uuid(rng),
            die_type,
            count,
            rolls,
        })
    }
}
