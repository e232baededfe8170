//! Properties of roll record construction.

use highroller::error::RollError;
use highroller::record::{RollRecord, DIE_OPTIONS, MAX_DICE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn every_die_option_and_count_yields_in_range_values() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    for die_type in DIE_OPTIONS {
        for count in 1..=MAX_DICE {
            let record = RollRecord::roll(die_type, count, &mut rng)?;
            assert_eq!(record.die_type, die_type);
            assert_eq!(record.count, count);
            assert_eq!(record.rolls.len(), count as usize);
            assert!(
                record.rolls.iter().all(|&v| (1..=die_type).contains(&v)),
                "out-of-range value for D{die_type} x{count}: {:?}",
                record.rolls
            );
        }
    }
    Ok(())
}

#[test]
fn zero_faced_die_is_rejected_before_rolling() {
    let mut rng = StdRng::seed_from_u64(7);
    let result = RollRecord::roll(0, 3, &mut rng);
    assert!(matches!(result, Err(RollError::ZeroFacedDie)));
}

#[test]
fn zero_count_yields_an_empty_record() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let record = RollRecord::roll(6, 0, &mut rng)?;
    assert_eq!(record.count, 0);
    assert!(record.rolls.is_empty());
    Ok(())
}

#[test]
fn ids_are_hyphenated_v4_uuids_and_distinct() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let a = RollRecord::roll(20, 1, &mut rng)?;
    let b = RollRecord::roll(20, 1, &mut rng)?;
    assert_ne!(a.id, b.id);

    assert_eq!(a.id.len(), 36);
    let dash_positions: Vec<usize> = a
        .id
        .char_indices()
        .filter(|&(_, c)| c == '-')
        .map(|(i, _)| i)
        .collect();
    assert_eq!(dash_positions, vec![8, 13, 18, 23]);
    assert!(a
        .id
        .chars()
        .all(|c| matches!(c, '0'..='9' | 'a'..='f' | '-')));
    // Version nibble directly after the second dash.
    assert_eq!(a.id.chars().nth(14), Some('4'));
    Ok(())
}
