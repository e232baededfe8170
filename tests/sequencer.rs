//! Reveal sequencing: one settle per tick, finals untouched by timing.

use highroller::record::RollRecord;
use highroller::sequencer::{Phase, RollSequencer, StartOutcome, TickOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn five_dice_settle_in_exactly_five_ticks() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let record = RollRecord::roll(6, 5, &mut rng)?;
    let finals = record.rolls.clone();

    let mut seq = RollSequencer::new();
    assert_eq!(seq.start(record, &mut rng), StartOutcome::Revealing);
    assert!(seq.is_revealing());

    for tick in 0..4 {
        assert_eq!(seq.advance(&mut rng), TickOutcome::Settled(tick));
        assert_eq!(seq.progress(), tick + 1);
        // Settled prefix already shows the precomputed finals.
        assert_eq!(&seq.display()[..=tick], &finals[..=tick]);
    }
    assert_eq!(seq.advance(&mut rng), TickOutcome::Finished);

    assert_eq!(seq.phase(), Phase::Complete);
    assert!(!seq.is_revealing());
    assert_eq!(seq.display(), finals.as_slice());
    Ok(())
}

#[test]
fn advance_after_complete_is_a_no_op() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let record = RollRecord::roll(6, 2, &mut rng)?;
    let finals = record.rolls.clone();

    let mut seq = RollSequencer::new();
    seq.start(record, &mut rng);
    seq.advance(&mut rng);
    assert_eq!(seq.advance(&mut rng), TickOutcome::Finished);

    assert_eq!(seq.advance(&mut rng), TickOutcome::Idle);
    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(seq.display(), finals.as_slice());
    Ok(())
}

#[test]
fn advance_without_a_roll_is_a_no_op() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut seq = RollSequencer::new();
    assert_eq!(seq.phase(), Phase::Idle);
    assert_eq!(seq.advance(&mut rng), TickOutcome::Idle);
    assert_eq!(seq.phase(), Phase::Idle);
}

#[test]
fn zero_count_completes_without_a_tick() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let record = RollRecord::roll(6, 0, &mut rng)?;

    let mut seq = RollSequencer::new();
    assert_eq!(seq.start(record, &mut rng), StartOutcome::Finished);
    assert_eq!(seq.phase(), Phase::Complete);
    assert!(seq.display().is_empty());
    assert_eq!(seq.advance(&mut rng), TickOutcome::Idle);
    Ok(())
}

#[test]
fn filler_values_stay_within_die_range_during_reveal() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let record = RollRecord::roll(4, 8, &mut rng)?;

    let mut seq = RollSequencer::new();
    seq.start(record, &mut rng);
    while seq.is_revealing() {
        assert!(seq.display().iter().all(|&v| (1..=4).contains(&v)));
        seq.advance(&mut rng);
    }
    Ok(())
}

#[test]
fn finish_now_settles_everything_and_signals_once() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let record = RollRecord::roll(20, 6, &mut rng)?;
    let finals = record.rolls.clone();

    let mut seq = RollSequencer::new();
    seq.start(record, &mut rng);
    assert!(seq.finish_now());
    assert!(!seq.finish_now());

    assert_eq!(seq.phase(), Phase::Complete);
    assert_eq!(seq.display(), finals.as_slice());
    assert_eq!(seq.advance(&mut rng), TickOutcome::Idle);
    Ok(())
}
