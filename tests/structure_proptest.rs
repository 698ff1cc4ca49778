/// Property-based tests for the blind structure generator using proptest
///
/// These tests verify schedule invariants across a wide range of
/// configurations rather than hand-picked presets.
use poker_director::structure::{TournamentConfig, generate, round_to_chip_value};
use proptest::prelude::*;

// Strategy to generate a valid configuration. Starting blinds are drawn on
// the 25-chip grid so they resemble real tournaments.
fn config_strategy() -> impl Strategy<Value = TournamentConfig> {
    (
        1i64..=40,
        1u32..=60,
        any::<bool>(),
        1u32..=30,
        1u32..=10,
    )
        .prop_map(
            |(sb_units, level_mins, include_breaks, break_mins, break_interval)| {
                let starting_small_blind = sb_units * 25;
                TournamentConfig {
                    name: "Prop".to_string(),
                    starting_small_blind,
                    starting_big_blind: starting_small_blind * 2,
                    level_duration_mins: level_mins,
                    include_breaks,
                    break_duration_mins: break_mins,
                    break_interval,
                }
            },
        )
}

proptest! {
    #[test]
    fn test_always_twenty_play_levels(config in config_strategy()) {
        let levels = generate(&config).unwrap();
        let plays = levels.iter().filter(|l| !l.is_break()).count();
        prop_assert_eq!(plays, 20);
    }

    #[test]
    fn test_numbering_is_contiguous(config in config_strategy()) {
        let levels = generate(&config).unwrap();
        for (i, level) in levels.iter().enumerate() {
            prop_assert_eq!(level.level as usize, i + 1);
        }
    }

    #[test]
    fn test_big_blinds_never_decrease(config in config_strategy()) {
        let levels = generate(&config).unwrap();
        let plays: Vec<_> = levels.iter().filter(|l| !l.is_break()).collect();

        for pair in plays.windows(2) {
            prop_assert!(
                pair[1].big_blind >= pair[0].big_blind,
                "big blind fell from {} to {}",
                pair[0].big_blind,
                pair[1].big_blind
            );
        }
    }

    #[test]
    fn test_play_levels_dominate_small_blind(config in config_strategy()) {
        let levels = generate(&config).unwrap();
        for level in levels.iter().filter(|l| !l.is_break()) {
            prop_assert!(level.big_blind >= level.small_blind);
            prop_assert!(level.small_blind > 0);
        }
    }

    #[test]
    fn test_breaks_only_on_interval_boundaries(config in config_strategy()) {
        let levels = generate(&config).unwrap();

        let mut plays_seen = 0usize;
        for level in &levels {
            if level.is_break() {
                prop_assert!(config.include_breaks, "break without breaks enabled");
                prop_assert!(plays_seen > 0);
                prop_assert_eq!(plays_seen % config.break_interval as usize, 0);
                prop_assert!(plays_seen < 20, "no break after the final level");
            } else {
                plays_seen += 1;
            }
        }
    }

    #[test]
    fn test_chip_rounding_is_idempotent(value in 1i64..1_000_000) {
        let once = round_to_chip_value(value);
        prop_assert_eq!(round_to_chip_value(once), once);
    }

    #[test]
    fn test_chip_rounding_stays_close(value in 100i64..1_000_000) {
        // Rounding never strays more than 50% from the raw value
        let rounded = round_to_chip_value(value);
        let drift = (rounded - value).abs() as f64 / value as f64;
        prop_assert!(drift <= 0.5, "{value} rounded to {rounded} (drift {drift})");
    }
}
