use std::collections::HashSet;

/// Inclusive `(lower, upper)` limits questions are drawn from.
pub type Level = (i64, i64);

pub const GAME_LEVELS: [Level; 12] = [
    (0, 99),
    (-99, 99),
    (0, 999),
    (-999, 999),
    (0, 9_999),
    (-9_999, 9_999),
    (0, 99_999),
    (-99_999, 99_999),
    (0, 999_999),
    (-999_999, 999_999),
    (0, 999_999_999),
    (-999_999_999, 999_999_999),
];

/// Levels must be unique and each one a valid interval.
pub fn validate_levels(levels: &[Level]) -> bool {
    let unique: HashSet<&Level> = levels.iter().collect();
    unique.len() == levels.len() && levels.iter().all(|(lower, upper)| lower <= upper)
}

/// Looks up a level by its index, given as user text.
pub fn fetch_level(input: &str) -> Option<(usize, Level)> {
    let index = match input.trim().parse::<usize>() {
        Ok(index) => index,
        Err(e) => {
            log::error!("'{}' is not a game level index: {}", input, e);
            return None;
        }
    };

    if validate_levels(&GAME_LEVELS) && index < GAME_LEVELS.len() {
        Some((index, GAME_LEVELS[index]))
    } else {
        log::error!("unable to fetch the game level with index {}", index);
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Statistics {
    pub correct_percentage: f64,
    pub incorrect_percentage: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn calculate_statistics(correct: u64, incorrect: u64) -> Option<Statistics> {
    let total = correct + incorrect;
    if total == 0 {
        return None;
    }
    let correct_percentage = round2(correct as f64 / total as f64 * 100.0);
    Some(Statistics {
        correct_percentage,
        incorrect_percentage: round2(100.0 - correct_percentage),
    })
}

/// Moves one level up at 50% correct answers or better, one level down otherwise.
pub fn change_level(correct: u64, incorrect: u64, level: usize) -> usize {
    let stats = match calculate_statistics(correct, incorrect) {
        Some(stats) => stats,
        None => return level,
    };

    if stats.correct_percentage >= 50.0 {
        if level + 1 < GAME_LEVELS.len() {
            level + 1
        } else {
            log::info!("maximum level reached");
            level
        }
    } else if level > 0 {
        level - 1
    } else {
        log::info!("minimum level reached");
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_levels_are_valid() {
        assert!(validate_levels(&GAME_LEVELS));
    }

    #[test]
    fn duplicate_or_inverted_levels_are_invalid() {
        assert!(!validate_levels(&[(0, 9), (0, 9)]));
        assert!(!validate_levels(&[(0, 9), (5, 1)]));
        assert!(validate_levels(&[]));
    }

    #[test]
    fn fetch_level_by_index() {
        assert_eq!(fetch_level("0"), Some((0, GAME_LEVELS[0])));
        assert_eq!(fetch_level(" 7\n"), Some((7, GAME_LEVELS[7])));
        assert_eq!(fetch_level("11"), Some((11, (-999_999_999, 999_999_999))));
    }

    #[test]
    fn fetch_level_rejects_bad_input() {
        for input in &["bogus", "3.14", "15", "12", "-1", ""] {
            assert_eq!(fetch_level(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn statistics_are_rounded() {
        let cases = [
            (3, 20, 13.04, 86.96),
            (3, 15, 16.67, 83.33),
            (19, 20, 48.72, 51.28),
            (15, 20, 42.86, 57.14),
            (20, 20, 50.0, 50.0),
        ];
        for &(correct, incorrect, good, bad) in &cases {
            let stats = calculate_statistics(correct, incorrect).unwrap();
            assert!((stats.correct_percentage - good).abs() < 1e-9);
            assert!((stats.incorrect_percentage - bad).abs() < 1e-9);
        }
        assert_eq!(calculate_statistics(0, 0), None);
    }

    #[test]
    fn level_climbs_and_caps() {
        let mut level = 0;
        for expected in 1..GAME_LEVELS.len() {
            level = change_level(6, 4, level);
            assert_eq!(level, expected);
        }
        assert_eq!(change_level(6, 4, level), GAME_LEVELS.len() - 1);
    }

    #[test]
    fn level_drops_and_floors() {
        let mut level = GAME_LEVELS.len() - 1;
        for expected in (0..GAME_LEVELS.len() - 1).rev() {
            level = change_level(4, 6, level);
            assert_eq!(level, expected);
        }
        assert_eq!(change_level(4, 6, 0), 0);
    }

    #[test]
    fn no_answers_keep_level() {
        assert_eq!(change_level(0, 0, 5), 5);
    }
}
