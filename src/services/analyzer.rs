//! Multiplier heuristic and input parsing.
//!
//! `analyze` looks at two windows of the same history: the last
//! [`RECENT_WINDOW`] rounds for the low streak and the recent maximum, and
//! the whole retained history when searching for the latest high round.

use chrono::{DateTime, Utc};

use crate::domain::errors::ParseError;
use crate::domain::models::{Advice, AnalysisResult, LastHigh, Observation};

/// Number of most recent rounds used for the streak and the maximum
pub const RECENT_WINDOW: usize = 10;

/// Rounds at or below this multiplier count as low
pub const LOW_THRESHOLD: f64 = 1.5;

/// Low streak length that triggers [`Advice::HighExpected`]
pub const LOW_STREAK_TRIGGER: usize = 5;

/// Rounds at or above this multiplier count as high
pub const HIGH_THRESHOLD: f64 = 10.0;

/// A high round younger than this (inclusive) triggers [`Advice::WaitAfterHigh`]
pub const RECENT_HIGH_MINUTES: i64 = 10;

/// Computes advice and summary metrics for a chronologically ordered history.
///
/// Returns `None` for an empty history; callers answer with a "no data"
/// message in that case.
pub fn analyze(observations: &[Observation], now: DateTime<Utc>) -> Option<AnalysisResult> {
    if observations.is_empty() {
        return None;
    }

    let recent = &observations[observations.len().saturating_sub(RECENT_WINDOW)..];

    let low_streak = recent
        .iter()
        .rev()
        .take_while(|o| o.value <= LOW_THRESHOLD)
        .count();

    let recent_max = recent
        .iter()
        .map(|o| o.value)
        .fold(f64::NEG_INFINITY, f64::max);

    let last_high = observations
        .iter()
        .rev()
        .find(|o| o.value >= HIGH_THRESHOLD)
        .map_or(LastHigh::NotFound, |o| {
            LastHigh::MinutesAgo(whole_minutes_between(o.at, now))
        });

    let advice = if low_streak >= LOW_STREAK_TRIGGER {
        Advice::HighExpected
    } else if recent_max >= HIGH_THRESHOLD
        && last_high
            .minutes()
            .is_some_and(|minutes| minutes <= RECENT_HIGH_MINUTES)
    {
        Advice::WaitAfterHigh
    } else {
        Advice::PlaySafe
    };

    Some(AnalysisResult {
        advice,
        low_streak,
        recent_max,
        last_high,
    })
}

/// Floored whole minutes from `then` to `now`
fn whole_minutes_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_milliseconds().div_euclid(60_000)
}

/// Parses a whitespace-separated list of multipliers.
///
/// The batch is all-or-nothing: one bad token rejects the whole message.
pub fn parse_coefficients(text: &str) -> Result<Vec<f64>, ParseError> {
    let values = text
        .split_whitespace()
        .map(|token| {
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
                token: token.to_string(),
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ParseError::NonFinite {
                    token: token.to_string(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at_now(values: &[f64], now: DateTime<Utc>) -> Vec<Observation> {
        values.iter().map(|&v| Observation::new(v, now)).collect()
    }

    #[test]
    fn test_empty_history_has_no_analysis() {
        assert!(analyze(&[], Utc::now()).is_none());
    }

    #[test]
    fn test_trailing_low_run_triggers_high_expected() {
        let now = Utc::now();
        let history = at_now(&[2.0, 1.0, 1.2, 1.1, 1.3, 1.0], now);

        let result = analyze(&history, now).unwrap();
        assert_eq!(result.low_streak, 5);
        assert_eq!(result.advice, Advice::HighExpected);
        assert!((result.recent_max - 2.0).abs() < f64::EPSILON);
        assert_eq!(result.last_high, LastHigh::NotFound);
    }

    #[test]
    fn test_low_streak_is_contiguous_only() {
        let now = Utc::now();
        let history = at_now(&[1.0, 1.0, 1.0, 1.0, 3.0, 1.1], now);

        let result = analyze(&history, now).unwrap();
        assert_eq!(result.low_streak, 1);
        assert_eq!(result.advice, Advice::PlaySafe);
    }

    #[test]
    fn test_threshold_values_are_inclusive() {
        let now = Utc::now();
        let history = at_now(&[1.5, 1.5, 1.5, 1.5, 1.5], now);
        assert_eq!(analyze(&history, now).unwrap().low_streak, 5);

        let history = at_now(&[10.0], now);
        let result = analyze(&history, now).unwrap();
        assert_eq!(result.last_high, LastHigh::MinutesAgo(0));
        assert_eq!(result.advice, Advice::WaitAfterHigh);
    }

    #[test]
    fn test_low_streak_capped_by_recent_window() {
        let now = Utc::now();
        let history = at_now(&[1.0; 25], now);
        assert_eq!(analyze(&history, now).unwrap().low_streak, RECENT_WINDOW);
    }

    #[test]
    fn test_recent_max_ignores_older_rounds() {
        let now = Utc::now();
        let mut values = vec![50.0];
        values.extend([2.0; 10]);
        let history = at_now(&values, now);

        let result = analyze(&history, now).unwrap();
        assert!((result.recent_max - 2.0).abs() < f64::EPSILON);
        // The high round is outside the last ten but still found for recency.
        assert_eq!(result.last_high, LastHigh::MinutesAgo(0));
        assert_eq!(result.advice, Advice::PlaySafe);
    }

    #[test]
    fn test_recent_high_suggests_waiting() {
        let now = Utc::now();
        let history = vec![
            Observation::new(1.7, now - Duration::minutes(5)),
            Observation::new(12.0, now - Duration::minutes(3)),
            Observation::new(2.0, now - Duration::minutes(1)),
        ];

        let result = analyze(&history, now).unwrap();
        assert_eq!(result.last_high, LastHigh::MinutesAgo(3));
        assert_eq!(result.last_high.to_string(), "3 мин назад");
        assert_eq!(result.advice, Advice::WaitAfterHigh);
    }

    #[test]
    fn test_old_high_falls_back_to_play_safe() {
        let now = Utc::now();
        let history = vec![
            Observation::new(15.0, now - Duration::minutes(11)),
            Observation::new(2.0, now),
        ];

        let result = analyze(&history, now).unwrap();
        assert_eq!(result.last_high, LastHigh::MinutesAgo(11));
        assert_eq!(result.advice, Advice::PlaySafe);
    }

    #[test]
    fn test_low_streak_wins_over_recent_high() {
        let now = Utc::now();
        let history = at_now(&[20.0, 1.0, 1.0, 1.0, 1.0, 1.0], now);

        let result = analyze(&history, now).unwrap();
        assert_eq!(result.advice, Advice::HighExpected);
    }

    #[test]
    fn test_most_recent_high_is_used() {
        let now = Utc::now();
        let history = vec![
            Observation::new(30.0, now - Duration::minutes(40)),
            Observation::new(11.0, now - Duration::minutes(2)),
        ];
        assert_eq!(
            analyze(&history, now).unwrap().last_high,
            LastHigh::MinutesAgo(2)
        );
    }

    #[test]
    fn test_partial_minutes_are_floored() {
        let now = Utc::now();
        let then = now - Duration::seconds(179);
        assert_eq!(whole_minutes_between(then, now), 2);
        assert_eq!(whole_minutes_between(now, now), 0);
    }

    #[test]
    fn test_parse_valid_list() {
        assert_eq!(parse_coefficients("1.2 2.5 3.1"), Ok(vec![1.2, 2.5, 3.1]));
        assert_eq!(parse_coefficients("  7\t\n1e1 "), Ok(vec![7.0, 10.0]));
    }

    #[test]
    fn test_parse_rejects_whole_batch() {
        assert_eq!(
            parse_coefficients("1.2 abc 3.1"),
            Err(ParseError::InvalidNumber {
                token: "abc".to_string()
            })
        );
        assert!(parse_coefficients("1,5").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_coefficients(""), Err(ParseError::Empty));
        assert_eq!(parse_coefficients("   \n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_coefficients("1.0 NaN"),
            Err(ParseError::NonFinite { .. })
        ));
        assert!(matches!(
            parse_coefficients("inf"),
            Err(ParseError::NonFinite { .. })
        ));
    }
}
