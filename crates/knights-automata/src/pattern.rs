//! Periodicity detection over bounded output histories.
//!
//! A history has candidate period `p` when its whole retained window agrees
//! with a shift of `p`:
//!
//! ```text
//! output[t - i] == output[t - p - i]    for i in 0..(PATTERN_LOOKBACK - p)
//! ```
//!
//! Only periods in `1..PATTERN_LOOKBACK` can be tested, so cycles longer
//! than the window go unnoticed, and a fixed point shows up as period 1
//! (along with every other period).

use std::collections::BTreeSet;

use crate::history::{OutputHistory, PATTERN_LOOKBACK};

/// Every period the detector can test.
pub fn all_periods() -> std::ops::Range<usize> {
    1..PATTERN_LOOKBACK
}

/// Returns the candidate periods of `history` at `time`, testing only
/// `candidates`.
///
/// Candidates outside `1..PATTERN_LOOKBACK`, and any whose comparison would
/// reach outside the retained window, are rejected.
pub fn possible_patterns(
    history: &OutputHistory,
    time: u64,
    candidates: impl IntoIterator<Item = usize>,
) -> BTreeSet<usize> {
    let at = |back: usize| time.checked_sub(back as u64).and_then(|t| history.get(t));

    candidates
        .into_iter()
        .filter(|&period| (1..PATTERN_LOOKBACK).contains(&period))
        .filter(|&period| {
            (0..PATTERN_LOOKBACK - period).all(|i| {
                let (recent, shifted) = (at(i), at(period + i));
                recent.is_some() && recent == shifted
            })
        })
        .collect()
}

/// Returns the periods shared by every history at `time`.
///
/// The first history is searched over every period; each later one only
/// over the periods still standing. Empty when `time` is inside the first
/// window or there are no histories.
pub fn common_periods<'a>(
    histories: impl IntoIterator<Item = &'a OutputHistory>,
    time: u64,
) -> BTreeSet<usize> {
    if time < PATTERN_LOOKBACK as u64 {
        return BTreeSet::new();
    }

    let mut histories = histories.into_iter();
    let Some(first) = histories.next() else {
        return BTreeSet::new();
    };

    let mut periods = possible_patterns(first, time, all_periods());
    for history in histories {
        if periods.is_empty() {
            break;
        }
        periods = possible_patterns(history, time, periods.iter().copied());
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a history by repeating `cycle` until `time`.
    fn periodic(cycle: &[u8], time: u64) -> OutputHistory {
        let mut history = OutputHistory::new(cycle[0]);
        for t in 1..=time {
            history.push(cycle[(t as usize) % cycle.len()]);
        }
        history
    }

    fn multiples(period: usize) -> BTreeSet<usize> {
        (period..PATTERN_LOOKBACK).step_by(period).collect()
    }

    #[test]
    fn test_period_three() {
        let h = periodic(&[1, 0, 0], 40);
        let found = possible_patterns(&h, 40, all_periods());

        assert!(found.contains(&3));
        assert_eq!(found, multiples(3));
    }

    #[test]
    fn test_constant_history_matches_everything() {
        let h = periodic(&[1], 25);
        let found = possible_patterns(&h, 25, all_periods());
        assert_eq!(found, all_periods().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_endpoints_alone_are_not_enough() {
        // output[t] == output[t - 2] but the window is not 2-periodic.
        let mut h = periodic(&[1, 0], 30);
        h.push(1);
        h.push(1);
        h.push(1);
        let found = possible_patterns(&h, 33, [2]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_candidates_restrict_search() {
        let h = periodic(&[0, 1, 1, 0], 30);
        assert_eq!(possible_patterns(&h, 30, [3, 4, 5]), BTreeSet::from([4]));
    }

    #[test]
    fn test_out_of_range_candidates_rejected() {
        let h = periodic(&[1], 30);
        let found = possible_patterns(&h, 30, [0, PATTERN_LOOKBACK, 50]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_short_history_rejected() {
        let h = periodic(&[1], 5);
        assert!(possible_patterns(&h, 5, all_periods()).is_empty());
    }

    #[test]
    fn test_common_periods_same_period() {
        let a = periodic(&[1, 1, 0, 0], 30);
        let b = periodic(&[0, 1, 0, 0], 30);

        let found = common_periods([&a, &b], 30);
        assert!(found.contains(&4));
        assert!(found.is_superset(&multiples(4)));
        assert!(!found.contains(&1));
        assert!(!found.contains(&2));
    }

    #[test]
    fn test_common_periods_disjoint() {
        let a = periodic(&[1, 0, 0], 30);
        let b = periodic(&[1, 1, 0, 0, 0, 0, 0], 30);
        assert!(common_periods([&a, &b], 30).is_empty());
    }

    #[test]
    fn test_common_periods_share_multiple_inside_window() {
        // 15 is a multiple of both 3 and 5 and fits the window.
        let a = periodic(&[1, 0, 0], 30);
        let b = periodic(&[1, 1, 0, 0, 0], 30);
        assert_eq!(common_periods([&a, &b], 30), BTreeSet::from([15]));
    }

    #[test]
    fn test_common_periods_needs_full_window() {
        let a = periodic(&[1], 19);
        assert!(common_periods([&a], 19).is_empty());

        let a = periodic(&[1], 20);
        assert!(common_periods([&a], 20).contains(&1));
    }

    #[test]
    fn test_common_periods_empty_input() {
        assert!(common_periods(std::iter::empty(), 40).is_empty());
    }
}
